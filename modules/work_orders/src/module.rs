//! Module declaration and lifecycle implementation

use crate::contract::WorkOrdersApi;
use crate::domain::{AttachmentStore, EventPublisher, Service};
use crate::infra::storage::repositories::{
    SeaOrmAttachmentRepository, SeaOrmCommentRepository, SeaOrmWorkOrderRepository,
};
use accounts::AccountsApi;
use anyhow::Result;
use assets::AssetsApi;
use facilities::FacilitiesApi;
use sea_orm::DatabaseConnection;
use sitekit::{DbModule, RestModule};
use std::sync::Arc;

/// Work orders module: repair tasks with comments and file attachments
pub struct WorkOrdersModule {
    service: Arc<Service>,
    max_upload_bytes: u64,
}

impl WorkOrdersModule {
    /// Wire repositories and the domain service over the given connection.
    /// Asset, space and user references are validated through the sibling
    /// module clients; completed orders feed the asset maintenance cascade.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        db: Arc<DatabaseConnection>,
        store: Arc<dyn AttachmentStore>,
        assets: Arc<dyn AssetsApi>,
        facilities: Arc<dyn FacilitiesApi>,
        accounts: Arc<dyn AccountsApi>,
        events: Arc<dyn EventPublisher>,
        max_upload_bytes: u64,
    ) -> Self {
        let orders = Arc::new(SeaOrmWorkOrderRepository::new(db.clone()));
        let comments = Arc::new(SeaOrmCommentRepository::new(db.clone()));
        let attachments = Arc::new(SeaOrmAttachmentRepository::new(db));
        let service = Arc::new(Service::new(
            orders,
            comments,
            attachments,
            store,
            assets,
            facilities,
            accounts,
            events,
            max_upload_bytes,
        ));
        Self {
            service,
            max_upload_bytes,
        }
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Native client for in-process consumers
    pub fn client(&self) -> Arc<dyn WorkOrdersApi> {
        Arc::new(crate::api::native::NativeClient::new(self.service.clone()))
    }
}

#[async_trait::async_trait]
impl DbModule for WorkOrdersModule {
    async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("work orders migrations completed");
        Ok(())
    }
}

impl RestModule for WorkOrdersModule {
    fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        crate::api::rest::routes::register_routes(
            router,
            self.service.clone(),
            self.max_upload_bytes,
        )
    }
}

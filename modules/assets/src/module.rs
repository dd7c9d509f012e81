//! Module declaration and lifecycle implementation

use crate::contract::AssetsApi;
use crate::domain::{EventPublisher, Service};
use crate::infra::storage::repositories::{SeaOrmAssetRepository, SeaOrmCategoryRepository};
use anyhow::Result;
use facilities::FacilitiesApi;
use sea_orm::DatabaseConnection;
use sitekit::{DbModule, RestModule};
use std::sync::Arc;

/// Assets module: the category forest and the asset register
pub struct AssetsModule {
    service: Arc<Service>,
}

impl AssetsModule {
    /// Wire repositories and the domain service over the given connection.
    /// Space references are validated through the facilities client.
    pub fn new(
        db: Arc<DatabaseConnection>,
        facilities: Arc<dyn FacilitiesApi>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        let categories = Arc::new(SeaOrmCategoryRepository::new(db.clone()));
        let assets = Arc::new(SeaOrmAssetRepository::new(db));
        let service = Arc::new(Service::new(categories, assets, facilities, events));
        Self { service }
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Native client for in-process consumers
    pub fn client(&self) -> Arc<dyn AssetsApi> {
        Arc::new(crate::api::native::NativeClient::new(self.service.clone()))
    }
}

#[async_trait::async_trait]
impl DbModule for AssetsModule {
    async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("assets migrations completed");
        Ok(())
    }
}

impl RestModule for AssetsModule {
    fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        crate::api::rest::routes::register_routes(router, self.service.clone())
    }
}

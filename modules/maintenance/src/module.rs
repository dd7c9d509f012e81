//! Module declaration and lifecycle implementation

use crate::contract::MaintenanceApi;
use crate::domain::{EventPublisher, Service};
use crate::infra::storage::repositories::{SeaOrmLogRepository, SeaOrmScheduleRepository};
use anyhow::Result;
use assets::AssetsApi;
use sea_orm::DatabaseConnection;
use sitekit::{DbModule, RestModule};
use std::sync::Arc;

/// Maintenance module: planned schedules and performed-work logs
pub struct MaintenanceModule {
    service: Arc<Service>,
}

impl MaintenanceModule {
    /// Wire repositories and the domain service over the given connection.
    /// Asset references are validated through the assets client, which also
    /// receives the last-maintained cascade.
    pub fn new(
        db: Arc<DatabaseConnection>,
        assets: Arc<dyn AssetsApi>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        let schedules = Arc::new(SeaOrmScheduleRepository::new(db.clone()));
        let logs = Arc::new(SeaOrmLogRepository::new(db));
        let service = Arc::new(Service::new(schedules, logs, assets, events));
        Self { service }
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Native client for in-process consumers
    pub fn client(&self) -> Arc<dyn MaintenanceApi> {
        Arc::new(crate::api::native::NativeClient::new(self.service.clone()))
    }
}

#[async_trait::async_trait]
impl DbModule for MaintenanceModule {
    async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("maintenance migrations completed");
        Ok(())
    }
}

impl RestModule for MaintenanceModule {
    fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        crate::api::rest::routes::register_routes(router, self.service.clone())
    }
}

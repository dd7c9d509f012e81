//! Module declaration and lifecycle implementation

use crate::contract::FacilitiesApi;
use crate::domain::{EventPublisher, Service};
use crate::infra::storage::repositories::{
    SeaOrmBuildingRepository, SeaOrmFloorRepository, SeaOrmSpaceRepository,
};
use anyhow::Result;
use sea_orm::DatabaseConnection;
use sitekit::{DbModule, RestModule};
use std::sync::Arc;

/// Facilities module: buildings, floors and spaces
pub struct FacilitiesModule {
    service: Arc<Service>,
}

impl FacilitiesModule {
    /// Wire repositories and the domain service over the given connection
    pub fn new(db: Arc<DatabaseConnection>, events: Arc<dyn EventPublisher>) -> Self {
        let buildings = Arc::new(SeaOrmBuildingRepository::new(db.clone()));
        let floors = Arc::new(SeaOrmFloorRepository::new(db.clone()));
        let spaces = Arc::new(SeaOrmSpaceRepository::new(db));
        let service = Arc::new(Service::new(buildings, floors, spaces, events));
        Self { service }
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Native client for in-process consumers
    pub fn client(&self) -> Arc<dyn FacilitiesApi> {
        Arc::new(crate::api::native::NativeClient::new(self.service.clone()))
    }
}

#[async_trait::async_trait]
impl DbModule for FacilitiesModule {
    async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("facilities migrations completed");
        Ok(())
    }
}

impl RestModule for FacilitiesModule {
    fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        crate::api::rest::routes::register_routes(router, self.service.clone())
    }
}

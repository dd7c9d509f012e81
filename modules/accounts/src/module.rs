//! Module declaration and lifecycle implementation

use crate::contract::AccountsApi;
use crate::domain::{EventPublisher, Service};
use crate::infra::storage::repositories::SeaOrmUserRepository;
use anyhow::Result;
use sea_orm::DatabaseConnection;
use sitekit::{DbModule, JwtCodec, RestModule};
use std::sync::Arc;

/// Accounts module: users, roles and login
pub struct AccountsModule {
    service: Arc<Service>,
    codec: Arc<JwtCodec>,
}

impl AccountsModule {
    /// Wire the repository and the domain service over the given connection
    pub fn new(
        db: Arc<DatabaseConnection>,
        codec: Arc<JwtCodec>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        let users = Arc::new(SeaOrmUserRepository::new(db));
        let service = Arc::new(Service::new(users, events));
        Self { service, codec }
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Native client for in-process consumers
    pub fn client(&self) -> Arc<dyn AccountsApi> {
        Arc::new(crate::api::native::NativeClient::new(self.service.clone()))
    }

    /// The public login router; mount it outside the auth middleware
    pub fn login_routes(&self) -> axum::Router {
        crate::api::rest::routes::login_routes(self.service.clone(), self.codec.clone())
    }
}

#[async_trait::async_trait]
impl DbModule for AccountsModule {
    async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("accounts migrations completed");
        Ok(())
    }
}

impl RestModule for AccountsModule {
    fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        crate::api::rest::routes::register_routes(router, self.service.clone())
    }
}

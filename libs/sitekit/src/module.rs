//! Module lifecycle contracts
//!
//! Every domain module exposes a module struct implementing the subset of
//! these traits it needs; the server binary drives them in order (migrate all,
//! then register REST routes).

use async_trait::async_trait;
use axum::Router;
use sea_orm::DatabaseConnection;

/// A module that owns database tables and their migrations
#[async_trait]
pub trait DbModule: Send + Sync {
    /// Bring the module's schema up to date
    async fn migrate(&self, db: &DatabaseConnection) -> anyhow::Result<()>;
}

/// A module that contributes REST routes
pub trait RestModule: Send + Sync {
    /// Attach the module's routes to the shared router
    fn register_rest(&self, router: Router) -> anyhow::Result<Router>;
}

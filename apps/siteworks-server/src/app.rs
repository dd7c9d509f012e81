//! Application wiring
//!
//! Builds the module graph over one database connection and assembles the
//! HTTP router: the JSON API under `/api/v1`, the portal at the root, and
//! the public health and OpenAPI endpoints. The end-to-end tests construct
//! the same [`App`] the `serve` command boots.

use crate::config::AppConfig;
use crate::openapi;
use accounts::AccountsModule;
use anyhow::Result;
use assets::AssetsModule;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use facilities::FacilitiesModule;
use maintenance::MaintenanceModule;
use portal::PortalModule;
use sea_orm::DatabaseConnection;
use sitekit::{DbModule, JwtCodec, Problem, RestModule};
use std::sync::Arc;
use std::time::Duration;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use work_orders::infra::FsAttachmentStore;
use work_orders::WorkOrdersModule;

/// The wired application: shared connection, token codec and every module
pub struct App {
    pub db: Arc<DatabaseConnection>,
    pub codec: Arc<JwtCodec>,
    pub facilities: FacilitiesModule,
    pub assets: AssetsModule,
    pub maintenance: MaintenanceModule,
    pub work_orders: WorkOrdersModule,
    pub accounts: AccountsModule,
    pub portal: PortalModule,
}

impl App {
    /// Connect to the database and wire the modules in dependency order
    pub async fn build(config: &AppConfig) -> Result<Self> {
        let db = Arc::new(sitekit::db::connect(&config.database).await?);
        let codec = Arc::new(JwtCodec::new(
            &config.auth.jwt_secret,
            chrono::Duration::hours(config.auth.token_ttl_hours),
        ));

        let facilities = FacilitiesModule::new(
            db.clone(),
            Arc::new(facilities::domain::TracingEventPublisher),
        );
        let assets = AssetsModule::new(
            db.clone(),
            facilities.client(),
            Arc::new(assets::domain::TracingEventPublisher),
        );
        let maintenance = MaintenanceModule::new(
            db.clone(),
            assets.client(),
            Arc::new(maintenance::domain::TracingEventPublisher),
        );
        let accounts = AccountsModule::new(
            db.clone(),
            codec.clone(),
            Arc::new(accounts::domain::TracingEventPublisher),
        );
        let work_orders = WorkOrdersModule::new(
            db.clone(),
            Arc::new(FsAttachmentStore::new(&config.uploads.dir)),
            assets.client(),
            facilities.client(),
            accounts.client(),
            Arc::new(work_orders::domain::TracingEventPublisher),
            config.uploads.max_upload_bytes,
        );
        let portal = PortalModule::new(
            facilities.client(),
            assets.client(),
            maintenance.client(),
            work_orders.client(),
            accounts.client(),
        )?;

        Ok(Self {
            db,
            codec,
            facilities,
            assets,
            maintenance,
            work_orders,
            accounts,
            portal,
        })
    }

    /// Run every module's migrations against the shared connection
    pub async fn migrate(&self) -> Result<()> {
        let modules: [&dyn DbModule; 5] = [
            &self.facilities,
            &self.assets,
            &self.maintenance,
            &self.work_orders,
            &self.accounts,
        ];
        for module in modules {
            module.migrate(&self.db).await?;
        }
        Ok(())
    }

    /// Assemble the full router
    ///
    /// Everything under `/api/v1` except login sits behind the bearer-token
    /// middleware; the portal, the health probe and the OpenAPI document
    /// are public.
    pub fn router(&self, config: &AppConfig) -> Result<Router> {
        let rest: [&dyn RestModule; 5] = [
            &self.facilities,
            &self.assets,
            &self.maintenance,
            &self.work_orders,
            &self.accounts,
        ];
        let mut protected = Router::new();
        for module in rest {
            protected = module.register_rest(protected)?;
        }
        let protected = protected.layer(axum::middleware::from_fn_with_state(
            self.codec.clone(),
            sitekit::auth::require_auth,
        ));

        let api = Router::new()
            .merge(protected)
            .merge(self.accounts.login_routes());

        let health = Router::new()
            .route("/healthz", get(healthz))
            .with_state(self.db.clone());

        let router = Router::new()
            .nest("/api/v1", api)
            .route("/api/openapi.json", get(openapi::openapi_json))
            .merge(health)
            .merge(self.portal.routes())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(RequestBodyLimitLayer::new(config.server.body_limit_bytes))
            .layer(TraceLayer::new_for_http());

        Ok(router)
    }
}

/// Liveness probe; round-trips the database
async fn healthz(
    State(db): State<Arc<DatabaseConnection>>,
) -> Result<Json<serde_json::Value>, Problem> {
    db.ping().await.map_err(|error| {
        tracing::error!(error = %error, "database ping failed");
        Problem::internal()
    })?;
    Ok(Json(serde_json::json!({ "status": "ok" })))
}

//! Route registration for the assets REST surface

use super::handlers;
use crate::domain::Service;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

/// Mount all assets routes onto the given router
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let routes = Router::new()
        // Category endpoints
        .route("/asset-categories", get(handlers::list_categories))
        .route("/asset-categories", post(handlers::create_category))
        .route("/asset-categories/tree", get(handlers::category_tree))
        .route("/asset-categories/{id}", get(handlers::get_category))
        .route("/asset-categories/{id}", put(handlers::update_category))
        .route("/asset-categories/{id}", delete(handlers::delete_category))
        .route(
            "/asset-categories/{id}/children",
            get(handlers::list_category_children),
        )
        .route("/asset-categories/{id}/move", post(handlers::move_category))
        // Asset endpoints
        .route("/assets", get(handlers::list_assets))
        .route("/assets", post(handlers::create_asset))
        .route("/assets/{id}", get(handlers::get_asset))
        .route("/assets/{id}", put(handlers::update_asset))
        .route("/assets/{id}", delete(handlers::delete_asset))
        .route("/assets/{id}/status", put(handlers::change_asset_status))
        .with_state(service);

    Ok(router.merge(routes))
}

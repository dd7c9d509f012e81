//! Route table for the portal pages

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::PortalState;

pub fn router(state: PortalState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/buildings", get(handlers::buildings))
        .route("/buildings/{id}", get(handlers::building))
        .route("/assets", get(handlers::assets_list))
        .route("/assets/{id}", get(handlers::asset))
        .route("/work-orders", get(handlers::work_orders_list))
        .route("/work-orders/{id}", get(handlers::work_order))
        .with_state(state)
}

//! Route registration for the maintenance REST surface

use super::handlers;
use crate::domain::Service;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

/// Mount all maintenance routes onto the given router
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let routes = Router::new()
        // Schedule endpoints
        .route("/maintenance-schedules", get(handlers::list_schedules))
        .route("/maintenance-schedules", post(handlers::create_schedule))
        .route("/maintenance-schedules/{id}", get(handlers::get_schedule))
        .route("/maintenance-schedules/{id}", put(handlers::update_schedule))
        .route(
            "/maintenance-schedules/{id}",
            delete(handlers::delete_schedule),
        )
        // Log endpoints
        .route("/maintenance-logs", get(handlers::list_logs))
        .route("/maintenance-logs", post(handlers::create_log))
        .route("/maintenance-logs/{id}", get(handlers::get_log))
        .route("/maintenance-logs/{id}", put(handlers::update_log))
        .route("/maintenance-logs/{id}", delete(handlers::delete_log))
        .with_state(service);

    Ok(router.merge(routes))
}

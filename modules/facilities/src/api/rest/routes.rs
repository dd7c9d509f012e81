//! Route registration for the facilities REST surface

use super::handlers;
use crate::domain::Service;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

/// Mount all facilities routes onto the given router
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let routes = Router::new()
        // Building endpoints
        .route("/buildings", get(handlers::list_buildings))
        .route("/buildings", post(handlers::create_building))
        .route("/buildings/{id}", get(handlers::get_building))
        .route("/buildings/{id}", put(handlers::update_building))
        .route("/buildings/{id}", delete(handlers::delete_building))
        .route("/buildings/{id}/floors", get(handlers::list_building_floors))
        .route("/buildings/{id}/spaces", get(handlers::list_building_spaces))
        // Floor endpoints
        .route("/floors", post(handlers::create_floor))
        .route("/floors/{id}", get(handlers::get_floor))
        .route("/floors/{id}", put(handlers::update_floor))
        .route("/floors/{id}", delete(handlers::delete_floor))
        .route("/floors/{id}/spaces", get(handlers::list_floor_spaces))
        // Space endpoints
        .route("/spaces", post(handlers::create_space))
        .route("/spaces/{id}", get(handlers::get_space))
        .route("/spaces/{id}", put(handlers::update_space))
        .route("/spaces/{id}", delete(handlers::delete_space))
        .with_state(service);

    Ok(router.merge(routes))
}

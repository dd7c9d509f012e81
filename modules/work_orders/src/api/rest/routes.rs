//! Route registration for the work orders REST surface

use super::handlers;
use crate::domain::Service;
use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

/// Mount all work order routes onto the given router
pub fn register_routes(
    router: Router,
    service: Arc<Service>,
    max_upload_bytes: u64,
) -> anyhow::Result<Router> {
    // Headroom for multipart framing on top of the file cap itself
    let body_limit = max_upload_bytes as usize + 64 * 1024;

    let routes = Router::new()
        // Work order endpoints
        .route("/work-orders", get(handlers::list_work_orders))
        .route("/work-orders", post(handlers::create_work_order))
        .route("/work-orders/{id}", get(handlers::get_work_order))
        .route("/work-orders/{id}", put(handlers::update_work_order))
        .route("/work-orders/{id}", delete(handlers::delete_work_order))
        .route("/work-orders/{id}/status", post(handlers::change_status))
        .route("/work-orders/{id}/assign", post(handlers::assign))
        // Comment endpoints
        .route("/work-orders/{id}/comments", get(handlers::list_comments))
        .route("/work-orders/{id}/comments", post(handlers::create_comment))
        .route(
            "/work-orders/{id}/comments/{comment_id}",
            delete(handlers::delete_comment),
        )
        // Attachment endpoints
        .route(
            "/work-orders/{id}/attachments",
            get(handlers::list_attachments),
        )
        .route(
            "/work-orders/{id}/attachments",
            post(handlers::upload_attachment).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route(
            "/work-orders/{id}/attachments/{attachment_id}",
            get(handlers::download_attachment),
        )
        .route(
            "/work-orders/{id}/attachments/{attachment_id}",
            delete(handlers::delete_attachment),
        )
        .with_state(service);

    Ok(router.merge(routes))
}

//! Route registration for the accounts REST surface
//!
//! Management routes and `/auth/me` belong on the protected router; the
//! login route is built separately so the server can mount it outside the
//! auth middleware.

use super::handlers::{self, AuthState};
use crate::domain::Service;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sitekit::JwtCodec;
use std::sync::Arc;

/// Mount the protected accounts routes onto the given router
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let routes = Router::new()
        .route("/auth/me", get(handlers::me))
        // User management, admin only
        .route("/users", get(handlers::list_users))
        .route("/users", post(handlers::create_user))
        .route("/users/{id}", get(handlers::get_user))
        .route("/users/{id}", put(handlers::update_user))
        .route("/users/{id}", delete(handlers::delete_user))
        .route("/users/{id}/password", put(handlers::change_password))
        .with_state(service);

    Ok(router.merge(routes))
}

/// The public login router, mounted outside the auth middleware
pub fn login_routes(service: Arc<Service>, codec: Arc<JwtCodec>) -> Router {
    Router::new()
        .route("/auth/login", post(handlers::login))
        .with_state(AuthState { service, codec })
}

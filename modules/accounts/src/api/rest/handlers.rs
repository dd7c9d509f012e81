//! HTTP request handlers - thin layer that delegates to domain service
//!
//! Every management handler starts with the admin gate; `login` and `me`
//! are the only exceptions.

use super::{dto::*, error::map_domain_error};
use crate::domain::Service;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sitekit::auth::require_admin;
use sitekit::{AuthContext, JwtCodec, PageQuery, Problem};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// State for the public login route, which needs the token codec on top of
/// the service
#[derive(Clone)]
pub struct AuthState {
    pub service: Arc<Service>,
    pub codec: Arc<JwtCodec>,
}

// ===== Login =====

pub async fn login(
    State(state): State<AuthState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, Problem> {
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    let user = state
        .service
        .authenticate(&req.email, &req.password)
        .await
        .map_err(map_domain_error)?;

    let ctx = AuthContext {
        user_id: user.id,
        name: user.name.clone(),
        role: user.role,
    };
    let token = state.codec.issue(&ctx).map_err(|e| {
        tracing::error!(error = %e, "token issue failure");
        Problem::internal()
    })?;

    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

/// The caller's own user row, resolved from the bearer token
pub async fn me(
    State(service): State<Arc<Service>>,
    ctx: AuthContext,
) -> Result<Json<UserDto>, Problem> {
    let user = service
        .get_user(ctx.user_id)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(user.into()))
}

// ===== User management (admin only) =====

pub async fn list_users(
    State(service): State<Arc<Service>>,
    ctx: AuthContext,
    Query(filter): Query<UserFilterQuery>,
    Query(page): Query<PageQuery>,
) -> Result<Json<UsersListResponse>, Problem> {
    require_admin(&ctx)?;
    let (limit, offset) = page.clamp();
    let (users, total) = service
        .list_users(filter.try_into()?, limit, offset)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(UsersListResponse {
        items: users.into_iter().map(|u| u.into()).collect(),
        total,
        limit,
        offset,
    }))
}

pub async fn create_user(
    State(service): State<Arc<Service>>,
    ctx: AuthContext,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserDto>), Problem> {
    require_admin(&ctx)?;
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    let user = service
        .create_user(req.try_into()?)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn get_user(
    State(service): State<Arc<Service>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<Json<UserDto>, Problem> {
    require_admin(&ctx)?;
    let user = service.get_user(id).await.map_err(map_domain_error)?;
    Ok(Json(user.into()))
}

pub async fn update_user(
    State(service): State<Arc<Service>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserDto>, Problem> {
    require_admin(&ctx)?;
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    let user = service
        .update_user(id, req.try_into()?)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(user.into()))
}

pub async fn change_password(
    State(service): State<Arc<Service>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<StatusCode, Problem> {
    require_admin(&ctx)?;
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    service
        .set_password(id, &req.password)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_user(
    State(service): State<Arc<Service>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Problem> {
    require_admin(&ctx)?;
    service.delete_user(id).await.map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}

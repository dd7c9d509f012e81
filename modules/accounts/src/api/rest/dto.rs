//! REST DTOs with serde derives for HTTP API
//!
//! The password hash never appears in any DTO; passwords travel only in
//! create, change-password and login requests.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: Uuid,

    pub name: String,

    #[schema(example = "dana@example.com")]
    pub email: String,

    /// admin | technician | viewer
    #[schema(example = "technician")]
    pub role: String,

    /// Inactive users keep their history but cannot sign in
    pub active: bool,

    pub created_at: chrono::DateTime<chrono::Utc>,

    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Create user request
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,

    #[schema(example = "dana@example.com")]
    #[validate(length(min = 1, max = 254, message = "must be between 1 and 254 characters"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "must be between 8 and 128 characters"))]
    pub password: String,

    /// admin | technician | viewer
    #[schema(example = "viewer")]
    #[serde(default = "default_role")]
    pub role: String,

    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_role() -> String {
    "viewer".to_string()
}

fn default_active() -> bool {
    true
}

/// Update user request (full replace; the password has its own endpoint)
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 254, message = "must be between 1 and 254 characters"))]
    pub email: String,

    /// admin | technician | viewer
    pub role: String,

    pub active: bool,
}

/// Change password request
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 8, max = 128, message = "must be between 8 and 128 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[schema(example = "dana@example.com")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub email: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// Login response carrying the bearer token and the signed-in user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,

    pub user: UserDto,
}

/// Query-string filters for user lists
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserFilterQuery {
    /// Filter by role
    pub role: Option<String>,

    /// Filter by active flag
    pub active: Option<bool>,

    /// Case-insensitive substring match on name or email
    pub search: Option<String>,
}

/// Paginated user list response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsersListResponse {
    pub items: Vec<UserDto>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

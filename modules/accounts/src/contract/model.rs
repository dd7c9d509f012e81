//! Contract models - pure domain types without serialization concerns

use chrono::{DateTime, Utc};
use sitekit::Role;
use uuid::Uuid;

/// A person who can sign in to the system.
///
/// The password hash never leaves the accounts module; this type is what
/// other modules and the API layers see.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Unique among active users, compared case-insensitively
    pub email: String,
    pub role: Role,
    /// Inactive users keep their history but cannot sign in
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Input for creating a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub active: bool,
}

/// Input for updating a user; the password has its own operation
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
}

/// Filters for listing users
#[derive(Debug, Clone, Default)]
pub struct UserListFilter {
    pub role: Option<Role>,
    pub active: Option<bool>,
    /// Case-insensitive substring match on name or email
    pub search: Option<String>,
}

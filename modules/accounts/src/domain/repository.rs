//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{User, UserListFilter};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// A user paired with its stored password hash.
///
/// Only the login path sees this pairing; every other read works with the
/// bare [`User`].
#[derive(Debug, Clone)]
pub struct Credential {
    pub user: User,
    pub password_hash: String,
}

/// Repository for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user with its password hash
    async fn insert(&self, user: &User, password_hash: &str) -> Result<User>;

    /// Find a user by id, deleted rows excluded. Inactive users still resolve.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// Find a user by email, compared case-insensitively, with the hash
    async fn find_by_email(&self, email: &str) -> Result<Option<Credential>>;

    /// List users matching the filter, newest first, with total count
    async fn list(
        &self,
        filter: &UserListFilter,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<User>, u64)>;

    /// Update an existing user; the password hash is untouched
    async fn update(&self, user: &User) -> Result<User>;

    /// Replace a user's password hash
    async fn set_password(&self, id: Uuid, password_hash: &str) -> Result<()>;

    /// Soft delete a user
    async fn soft_delete(&self, id: Uuid) -> Result<()>;
}

//! Native client trait for in-process module-to-module calls

use async_trait::async_trait;
use uuid::Uuid;

use super::error::AccountsError;
use super::model::User;

/// Read-side surface other modules use to resolve user references.
///
/// Lookups ignore soft-deleted rows; inactive users still resolve, since
/// history referencing them stays meaningful after they are locked out.
#[async_trait]
pub trait AccountsApi: Send + Sync {
    async fn get_user(&self, id: Uuid) -> Result<User, AccountsError>;

    /// Whether a non-deleted user with this id exists
    async fn user_exists(&self, id: Uuid) -> Result<bool, AccountsError>;
}

//! Error types for the accounts module

use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by user and login operations
#[derive(Debug, Error)]
pub enum AccountsError {
    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: &'static str, id: Uuid },

    #[error("validation failed on '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("conflict: {reason}")]
    Conflict { reason: String },

    /// Failed sign-in. Deliberately silent about which part was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("internal error: {0}")]
    Internal(String),
}

impl AccountsError {
    pub fn not_found(resource: &'static str, id: Uuid) -> Self {
        AccountsError::NotFound { resource, id }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AccountsError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn conflict(reason: impl Into<String>) -> Self {
        AccountsError::Conflict {
            reason: reason.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AccountsError::Internal(message.into())
    }
}

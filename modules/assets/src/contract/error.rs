//! Error types for the assets module

use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by asset and category operations
#[derive(Debug, Error)]
pub enum AssetsError {
    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: &'static str, id: Uuid },

    #[error("validation failed on '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("conflict: {reason}")]
    Conflict { reason: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl AssetsError {
    pub fn not_found(resource: &'static str, id: Uuid) -> Self {
        AssetsError::NotFound { resource, id }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AssetsError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn conflict(reason: impl Into<String>) -> Self {
        AssetsError::Conflict {
            reason: reason.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AssetsError::Internal(message.into())
    }
}

//! Error contract for the facilities module

use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by facilities operations
#[derive(Debug, Error)]
pub enum FacilitiesError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: Uuid },

    #[error("validation failed on '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("conflict: {reason}")]
    Conflict { reason: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl FacilitiesError {
    pub fn not_found(resource: &'static str, id: Uuid) -> Self {
        Self::NotFound { resource, id }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

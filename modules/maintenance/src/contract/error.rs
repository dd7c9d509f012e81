//! Contract errors - transport-agnostic error types

use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the maintenance service
#[derive(Debug, Error)]
pub enum MaintenanceError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: Uuid },

    #[error("validation failed on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl MaintenanceError {
    pub fn not_found(resource: &'static str, id: Uuid) -> Self {
        Self::NotFound { resource, id }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

//! Error types for the work orders module

use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by work order operations
#[derive(Debug, Error)]
pub enum WorkOrdersError {
    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: &'static str, id: Uuid },

    #[error("validation failed on '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("conflict: {reason}")]
    Conflict { reason: String },

    #[error("attachment exceeds the {limit} byte upload limit")]
    TooLarge { limit: u64 },

    #[error("internal error: {0}")]
    Internal(String),
}

impl WorkOrdersError {
    pub fn not_found(resource: &'static str, id: Uuid) -> Self {
        WorkOrdersError::NotFound { resource, id }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        WorkOrdersError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn conflict(reason: impl Into<String>) -> Self {
        WorkOrdersError::Conflict {
            reason: reason.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        WorkOrdersError::Internal(message.into())
    }
}

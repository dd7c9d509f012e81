//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::WorkOrdersError;
use sitekit::Problem;

/// Map work orders contract errors to HTTP Problem Details
pub fn map_domain_error(error: WorkOrdersError) -> Problem {
    match error {
        WorkOrdersError::NotFound { resource, id } => Problem::not_found(resource, id),

        WorkOrdersError::Validation { field, message } => Problem::invalid_field(field, message),

        WorkOrdersError::Conflict { reason } => Problem::conflict(reason),

        WorkOrdersError::TooLarge { limit } => {
            Problem::payload_too_large(format!("the upload limit is {limit} bytes"))
        }

        WorkOrdersError::Internal(_) => Problem::internal(),
    }
}

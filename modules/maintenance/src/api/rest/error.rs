//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::MaintenanceError;
use sitekit::Problem;

/// Map maintenance contract errors to HTTP Problem Details
pub fn map_domain_error(error: MaintenanceError) -> Problem {
    match error {
        MaintenanceError::NotFound { resource, id } => Problem::not_found(resource, id),

        MaintenanceError::Validation { field, message } => Problem::invalid_field(field, message),

        MaintenanceError::Internal(_) => Problem::internal(),
    }
}

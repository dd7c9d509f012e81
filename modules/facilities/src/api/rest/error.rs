//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::FacilitiesError;
use sitekit::Problem;

/// Map facilities contract errors to HTTP Problem Details
pub fn map_domain_error(error: FacilitiesError) -> Problem {
    match error {
        FacilitiesError::NotFound { resource, id } => Problem::not_found(resource, id),

        FacilitiesError::Validation { field, message } => Problem::invalid_field(field, message),

        FacilitiesError::Conflict { reason } => Problem::conflict(reason),

        FacilitiesError::Internal(_) => Problem::internal(),
    }
}

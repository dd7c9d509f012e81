//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::AssetsError;
use sitekit::Problem;

/// Map assets contract errors to HTTP Problem Details
pub fn map_domain_error(error: AssetsError) -> Problem {
    match error {
        AssetsError::NotFound { resource, id } => Problem::not_found(resource, id),

        AssetsError::Validation { field, message } => Problem::invalid_field(field, message),

        AssetsError::Conflict { reason } => Problem::conflict(reason),

        AssetsError::Internal(_) => Problem::internal(),
    }
}

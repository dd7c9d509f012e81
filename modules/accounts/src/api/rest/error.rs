//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::AccountsError;
use sitekit::Problem;

/// Map accounts contract errors to HTTP Problem Details
pub fn map_domain_error(error: AccountsError) -> Problem {
    match error {
        AccountsError::NotFound { resource, id } => Problem::not_found(resource, id),

        AccountsError::Validation { field, message } => Problem::invalid_field(field, message),

        AccountsError::Conflict { reason } => Problem::conflict(reason),

        // One answer for every login failure
        AccountsError::InvalidCredentials => Problem::unauthorized("Invalid email or password"),

        AccountsError::Internal(_) => Problem::internal(),
    }
}

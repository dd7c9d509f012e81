//! Field validation helpers shared by the service operations

use rust_decimal::Decimal;

use crate::contract::MaintenanceError;

pub const MAX_TITLE_LEN: usize = 120;
pub const MAX_SUMMARY_LEN: usize = 240;

pub fn validate_title(value: &str) -> Result<(), MaintenanceError> {
    if value.trim().is_empty() {
        return Err(MaintenanceError::validation("title", "must not be blank"));
    }
    if value.len() > MAX_TITLE_LEN {
        return Err(MaintenanceError::validation(
            "title",
            format!("must be at most {MAX_TITLE_LEN} characters"),
        ));
    }
    Ok(())
}

pub fn validate_summary(value: &str) -> Result<(), MaintenanceError> {
    if value.trim().is_empty() {
        return Err(MaintenanceError::validation("summary", "must not be blank"));
    }
    if value.len() > MAX_SUMMARY_LEN {
        return Err(MaintenanceError::validation(
            "summary",
            format!("must be at most {MAX_SUMMARY_LEN} characters"),
        ));
    }
    Ok(())
}

pub fn validate_cost(value: Option<Decimal>) -> Result<(), MaintenanceError> {
    if let Some(cost) = value {
        if cost.is_sign_negative() {
            return Err(MaintenanceError::validation(
                "cost",
                "must not be negative",
            ));
        }
    }
    Ok(())
}

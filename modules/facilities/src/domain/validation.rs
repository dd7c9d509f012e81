//! Field validation for facilities inputs

use crate::contract::FacilitiesError;

pub const MAX_CODE_LEN: usize = 32;
pub const MAX_NAME_LEN: usize = 120;

/// Validate a building or space code.
///
/// Accepts alphanumeric characters plus '_', '.', and '-'. Must start
/// with an alphanumeric character and fit in MAX_CODE_LEN.
pub fn validate_code(field: &'static str, code: &str) -> Result<(), FacilitiesError> {
    if code.is_empty() {
        return Err(FacilitiesError::validation(field, "must not be empty"));
    }

    if code.len() > MAX_CODE_LEN {
        return Err(FacilitiesError::validation(
            field,
            format!("must be at most {MAX_CODE_LEN} characters"),
        ));
    }

    let mut chars = code.chars();
    if let Some(first) = chars.next() {
        if !first.is_ascii_alphanumeric() {
            return Err(FacilitiesError::validation(
                field,
                "must start with an alphanumeric character",
            ));
        }
    }

    let all_valid = code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-');
    if !all_valid {
        return Err(FacilitiesError::validation(
            field,
            "only alphanumeric characters, '_', '.' and '-' are allowed",
        ));
    }

    Ok(())
}

/// Validate a display name: non-blank and bounded.
pub fn validate_name(field: &'static str, name: &str) -> Result<(), FacilitiesError> {
    if name.trim().is_empty() {
        return Err(FacilitiesError::validation(field, "must not be blank"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(FacilitiesError::validation(
            field,
            format!("must be at most {MAX_NAME_LEN} characters"),
        ));
    }
    Ok(())
}

/// Capacity, when given, must be non-negative.
pub fn validate_capacity(capacity: Option<i32>) -> Result<(), FacilitiesError> {
    if let Some(n) = capacity {
        if n < 0 {
            return Err(FacilitiesError::validation(
                "capacity",
                "must be zero or greater",
            ));
        }
    }
    Ok(())
}

/// Area in square meters, when given, must be positive and finite.
pub fn validate_area(area_sqm: Option<f64>) -> Result<(), FacilitiesError> {
    if let Some(a) = area_sqm {
        if !a.is_finite() || a <= 0.0 {
            return Err(FacilitiesError::validation(
                "area_sqm",
                "must be a positive number",
            ));
        }
    }
    Ok(())
}

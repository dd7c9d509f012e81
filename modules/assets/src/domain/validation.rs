//! Field validation for asset inputs

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::contract::AssetsError;

pub const MAX_CODE_LEN: usize = 32;
pub const MAX_NAME_LEN: usize = 120;

/// Validate an asset tag.
///
/// Accepts alphanumeric characters plus '_', '.', and '-'. Must start
/// with an alphanumeric character and fit in MAX_CODE_LEN.
pub fn validate_code(field: &'static str, code: &str) -> Result<(), AssetsError> {
    if code.is_empty() {
        return Err(AssetsError::validation(field, "must not be empty"));
    }

    if code.len() > MAX_CODE_LEN {
        return Err(AssetsError::validation(
            field,
            format!("must be at most {MAX_CODE_LEN} characters"),
        ));
    }

    let mut chars = code.chars();
    if let Some(first) = chars.next() {
        if !first.is_ascii_alphanumeric() {
            return Err(AssetsError::validation(
                field,
                "must start with an alphanumeric character",
            ));
        }
    }

    let all_valid = code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-');
    if !all_valid {
        return Err(AssetsError::validation(
            field,
            "only alphanumeric characters, '_', '.' and '-' are allowed",
        ));
    }

    Ok(())
}

/// Validate a display name: non-blank and bounded.
pub fn validate_name(field: &'static str, name: &str) -> Result<(), AssetsError> {
    if name.trim().is_empty() {
        return Err(AssetsError::validation(field, "must not be blank"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(AssetsError::validation(
            field,
            format!("must be at most {MAX_NAME_LEN} characters"),
        ));
    }
    Ok(())
}

/// Purchase cost, when given, must not be negative.
pub fn validate_purchase_cost(cost: Option<Decimal>) -> Result<(), AssetsError> {
    if let Some(c) = cost {
        if c.is_sign_negative() {
            return Err(AssetsError::validation(
                "purchase_cost",
                "must be zero or greater",
            ));
        }
    }
    Ok(())
}

/// Warranty end may not precede the purchase date.
pub fn validate_warranty_window(
    purchased_at: Option<NaiveDate>,
    warranty_until: Option<NaiveDate>,
) -> Result<(), AssetsError> {
    if let (Some(purchased), Some(warranty)) = (purchased_at, warranty_until) {
        if warranty < purchased {
            return Err(AssetsError::validation(
                "warranty_until",
                "must not be earlier than the purchase date",
            ));
        }
    }
    Ok(())
}

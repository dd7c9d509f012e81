//! Field validation for account inputs

use crate::contract::AccountsError;

pub const MAX_NAME_LEN: usize = 120;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 128;

/// Validate a display name: non-blank and bounded.
pub fn validate_name(name: &str) -> Result<(), AccountsError> {
    if name.trim().is_empty() {
        return Err(AccountsError::validation("name", "must not be blank"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(AccountsError::validation(
            "name",
            format!("must be at most {MAX_NAME_LEN} characters"),
        ));
    }
    Ok(())
}

/// Validate an email address.
///
/// One '@' with non-empty sides and a dotted domain. Deliverability is the
/// mail server's problem; this guards against obvious typos only.
pub fn validate_email(email: &str) -> Result<(), AccountsError> {
    if email.trim().is_empty() {
        return Err(AccountsError::validation("email", "must not be blank"));
    }
    if email.len() > MAX_EMAIL_LEN {
        return Err(AccountsError::validation(
            "email",
            format!("must be at most {MAX_EMAIL_LEN} characters"),
        ));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(AccountsError::validation(
            "email",
            "must not contain whitespace",
        ));
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(AccountsError::validation(
            "email",
            "must be a valid email address",
        ));
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') || !domain.contains('.') {
        return Err(AccountsError::validation(
            "email",
            "must be a valid email address",
        ));
    }
    Ok(())
}

/// Passwords must fit the length window; content is the owner's business.
pub fn validate_password(password: &str) -> Result<(), AccountsError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AccountsError::validation(
            "password",
            format!("must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    if password.len() > MAX_PASSWORD_LEN {
        return Err(AccountsError::validation(
            "password",
            format!("must be at most {MAX_PASSWORD_LEN} characters"),
        ));
    }
    Ok(())
}

//! Field validation helpers shared by the service operations

use crate::contract::WorkOrdersError;

pub const MAX_TITLE_LEN: usize = 160;
pub const MAX_COMMENT_LEN: usize = 4000;
pub const MAX_FILE_NAME_LEN: usize = 255;

pub fn validate_title(value: &str) -> Result<(), WorkOrdersError> {
    if value.trim().is_empty() {
        return Err(WorkOrdersError::validation("title", "must not be blank"));
    }
    if value.len() > MAX_TITLE_LEN {
        return Err(WorkOrdersError::validation(
            "title",
            format!("must be at most {MAX_TITLE_LEN} characters"),
        ));
    }
    Ok(())
}

pub fn validate_comment_body(value: &str) -> Result<(), WorkOrdersError> {
    if value.trim().is_empty() {
        return Err(WorkOrdersError::validation("body", "must not be blank"));
    }
    if value.len() > MAX_COMMENT_LEN {
        return Err(WorkOrdersError::validation(
            "body",
            format!("must be at most {MAX_COMMENT_LEN} characters"),
        ));
    }
    Ok(())
}

/// Uploaded file names become part of a download header and a storage row,
/// so path separators and traversal sequences are refused outright.
pub fn validate_file_name(value: &str) -> Result<(), WorkOrdersError> {
    if value.trim().is_empty() {
        return Err(WorkOrdersError::validation(
            "file_name",
            "must not be blank",
        ));
    }
    if value.len() > MAX_FILE_NAME_LEN {
        return Err(WorkOrdersError::validation(
            "file_name",
            format!("must be at most {MAX_FILE_NAME_LEN} characters"),
        ));
    }
    if value.contains('/') || value.contains('\\') || value.contains("..") {
        return Err(WorkOrdersError::validation(
            "file_name",
            "must not contain path separators",
        ));
    }
    Ok(())
}

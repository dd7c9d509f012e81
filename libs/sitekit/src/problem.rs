//! HTTP error responses as RFC-9457 Problem Details

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// RFC-9457 Problem Details for HTTP API errors
///
/// Validation problems additionally carry an `errors` extension member mapping
/// field names to the messages that failed for them.
#[derive(Debug, Serialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// A URI reference that identifies the specific occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// Per-field validation messages (422 responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
            errors: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add instance URI
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// Add a single field error, switching the problem into validation shape
    pub fn with_field_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors
            .get_or_insert_with(BTreeMap::new)
            .entry(field.into())
            .or_default()
            .push(message.into());
        self
    }

    /// 422 with a per-field error map
    pub fn validation(errors: BTreeMap<String, Vec<String>>) -> Self {
        let mut problem = Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Failed")
            .with_detail("One or more fields failed validation");
        problem.errors = Some(errors);
        problem
    }

    /// 422 with a single field error
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Failed")
            .with_detail("One or more fields failed validation")
            .with_field_error(field, message)
    }

    /// 404 for a missing resource
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("{resource} Not Found"))
            .with_detail(format!("{resource} with id '{id}' was not found"))
    }

    /// 409 for a conflicting operation
    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, "Conflict").with_detail(reason)
    }

    /// 401 for missing or invalid credentials
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized").with_detail(detail)
    }

    /// 403 for insufficient privileges
    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, "Forbidden").with_detail(detail)
    }

    /// 413 for an upload exceeding the configured size cap
    pub fn payload_too_large(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large").with_detail(detail)
    }

    /// 500 with a generic body; the cause must already be logged
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            .with_detail("An unexpected error occurred")
    }

    /// Map declarative DTO validation failures into a 422 problem
    pub fn from_validation_errors(errors: &validator::ValidationErrors) -> Self {
        use validator::ValidationErrorsKind;

        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (field, kind) in errors.errors() {
            match kind {
                ValidationErrorsKind::Field(field_errors) => {
                    let messages = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("failed the '{}' rule", e.code))
                        })
                        .collect();
                    map.insert(field.to_string(), messages);
                }
                // Request DTOs are flat; nested kinds collapse to one message.
                _ => {
                    map.insert(field.to_string(), vec!["is invalid".to_string()]);
                }
            }
        }
        Self::validation(map)
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Map unexpected errors to a 500 problem after logging them
pub fn map_internal_error(error: anyhow::Error) -> Problem {
    tracing::error!("internal error: {error:?}");
    Problem::internal()
}

//! Error responses for portal pages

use accounts::AccountsError;
use assets::AssetsError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use facilities::FacilitiesError;
use maintenance::MaintenanceError;
use work_orders::WorkOrdersError;

/// Failure while building a portal page
#[derive(Debug)]
pub enum PortalError {
    NotFound,
    Internal(String),
}

impl From<FacilitiesError> for PortalError {
    fn from(error: FacilitiesError) -> Self {
        match error {
            FacilitiesError::NotFound { .. } => PortalError::NotFound,
            other => PortalError::Internal(other.to_string()),
        }
    }
}

impl From<AssetsError> for PortalError {
    fn from(error: AssetsError) -> Self {
        match error {
            AssetsError::NotFound { .. } => PortalError::NotFound,
            other => PortalError::Internal(other.to_string()),
        }
    }
}

impl From<MaintenanceError> for PortalError {
    fn from(error: MaintenanceError) -> Self {
        match error {
            MaintenanceError::NotFound { .. } => PortalError::NotFound,
            other => PortalError::Internal(other.to_string()),
        }
    }
}

impl From<WorkOrdersError> for PortalError {
    fn from(error: WorkOrdersError) -> Self {
        match error {
            WorkOrdersError::NotFound { .. } => PortalError::NotFound,
            other => PortalError::Internal(other.to_string()),
        }
    }
}

impl From<AccountsError> for PortalError {
    fn from(error: AccountsError) -> Self {
        match error {
            AccountsError::NotFound { .. } => PortalError::NotFound,
            other => PortalError::Internal(other.to_string()),
        }
    }
}

impl From<tera::Error> for PortalError {
    fn from(error: tera::Error) -> Self {
        PortalError::Internal(error.to_string())
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            PortalError::NotFound => (StatusCode::NOT_FOUND, "Page not found"),
            PortalError::Internal(detail) => {
                tracing::error!(detail = %detail, "portal page failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong")
            }
        };
        let body = format!(
            "<!doctype html><html><head><meta charset=\"utf-8\">\
             <title>{code} · Siteworks</title></head>\
             <body style=\"font-family: system-ui, sans-serif; padding: 2rem;\">\
             <h1>{message}</h1>\
             <p><a href=\"/\">Back to the dashboard</a></p>\
             </body></html>",
            code = status.as_u16(),
        );
        (status, Html(body)).into_response()
    }
}

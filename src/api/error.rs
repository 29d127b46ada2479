//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::db::DatabaseError;

/// Structured error response body for dashboard clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Role denied: {0}")]
    RoleDenied(String),
    #[error("Constraint violation: {0}")]
    Constraint(String),
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::BadRequest(detail) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                detail.clone(),
            ),
            ApiError::Validation(detail) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION",
                detail.clone(),
            ),
            ApiError::RoleDenied(detail) => (
                StatusCode::FORBIDDEN,
                "ROLE_DENIED",
                detail.clone(),
            ),
            ApiError::Constraint(detail) => (
                StatusCode::CONFLICT,
                "CONSTRAINT",
                detail.clone(),
            ),
            ApiError::StorageUnavailable(detail) => {
                // Connection failures can name hosts and login users.
                tracing::error!(detail, "database unreachable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "DB_UNAVAILABLE",
                    "Database is unavailable".to_string(),
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Validation(detail) => ApiError::Validation(detail),
            DatabaseError::PermissionDenied { .. } => ApiError::RoleDenied(err.to_string()),
            DatabaseError::ConstraintViolation(detail) => ApiError::Constraint(detail),
            DatabaseError::Connection(detail) => ApiError::StorageUnavailable(detail),
            DatabaseError::MissingTable { .. }
            | DatabaseError::InvalidEnum { .. }
            | DatabaseError::Query(_) => ApiError::Internal(err.to_string()),
        }
    }
}

//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
///
/// The payloads of `Unauthorized`, `Forbidden`, and `Internal` are
/// diagnostics for server-side logs; the response bodies for those
/// variants are fixed and never include the payload.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("{0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, err, message) = match &self {
            AppError::Unauthorized(_) => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                Some("Invalid token"),
            ),
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, m.as_str(), None),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, m.as_str(), None),
            AppError::Forbidden(_) => (
                StatusCode::FORBIDDEN,
                "Forbidden",
                Some("Admin access required"),
            ),
            AppError::Internal(cause) => {
                error!(error = %cause, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error has occurred.",
                    None,
                )
            }
        };
        let body = Json(ErrorResponse {
            error: err.to_string(),
            message: message.map(str::to_string),
        });
        (status, body).into_response()
    }
}

impl From<warden_core::users::StoreError> for AppError {
    fn from(e: warden_core::users::StoreError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl From<warden_core::metrics::MetricsError> for AppError {
    fn from(e: warden_core::metrics::MetricsError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl From<warden_core::cache::CacheError> for AppError {
    fn from(e: warden_core::cache::CacheError) -> Self {
        AppError::Internal(e.to_string())
    }
}

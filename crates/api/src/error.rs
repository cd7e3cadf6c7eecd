use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use parfum_core::error::CoreError;

use crate::response::ErrorResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{ success: false, ... }`
/// envelope. Storage details are logged, never returned to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `parfum_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx, including pool acquisition timeouts.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal failure, such as a handler panic. Logged, never echoed.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, slug }) => {
                tracing::debug!(entity = *entity, slug = %slug, "Slug lookup matched nothing");
                (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found"),
                )
            }

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "Database error".to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        (status, axum::Json(ErrorResponse::new(code, message))).into_response()
    }
}

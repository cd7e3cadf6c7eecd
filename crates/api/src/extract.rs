//! Request extractors that reject with [`AppError`] instead of plain text.

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use parfum_db::DbConn;
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::state::AppState;

/// Query-string extractor whose failures use the JSON error envelope.
///
/// A malformed parameter (e.g. `?limit=ten`) becomes a 400 `BAD_REQUEST`.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(ApiQuery(value))
    }
}

/// The `{slug}` path segment, trimmed and required to be non-blank.
#[derive(Debug, Clone)]
pub struct SlugPath(pub String);

impl<S> FromRequestParts<S> for SlugPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let slug = raw.trim();
        if slug.is_empty() {
            return Err(AppError::BadRequest("Slug parameter is required".into()));
        }
        Ok(SlugPath(slug.to_string()))
    }
}

/// One pooled connection for the lifetime of a request.
///
/// Every statement a handler issues runs on this connection. It goes back
/// to the pool when the extractor is dropped at the end of the handler, on
/// the success path and on every early `?` return alike. Acquisition
/// failures (including pool timeouts) surface as [`AppError::Database`].
pub struct DbConnection(pub DbConn);

impl FromRequestParts<AppState> for DbConnection {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let conn = state.pool.acquire().await?;
        Ok(DbConnection(conn))
    }
}

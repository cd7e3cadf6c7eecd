//! Handlers for categories.

use axum::response::IntoResponse;
use axum::Json;
use parfum_core::error::CoreError;
use parfum_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{DbConnection, SlugPath};
use crate::response::ApiResponse;

/// GET /api/categories
pub async fn list_categories(
    DbConnection(mut conn): DbConnection,
) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list_all(&mut conn).await?;

    Ok(Json(ApiResponse::ok(categories)))
}

/// GET /api/categories/{slug}
///
/// The category and all parfums filed under it, newest first.
pub async fn get_category(
    SlugPath(slug): SlugPath,
    DbConnection(mut conn): DbConnection,
) -> AppResult<impl IntoResponse> {
    let detail = CategoryRepo::find_detail_by_slug(&mut conn, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Category", slug.as_str())))?;

    tracing::debug!(%slug, parfums = detail.parfums.len(), "Fetched category detail");

    Ok(Json(ApiResponse::ok(detail)))
}

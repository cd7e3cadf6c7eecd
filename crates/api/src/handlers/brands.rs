//! Handlers for brands.

use axum::response::IntoResponse;
use axum::Json;
use parfum_core::error::CoreError;
use parfum_db::repositories::BrandRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{DbConnection, SlugPath};
use crate::response::ApiResponse;

/// GET /api/brands
pub async fn list_brands(DbConnection(mut conn): DbConnection) -> AppResult<impl IntoResponse> {
    let brands = BrandRepo::list_all(&mut conn).await?;

    Ok(Json(ApiResponse::ok(brands)))
}

/// GET /api/brands/{slug}
///
/// The brand and all of its parfums, newest first.
pub async fn get_brand(
    SlugPath(slug): SlugPath,
    DbConnection(mut conn): DbConnection,
) -> AppResult<impl IntoResponse> {
    let detail = BrandRepo::find_detail_by_slug(&mut conn, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Brand", slug.as_str())))?;

    tracing::debug!(%slug, parfums = detail.parfums.len(), "Fetched brand detail");

    Ok(Json(ApiResponse::ok(detail)))
}

//! Handlers for parfum listing and detail.

use axum::response::IntoResponse;
use axum::Json;
use parfum_core::error::CoreError;
use parfum_db::models::parfum::ParfumListQuery;
use parfum_db::repositories::ParfumRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiQuery, DbConnection, SlugPath};
use crate::response::ApiResponse;

/// GET /api/parfums
///
/// Filtered, paginated listing ordered by name. `total` counts every
/// matching parfum regardless of `limit`/`skip`.
pub async fn list_parfums(
    ApiQuery(params): ApiQuery<ParfumListQuery>,
    DbConnection(mut conn): DbConnection,
) -> AppResult<impl IntoResponse> {
    let parfums = ParfumRepo::list(&mut conn, &params).await?;
    let total = ParfumRepo::count(&mut conn, &params).await?;

    tracing::debug!(returned = parfums.len(), total, "Listed parfums");

    Ok(Json(ApiResponse::paginated(parfums, total)))
}

/// GET /api/parfums/{slug}
///
/// A single parfum with its notes and up to four similar parfums.
pub async fn get_parfum(
    SlugPath(slug): SlugPath,
    DbConnection(mut conn): DbConnection,
) -> AppResult<impl IntoResponse> {
    let detail = ParfumRepo::find_detail_by_slug(&mut conn, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Parfum", slug.as_str())))?;

    tracing::debug!(
        %slug,
        notes = detail.notes.len(),
        similar = detail.similar_parfums.len(),
        "Fetched parfum detail"
    );

    Ok(Json(ApiResponse::ok(detail)))
}

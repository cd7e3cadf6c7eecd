//! Handler for the landing-page counters.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use parfum_db::repositories::StatsRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::DbConnection;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_parfums: i64,
    pub total_brands: i64,
    /// Display label, not a count: reviews live outside this catalog.
    pub total_reviews: String,
}

/// GET /api/stats
pub async fn get_stats(
    State(state): State<AppState>,
    DbConnection(mut conn): DbConnection,
) -> AppResult<impl IntoResponse> {
    let totals = StatsRepo::totals(&mut conn).await?;

    Ok(Json(ApiResponse::ok(StatsResponse {
        total_parfums: totals.total_parfums,
        total_brands: totals.total_brands,
        total_reviews: state.config.total_reviews_label.clone(),
    })))
}

pub mod brands;
pub mod categories;
pub mod health;
pub mod parfums;
pub mod stats;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /parfums                 filtered listing (limit, skip, search, brandSlug,
///                          categorySlug, audience)
/// /parfums/{slug}          detail with notes and similar parfums
///
/// /brands                  list
/// /brands/{slug}           brand with its parfums
///
/// /categories              list
/// /categories/{slug}       category with its parfums
///
/// /stats                   catalog counters
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/parfums", parfums::router())
        .nest("/brands", brands::router())
        .nest("/categories", categories::router())
        .nest("/stats", stats::router())
}

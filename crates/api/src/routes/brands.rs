//! Route definitions for brands.

use axum::routing::get;
use axum::Router;

use crate::handlers::brands;
use crate::state::AppState;

/// Brand routes mounted at `/brands`.
///
/// ```text
/// GET /         -> list_brands
/// GET /{slug}   -> get_brand
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(brands::list_brands))
        .route("/{slug}", get(brands::get_brand))
}

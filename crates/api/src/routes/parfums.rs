//! Route definitions for parfums.

use axum::routing::get;
use axum::Router;

use crate::handlers::parfums;
use crate::state::AppState;

/// Parfum routes mounted at `/parfums`.
///
/// ```text
/// GET /         -> list_parfums
/// GET /{slug}   -> get_parfum
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(parfums::list_parfums))
        .route("/{slug}", get(parfums::get_parfum))
}

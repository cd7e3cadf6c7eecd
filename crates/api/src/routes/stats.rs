use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Stats route mounted at `/stats`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(stats::get_stats))
}

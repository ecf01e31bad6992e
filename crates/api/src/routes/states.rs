use axum::routing::get;
use axum::Router;

use crate::handlers::state;
use crate::state::AppState;

/// Routes mounted at `/states`. The state table is read-only.
///
/// ```text
/// GET    /                  -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(state::list))
}

use axum::routing::get;
use axum::Router;

use crate::handlers::presentation;
use crate::state::AppState;

/// Routes mounted at `/presentations`.
///
/// ```text
/// GET    /[?conference={id}]  -> list
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update
/// DELETE /{id}                -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(presentation::list).post(presentation::create))
        .route(
            "/{id}",
            get(presentation::get_by_id)
                .put(presentation::update)
                .delete(presentation::delete),
        )
}

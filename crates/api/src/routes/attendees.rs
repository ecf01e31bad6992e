use axum::routing::get;
use axum::Router;

use crate::handlers::attendee;
use crate::state::AppState;

/// Routes mounted at `/attendees`.
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
        .route("/", get(attendee::list).post(attendee::create))
        .route(
            "/{id}",
            get(attendee::get_by_id)
                .put(attendee::update)
                .delete(attendee::delete),
        )
}

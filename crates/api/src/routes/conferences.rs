//! Route definitions for conferences, including the attendee and
//! presentation collections scoped to one conference.

use axum::routing::get;
use axum::Router;

use crate::handlers::{attendee, conference, presentation};
use crate::state::AppState;

/// Routes mounted at `/conferences`.
///
/// ```text
/// GET    /                          -> conference::list
/// POST   /                          -> conference::create
/// GET    /{id}                      -> conference::get_by_id
/// PUT    /{id}                      -> conference::update
/// DELETE /{id}                      -> conference::delete
/// GET    /{id}/attendees            -> attendee::list_by_conference
/// POST   /{id}/attendees            -> attendee::create_for_conference
/// GET    /{id}/presentations        -> presentation::list_by_conference
/// POST   /{id}/presentations        -> presentation::create_for_conference
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(conference::list).post(conference::create))
        .route(
            "/{id}",
            get(conference::get_by_id)
                .put(conference::update)
                .delete(conference::delete),
        )
        .route(
            "/{id}/attendees",
            get(attendee::list_by_conference).post(attendee::create_for_conference),
        )
        .route(
            "/{id}/presentations",
            get(presentation::list_by_conference).post(presentation::create_for_conference),
        )
}

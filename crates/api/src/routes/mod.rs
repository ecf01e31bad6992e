pub mod attendees;
pub mod conferences;
pub mod health;
pub mod locations;
pub mod presentations;
pub mod states;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /states                                   list
///
/// /locations                                list, create
/// /locations/{id}                           get, update, delete
///
/// /conferences                              list, create
/// /conferences/{id}                         get, update, delete
/// /conferences/{id}/attendees               list, create (conference from path)
/// /conferences/{id}/presentations           list, create (conference from path)
///
/// /attendees[?conference={id}]              list, create
/// /attendees/{id}                           get, update, delete
///
/// /presentations[?conference={id}]          list, create
/// /presentations/{id}                       get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/states", states::router())
        .nest("/locations", locations::router())
        .nest("/conferences", conferences::router())
        .nest("/attendees", attendees::router())
        .nest("/presentations", presentations::router())
}

//! Handlers for the `/attendees` resource.
//!
//! Attendees are reachable both at the top level (`/attendees[/{id}]`, with
//! an optional `?conference=` filter on the listing) and nested under their
//! conference: `/conferences/{conference_id}/attendees`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use conference_core::error::CoreError;
use conference_core::types::DbId;
use conference_core::validation::{
    validate_email, validate_optional_text, validate_text, MAX_NAME_LEN,
};
use conference_db::models::attendee::{Attendee, CreateAttendee, UpdateAttendee};
use conference_db::models::conference::Conference;
use conference_db::Store;
use serde_json::Value;

use super::owning_conference;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::projections::{listing, AttendeeView, ATTENDEE_DETAIL, ATTENDEE_LIST};
use crate::query::ConferenceFilter;
use crate::resolve;
use crate::response::DeletedResponse;
use crate::state::AppState;

async fn ensure_attendee_exists(store: &dyn Store, id: DbId) -> AppResult<Attendee> {
    store.find_attendee(id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Attendee",
            id,
        })
    })
}

fn detail(attendee: &Attendee, conference: &Conference) -> AppResult<Json<Value>> {
    let view = AttendeeView {
        attendee,
        conference,
    };
    Ok(Json(ATTENDEE_DETAIL.project(&view)?))
}

fn validate_create_input(input: &CreateAttendee) -> AppResult<()> {
    validate_text("name", &input.name, MAX_NAME_LEN)?;
    validate_email("email", &input.email)?;
    if let Some(company_name) = &input.company_name {
        validate_optional_text("company_name", company_name, MAX_NAME_LEN)?;
    }
    Ok(())
}

fn validate_update_input(input: &UpdateAttendee) -> AppResult<()> {
    if let Some(name) = &input.name {
        validate_text("name", name, MAX_NAME_LEN)?;
    }
    if let Some(email) = &input.email {
        validate_email("email", email)?;
    }
    if let Some(Some(company_name)) = &input.company_name {
        validate_optional_text("company_name", company_name, MAX_NAME_LEN)?;
    }
    Ok(())
}

async fn list_for(state: &AppState, conference_id: Option<DbId>) -> AppResult<Json<Value>> {
    let attendees = state.store.list_attendees(conference_id).await?;
    Ok(Json(listing("attendees", &ATTENDEE_LIST, &attendees)?))
}

async fn create_attendee(
    state: &AppState,
    input: CreateAttendee,
) -> AppResult<(StatusCode, Json<Value>)> {
    validate_create_input(&input)?;
    let store = state.store.as_ref();

    let (new_attendee, conference) = resolve::new_attendee(store, input).await?;
    let attendee = store.create_attendee(&new_attendee).await?;

    tracing::info!(
        attendee_id = attendee.id,
        conference_id = conference.id,
        "Attendee registered",
    );

    Ok((StatusCode::CREATED, detail(&attendee, &conference)?))
}

/// GET /api/v1/attendees[?conference={id}]
pub async fn list(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<ConferenceFilter>,
) -> AppResult<Json<Value>> {
    list_for(&state, filter.conference).await
}

/// GET /api/v1/conferences/{conference_id}/attendees
///
/// An unknown conference yields an empty list.
pub async fn list_by_conference(
    State(state): State<AppState>,
    AppPath(conference_id): AppPath<DbId>,
) -> AppResult<Json<Value>> {
    list_for(&state, Some(conference_id)).await
}

/// POST /api/v1/attendees
///
/// The body must name the conference.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateAttendee>,
) -> AppResult<(StatusCode, Json<Value>)> {
    create_attendee(&state, input).await
}

/// POST /api/v1/conferences/{conference_id}/attendees
///
/// Overrides `input.conference` with the value from the URL path.
pub async fn create_for_conference(
    State(state): State<AppState>,
    AppPath(conference_id): AppPath<DbId>,
    AppJson(mut input): AppJson<CreateAttendee>,
) -> AppResult<(StatusCode, Json<Value>)> {
    input.conference = Some(conference_id);
    create_attendee(&state, input).await
}

/// GET /api/v1/attendees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Value>> {
    let store = state.store.as_ref();
    let attendee = ensure_attendee_exists(store, id).await?;
    let conference = owning_conference(store, "Attendee", id, attendee.conference_id).await?;
    detail(&attendee, &conference)
}

/// PUT /api/v1/attendees/{id}
///
/// Moving an attendee to another conference re-resolves the conference.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateAttendee>,
) -> AppResult<Json<Value>> {
    validate_update_input(&input)?;
    let store = state.store.as_ref();
    ensure_attendee_exists(store, id).await?;

    let (changes, new_conference) = resolve::attendee_changes(store, input).await?;
    let attendee = store
        .update_attendee(id, &changes)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Attendee",
            id,
        }))?;

    let conference = match new_conference {
        Some(conference) => conference,
        None => owning_conference(store, "Attendee", id, attendee.conference_id).await?,
    };

    tracing::info!(attendee_id = id, "Attendee updated");
    detail(&attendee, &conference)
}

/// DELETE /api/v1/attendees/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = state.store.delete_attendee(id).await?;
    tracing::info!(attendee_id = id, deleted, "Attendee delete");
    Ok(Json(DeletedResponse { deleted }))
}

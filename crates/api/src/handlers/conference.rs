//! Handlers for the `/conferences` resource.
//!
//! Bodies reference the location by id (`"location": 3`); the detail
//! response nests the location's list projection.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use conference_core::error::CoreError;
use conference_core::types::DbId;
use conference_core::validation::{
    validate_non_negative, validate_optional_text, validate_schedule, validate_text,
    MAX_NAME_LEN, MAX_TEXT_LEN,
};
use conference_db::models::conference::{Conference, CreateConference, UpdateConference};
use conference_db::models::location::Location;
use conference_db::Store;
use serde_json::Value;

use super::dangling;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::projections::{listing, ConferenceView, CONFERENCE_DETAIL, CONFERENCE_LIST};
use crate::resolve;
use crate::response::DeletedResponse;
use crate::state::AppState;

async fn ensure_conference_exists(store: &dyn Store, id: DbId) -> AppResult<Conference> {
    store.find_conference(id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Conference",
            id,
        })
    })
}

async fn conference_location(store: &dyn Store, conference: &Conference) -> AppResult<Location> {
    store
        .find_location(conference.location_id)
        .await?
        .ok_or_else(|| {
            dangling(
                "Conference",
                conference.id,
                "location",
                conference.location_id,
            )
        })
}

fn detail(conference: &Conference, location: &Location) -> AppResult<Json<Value>> {
    let view = ConferenceView {
        conference,
        location,
    };
    Ok(Json(CONFERENCE_DETAIL.project(&view)?))
}

fn validate_create_input(input: &CreateConference) -> AppResult<()> {
    validate_text("name", &input.name, MAX_NAME_LEN)?;
    validate_optional_text("description", &input.description, MAX_TEXT_LEN)?;
    validate_non_negative("max_presentations", input.max_presentations)?;
    validate_non_negative("max_attendees", input.max_attendees)?;
    validate_schedule(input.starts, input.ends)?;
    Ok(())
}

/// The schedule check runs against the values the row will have after the
/// update, so moving only `ends` before the stored `starts` is rejected.
fn validate_update_input(input: &UpdateConference, existing: &Conference) -> AppResult<()> {
    if let Some(name) = &input.name {
        validate_text("name", name, MAX_NAME_LEN)?;
    }
    if let Some(description) = &input.description {
        validate_optional_text("description", description, MAX_TEXT_LEN)?;
    }
    if let Some(max_presentations) = input.max_presentations {
        validate_non_negative("max_presentations", max_presentations)?;
    }
    if let Some(max_attendees) = input.max_attendees {
        validate_non_negative("max_attendees", max_attendees)?;
    }
    validate_schedule(
        input.starts.unwrap_or(existing.starts),
        input.ends.unwrap_or(existing.ends),
    )?;
    Ok(())
}

/// GET /api/v1/conferences
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let conferences = state.store.list_conferences().await?;
    Ok(Json(listing("conferences", &CONFERENCE_LIST, &conferences)?))
}

/// POST /api/v1/conferences
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateConference>,
) -> AppResult<(StatusCode, Json<Value>)> {
    validate_create_input(&input)?;
    let store = state.store.as_ref();

    let (new_conference, location) = resolve::new_conference(store, input).await?;
    let conference = store.create_conference(&new_conference).await?;

    tracing::info!(
        conference_id = conference.id,
        location_id = location.id,
        "Conference created",
    );

    Ok((StatusCode::CREATED, detail(&conference, &location)?))
}

/// GET /api/v1/conferences/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Value>> {
    let store = state.store.as_ref();
    let conference = ensure_conference_exists(store, id).await?;
    let location = conference_location(store, &conference).await?;
    detail(&conference, &location)
}

/// PUT /api/v1/conferences/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateConference>,
) -> AppResult<Json<Value>> {
    let store = state.store.as_ref();
    let existing = ensure_conference_exists(store, id).await?;
    validate_update_input(&input, &existing)?;

    let (changes, new_location) = resolve::conference_changes(store, input).await?;
    let conference = store
        .update_conference(id, &changes)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Conference",
            id,
        }))?;

    let location = match new_location {
        Some(location) => location,
        None => conference_location(store, &conference).await?,
    };

    tracing::info!(conference_id = id, "Conference updated");
    detail(&conference, &location)
}

/// DELETE /api/v1/conferences/{id}
///
/// Attendees and presentations of the conference are deleted with it.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = state.store.delete_conference(id).await?;
    tracing::info!(conference_id = id, deleted, "Conference delete");
    Ok(Json(DeletedResponse { deleted }))
}

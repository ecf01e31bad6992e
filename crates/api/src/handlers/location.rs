//! Handlers for the `/locations` resource.
//!
//! Bodies reference the state by abbreviation (`"state": "IL"`); responses
//! expose it the same way.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use conference_core::error::CoreError;
use conference_core::types::DbId;
use conference_core::validation::{validate_non_negative, validate_text, MAX_NAME_LEN};
use conference_db::models::location::{CreateLocation, Location, UpdateLocation};
use conference_db::models::state::State as UsState;
use conference_db::Store;
use serde_json::Value;

use super::dangling;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::projections::{listing, LocationView, LOCATION_DETAIL, LOCATION_LIST};
use crate::resolve;
use crate::response::DeletedResponse;
use crate::state::AppState;

async fn ensure_location_exists(store: &dyn Store, id: DbId) -> AppResult<Location> {
    store.find_location(id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        })
    })
}

async fn location_state(store: &dyn Store, location: &Location) -> AppResult<UsState> {
    store
        .find_state(location.state_id)
        .await?
        .ok_or_else(|| dangling("Location", location.id, "state", location.state_id))
}

fn detail(location: &Location, state: &UsState) -> AppResult<Json<Value>> {
    let view = LocationView { location, state };
    Ok(Json(LOCATION_DETAIL.project(&view)?))
}

fn validate_create_input(input: &CreateLocation) -> AppResult<()> {
    validate_text("name", &input.name, MAX_NAME_LEN)?;
    validate_text("city", &input.city, MAX_NAME_LEN)?;
    validate_non_negative("room_count", input.room_count)?;
    Ok(())
}

fn validate_update_input(input: &UpdateLocation) -> AppResult<()> {
    if let Some(name) = &input.name {
        validate_text("name", name, MAX_NAME_LEN)?;
    }
    if let Some(city) = &input.city {
        validate_text("city", city, MAX_NAME_LEN)?;
    }
    if let Some(room_count) = input.room_count {
        validate_non_negative("room_count", room_count)?;
    }
    Ok(())
}

/// GET /api/v1/locations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let locations = state.store.list_locations().await?;
    Ok(Json(listing("locations", &LOCATION_LIST, &locations)?))
}

/// POST /api/v1/locations
///
/// An unknown state abbreviation is rejected before anything is written.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateLocation>,
) -> AppResult<(StatusCode, Json<Value>)> {
    validate_create_input(&input)?;
    let store = state.store.as_ref();

    let (new_location, us_state) = resolve::new_location(store, input).await?;
    let location = store.create_location(&new_location).await?;

    tracing::info!(
        location_id = location.id,
        state = %us_state.abbreviation,
        "Location created",
    );

    Ok((StatusCode::CREATED, detail(&location, &us_state)?))
}

/// GET /api/v1/locations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Value>> {
    let store = state.store.as_ref();
    let location = ensure_location_exists(store, id).await?;
    let us_state = location_state(store, &location).await?;
    detail(&location, &us_state)
}

/// PUT /api/v1/locations/{id}
///
/// Partial update. The state is re-resolved only when the body names one.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateLocation>,
) -> AppResult<Json<Value>> {
    validate_update_input(&input)?;
    let store = state.store.as_ref();
    ensure_location_exists(store, id).await?;

    let (changes, new_state) = resolve::location_changes(store, input).await?;
    let location = store.update_location(id, &changes).await?.ok_or(AppError::Core(
        CoreError::NotFound {
            entity: "Location",
            id,
        },
    ))?;

    let us_state = match new_state {
        Some(us_state) => us_state,
        None => location_state(store, &location).await?,
    };

    tracing::info!(location_id = id, "Location updated");
    detail(&location, &us_state)
}

/// DELETE /api/v1/locations/{id}
///
/// Conferences held at the location are deleted with it.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = state.store.delete_location(id).await?;
    tracing::info!(location_id = id, deleted, "Location delete");
    Ok(Json(DeletedResponse { deleted }))
}

//! Handlers for the `/presentations` resource.
//!
//! Same layout as attendees: top-level routes plus
//! `/conferences/{conference_id}/presentations`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use conference_core::error::CoreError;
use conference_core::status::PresentationStatus;
use conference_core::types::DbId;
use conference_core::validation::{
    validate_email, validate_optional_text, validate_text, MAX_NAME_LEN, MAX_TEXT_LEN,
};
use conference_db::models::conference::Conference;
use conference_db::models::presentation::{
    CreatePresentation, Presentation, UpdatePresentation,
};
use conference_db::Store;
use serde_json::Value;

use super::owning_conference;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::projections::{listing, PresentationView, PRESENTATION_DETAIL, PRESENTATION_LIST};
use crate::query::ConferenceFilter;
use crate::resolve;
use crate::response::DeletedResponse;
use crate::state::AppState;

async fn ensure_presentation_exists(store: &dyn Store, id: DbId) -> AppResult<Presentation> {
    store.find_presentation(id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Presentation",
            id,
        })
    })
}

fn detail(presentation: &Presentation, conference: &Conference) -> AppResult<Json<Value>> {
    let view = PresentationView {
        presentation,
        conference,
    };
    Ok(Json(PRESENTATION_DETAIL.project(&view)?))
}

fn validate_create_input(input: &CreatePresentation) -> AppResult<()> {
    validate_text("presenter_name", &input.presenter_name, MAX_NAME_LEN)?;
    validate_email("presenter_email", &input.presenter_email)?;
    if let Some(company_name) = &input.company_name {
        validate_optional_text("company_name", company_name, MAX_NAME_LEN)?;
    }
    validate_text("title", &input.title, MAX_NAME_LEN)?;
    validate_optional_text("synopsis", &input.synopsis, MAX_TEXT_LEN)?;
    if let Some(status) = &input.status {
        status.parse::<PresentationStatus>()?;
    }
    Ok(())
}

fn validate_update_input(input: &UpdatePresentation) -> AppResult<()> {
    if let Some(presenter_name) = &input.presenter_name {
        validate_text("presenter_name", presenter_name, MAX_NAME_LEN)?;
    }
    if let Some(presenter_email) = &input.presenter_email {
        validate_email("presenter_email", presenter_email)?;
    }
    if let Some(Some(company_name)) = &input.company_name {
        validate_optional_text("company_name", company_name, MAX_NAME_LEN)?;
    }
    if let Some(title) = &input.title {
        validate_text("title", title, MAX_NAME_LEN)?;
    }
    if let Some(synopsis) = &input.synopsis {
        validate_optional_text("synopsis", synopsis, MAX_TEXT_LEN)?;
    }
    if let Some(status) = &input.status {
        status.parse::<PresentationStatus>()?;
    }
    Ok(())
}

async fn list_for(state: &AppState, conference_id: Option<DbId>) -> AppResult<Json<Value>> {
    let presentations = state.store.list_presentations(conference_id).await?;
    Ok(Json(listing(
        "presentations",
        &PRESENTATION_LIST,
        &presentations,
    )?))
}

async fn create_presentation(
    state: &AppState,
    input: CreatePresentation,
) -> AppResult<(StatusCode, Json<Value>)> {
    validate_create_input(&input)?;
    let store = state.store.as_ref();

    let (new_presentation, conference) = resolve::new_presentation(store, input).await?;
    let presentation = store.create_presentation(&new_presentation).await?;

    tracing::info!(
        presentation_id = presentation.id,
        conference_id = conference.id,
        status = %presentation.status,
        "Presentation submitted",
    );

    Ok((StatusCode::CREATED, detail(&presentation, &conference)?))
}

/// GET /api/v1/presentations[?conference={id}]
pub async fn list(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<ConferenceFilter>,
) -> AppResult<Json<Value>> {
    list_for(&state, filter.conference).await
}

/// GET /api/v1/conferences/{conference_id}/presentations
pub async fn list_by_conference(
    State(state): State<AppState>,
    AppPath(conference_id): AppPath<DbId>,
) -> AppResult<Json<Value>> {
    list_for(&state, Some(conference_id)).await
}

/// POST /api/v1/presentations
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePresentation>,
) -> AppResult<(StatusCode, Json<Value>)> {
    create_presentation(&state, input).await
}

/// POST /api/v1/conferences/{conference_id}/presentations
///
/// Overrides `input.conference` with the value from the URL path.
pub async fn create_for_conference(
    State(state): State<AppState>,
    AppPath(conference_id): AppPath<DbId>,
    AppJson(mut input): AppJson<CreatePresentation>,
) -> AppResult<(StatusCode, Json<Value>)> {
    input.conference = Some(conference_id);
    create_presentation(&state, input).await
}

/// GET /api/v1/presentations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Value>> {
    let store = state.store.as_ref();
    let presentation = ensure_presentation_exists(store, id).await?;
    let conference =
        owning_conference(store, "Presentation", id, presentation.conference_id).await?;
    detail(&presentation, &conference)
}

/// PUT /api/v1/presentations/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdatePresentation>,
) -> AppResult<Json<Value>> {
    validate_update_input(&input)?;
    let store = state.store.as_ref();
    ensure_presentation_exists(store, id).await?;

    let (changes, new_conference) = resolve::presentation_changes(store, input).await?;
    let presentation = store
        .update_presentation(id, &changes)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Presentation",
            id,
        }))?;

    let conference = match new_conference {
        Some(conference) => conference,
        None => owning_conference(store, "Presentation", id, presentation.conference_id).await?,
    };

    tracing::info!(presentation_id = id, status = %presentation.status, "Presentation updated");
    detail(&presentation, &conference)
}

/// DELETE /api/v1/presentations/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = state.store.delete_presentation(id).await?;
    tracing::info!(presentation_id = id, deleted, "Presentation delete");
    Ok(Json(DeletedResponse { deleted }))
}

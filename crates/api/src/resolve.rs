//! Reference resolution.
//!
//! Turns a request body into the payload the store inserts or applies,
//! looking up every parent the body names. Nothing here writes: either every
//! reference resolves and the caller gets a complete payload plus the parent
//! records (for the response projection), or the first unknown reference
//! fails with [`CoreError::InvalidReference`].

use conference_core::error::CoreError;
use conference_core::status::PresentationStatus;
use conference_core::types::DbId;
use conference_db::models::attendee::{
    AttendeeChanges, CreateAttendee, NewAttendee, UpdateAttendee,
};
use conference_db::models::conference::{
    Conference, ConferenceChanges, CreateConference, NewConference, UpdateConference,
};
use conference_db::models::location::{
    CreateLocation, Location, LocationChanges, NewLocation, UpdateLocation,
};
use conference_db::models::presentation::{
    CreatePresentation, NewPresentation, PresentationChanges, UpdatePresentation,
};
use conference_db::models::state::State;
use conference_db::Store;

use crate::error::AppResult;

// ---------------------------------------------------------------------------
// Parent lookups
// ---------------------------------------------------------------------------

/// Resolve a state by abbreviation. Abbreviations match case-insensitively.
pub async fn state_by_abbreviation(store: &dyn Store, abbreviation: &str) -> AppResult<State> {
    let abbreviation = abbreviation.trim().to_ascii_uppercase();
    store
        .find_state_by_abbreviation(&abbreviation)
        .await?
        .ok_or_else(|| {
            CoreError::InvalidReference {
                field: "state",
                key: "abbreviation",
            }
            .into()
        })
}

pub async fn location_by_id(store: &dyn Store, id: DbId) -> AppResult<Location> {
    store
        .find_location(id)
        .await?
        .ok_or_else(|| CoreError::invalid_id("location").into())
}

pub async fn conference_by_id(store: &dyn Store, id: DbId) -> AppResult<Conference> {
    store
        .find_conference(id)
        .await?
        .ok_or_else(|| CoreError::invalid_id("conference").into())
}

/// The conference an attendee or presentation body refers to.
fn required_conference(conference: Option<DbId>) -> AppResult<DbId> {
    conference.ok_or_else(|| CoreError::Validation("conference is required".to_string()).into())
}

fn normalize_status(status: Option<&str>) -> AppResult<Option<String>> {
    let status = status
        .map(str::parse::<PresentationStatus>)
        .transpose()?
        .map(|s| s.as_str().to_string());
    Ok(status)
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

pub async fn new_location(
    store: &dyn Store,
    input: CreateLocation,
) -> AppResult<(NewLocation, State)> {
    let state = state_by_abbreviation(store, &input.state).await?;
    let new = NewLocation {
        name: input.name,
        city: input.city,
        room_count: input.room_count,
        state_id: state.id,
    };
    Ok((new, state))
}

/// Resolve the state only if the body names one.
pub async fn location_changes(
    store: &dyn Store,
    input: UpdateLocation,
) -> AppResult<(LocationChanges, Option<State>)> {
    let state = match input.state.as_deref() {
        Some(abbreviation) => Some(state_by_abbreviation(store, abbreviation).await?),
        None => None,
    };
    let changes = LocationChanges {
        name: input.name,
        city: input.city,
        room_count: input.room_count,
        state_id: state.as_ref().map(|s| s.id),
    };
    Ok((changes, state))
}

// ---------------------------------------------------------------------------
// Conferences
// ---------------------------------------------------------------------------

pub async fn new_conference(
    store: &dyn Store,
    input: CreateConference,
) -> AppResult<(NewConference, Location)> {
    let location = location_by_id(store, input.location).await?;
    let new = NewConference {
        name: input.name,
        description: input.description,
        max_presentations: input.max_presentations,
        max_attendees: input.max_attendees,
        starts: input.starts,
        ends: input.ends,
        location_id: location.id,
    };
    Ok((new, location))
}

pub async fn conference_changes(
    store: &dyn Store,
    input: UpdateConference,
) -> AppResult<(ConferenceChanges, Option<Location>)> {
    let location = match input.location {
        Some(id) => Some(location_by_id(store, id).await?),
        None => None,
    };
    let changes = ConferenceChanges {
        name: input.name,
        description: input.description,
        max_presentations: input.max_presentations,
        max_attendees: input.max_attendees,
        starts: input.starts,
        ends: input.ends,
        location_id: location.as_ref().map(|l| l.id),
    };
    Ok((changes, location))
}

// ---------------------------------------------------------------------------
// Attendees
// ---------------------------------------------------------------------------

pub async fn new_attendee(
    store: &dyn Store,
    input: CreateAttendee,
) -> AppResult<(NewAttendee, Conference)> {
    let conference = conference_by_id(store, required_conference(input.conference)?).await?;
    let new = NewAttendee {
        name: input.name,
        email: input.email,
        company_name: input.company_name,
        conference_id: conference.id,
    };
    Ok((new, conference))
}

pub async fn attendee_changes(
    store: &dyn Store,
    input: UpdateAttendee,
) -> AppResult<(AttendeeChanges, Option<Conference>)> {
    let conference = match input.conference {
        Some(id) => Some(conference_by_id(store, id).await?),
        None => None,
    };
    let changes = AttendeeChanges {
        name: input.name,
        email: input.email,
        company_name: input.company_name,
        conference_id: conference.as_ref().map(|c| c.id),
    };
    Ok((changes, conference))
}

// ---------------------------------------------------------------------------
// Presentations
// ---------------------------------------------------------------------------

/// Also fills in the default status when the body has none.
pub async fn new_presentation(
    store: &dyn Store,
    input: CreatePresentation,
) -> AppResult<(NewPresentation, Conference)> {
    let status = normalize_status(input.status.as_deref())?
        .unwrap_or_else(|| PresentationStatus::default().as_str().to_string());
    let conference = conference_by_id(store, required_conference(input.conference)?).await?;
    let new = NewPresentation {
        presenter_name: input.presenter_name,
        presenter_email: input.presenter_email,
        company_name: input.company_name,
        title: input.title,
        synopsis: input.synopsis,
        status,
        conference_id: conference.id,
    };
    Ok((new, conference))
}

pub async fn presentation_changes(
    store: &dyn Store,
    input: UpdatePresentation,
) -> AppResult<(PresentationChanges, Option<Conference>)> {
    let status = normalize_status(input.status.as_deref())?;
    let conference = match input.conference {
        Some(id) => Some(conference_by_id(store, id).await?),
        None => None,
    };
    let changes = PresentationChanges {
        presenter_name: input.presenter_name,
        presenter_email: input.presenter_email,
        company_name: input.company_name,
        title: input.title,
        synopsis: input.synopsis,
        status,
        conference_id: conference.as_ref().map(|c| c.id),
    };
    Ok((changes, conference))
}

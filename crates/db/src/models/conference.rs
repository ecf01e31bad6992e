//! Conference entity model and DTOs.

use conference_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A conference row from the `conferences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Conference {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub max_presentations: i32,
    pub max_attendees: i32,
    pub starts: Timestamp,
    pub ends: Timestamp,
    pub location_id: DbId,
    pub created: Timestamp,
    pub updated: Timestamp,
}

/// Request body for creating a conference. `location` is the location id.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateConference {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub max_presentations: i32,
    pub max_attendees: i32,
    pub starts: Timestamp,
    pub ends: Timestamp,
    pub location: DbId,
}

/// A conference ready to insert, with its location resolved.
#[derive(Debug, Clone)]
pub struct NewConference {
    pub name: String,
    pub description: String,
    pub max_presentations: i32,
    pub max_attendees: i32,
    pub starts: Timestamp,
    pub ends: Timestamp,
    pub location_id: DbId,
}

/// Request body for updating a conference. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateConference {
    pub name: Option<String>,
    pub description: Option<String>,
    pub max_presentations: Option<i32>,
    pub max_attendees: Option<i32>,
    pub starts: Option<Timestamp>,
    pub ends: Option<Timestamp>,
    pub location: Option<DbId>,
}

/// Resolved conference update. Only `Some` fields are applied.
#[derive(Debug, Clone, Default)]
pub struct ConferenceChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub max_presentations: Option<i32>,
    pub max_attendees: Option<i32>,
    pub starts: Option<Timestamp>,
    pub ends: Option<Timestamp>,
    pub location_id: Option<DbId>,
}

//! Location entity model and DTOs.

use conference_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A location row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub room_count: i32,
    pub state_id: DbId,
    pub created: Timestamp,
    pub updated: Timestamp,
}

/// Request body for creating a location. `state` is the state abbreviation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLocation {
    pub name: String,
    pub city: String,
    pub room_count: i32,
    pub state: String,
}

/// A location ready to insert, with its state resolved.
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub name: String,
    pub city: String,
    pub room_count: i32,
    pub state_id: DbId,
}

/// Request body for updating a location. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLocation {
    pub name: Option<String>,
    pub city: Option<String>,
    pub room_count: Option<i32>,
    pub state: Option<String>,
}

/// Resolved location update. Only `Some` fields are applied.
#[derive(Debug, Clone, Default)]
pub struct LocationChanges {
    pub name: Option<String>,
    pub city: Option<String>,
    pub room_count: Option<i32>,
    pub state_id: Option<DbId>,
}

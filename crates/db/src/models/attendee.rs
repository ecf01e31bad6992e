//! Attendee entity model and DTOs.

use conference_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An attendee row from the `attendees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attendee {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub company_name: Option<String>,
    pub conference_id: DbId,
    pub created: Timestamp,
}

/// Request body for registering an attendee.
///
/// `conference` may be omitted when the conference is taken from the URL.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAttendee {
    pub name: String,
    pub email: String,
    pub company_name: Option<String>,
    pub conference: Option<DbId>,
}

/// An attendee ready to insert, with its conference resolved.
#[derive(Debug, Clone)]
pub struct NewAttendee {
    pub name: String,
    pub email: String,
    pub company_name: Option<String>,
    pub conference_id: DbId,
}

/// Request body for updating an attendee. All fields are optional;
/// `"company_name": null` clears the company.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAttendee {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub company_name: Option<Option<String>>,
    pub conference: Option<DbId>,
}

/// Resolved attendee update. Only `Some` fields are applied.
#[derive(Debug, Clone, Default)]
pub struct AttendeeChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company_name: Option<Option<String>>,
    pub conference_id: Option<DbId>,
}

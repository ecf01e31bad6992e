//! Presentation entity model and DTOs.

use conference_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A presentation row from the `presentations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Presentation {
    pub id: DbId,
    pub presenter_name: String,
    pub presenter_email: String,
    pub company_name: Option<String>,
    pub title: String,
    pub synopsis: String,
    /// One of `SUBMITTED`, `APPROVED`, `REJECTED`.
    pub status: String,
    pub conference_id: DbId,
    pub created: Timestamp,
}

/// Request body for submitting a presentation.
///
/// `conference` may be omitted when the conference is taken from the URL.
/// `status` defaults to `SUBMITTED`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePresentation {
    pub presenter_name: String,
    pub presenter_email: String,
    pub company_name: Option<String>,
    pub title: String,
    #[serde(default)]
    pub synopsis: String,
    pub status: Option<String>,
    pub conference: Option<DbId>,
}

/// A presentation ready to insert, with its conference resolved and its
/// status normalized.
#[derive(Debug, Clone)]
pub struct NewPresentation {
    pub presenter_name: String,
    pub presenter_email: String,
    pub company_name: Option<String>,
    pub title: String,
    pub synopsis: String,
    pub status: String,
    pub conference_id: DbId,
}

/// Request body for updating a presentation. All fields are optional;
/// `"company_name": null` clears the company.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePresentation {
    pub presenter_name: Option<String>,
    pub presenter_email: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub company_name: Option<Option<String>>,
    pub title: Option<String>,
    pub synopsis: Option<String>,
    pub status: Option<String>,
    pub conference: Option<DbId>,
}

/// Resolved presentation update. Only `Some` fields are applied.
#[derive(Debug, Clone, Default)]
pub struct PresentationChanges {
    pub presenter_name: Option<String>,
    pub presenter_email: Option<String>,
    pub company_name: Option<Option<String>>,
    pub title: Option<String>,
    pub synopsis: Option<String>,
    pub status: Option<String>,
    pub conference_id: Option<DbId>,
}

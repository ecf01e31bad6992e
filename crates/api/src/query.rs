//! Shared query parameter types for API handlers.

use conference_core::types::DbId;
use serde::Deserialize;

/// Optional owning-conference filter (`?conference=`) for attendee and
/// presentation listings.
#[derive(Debug, Default, Deserialize)]
pub struct ConferenceFilter {
    pub conference: Option<DbId>,
}

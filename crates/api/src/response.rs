//! Shared response types for API handlers.

use serde::Serialize;

/// Body of every DELETE endpoint: whether a row was actually removed.
///
/// Deleting an id that does not exist is `{"deleted": false}`, not an error.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}

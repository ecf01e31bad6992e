//! Request handlers, one module per resource.
//!
//! Every write follows the same order: validate the body, resolve the
//! parent references it names, then call the store. Nothing is written
//! until the first two steps pass.

pub mod attendee;
pub mod conference;
pub mod location;
pub mod presentation;
pub mod state;

use conference_core::types::DbId;
use conference_db::models::conference::Conference;
use conference_db::Store;

use crate::error::{AppError, AppResult};

/// A stored row points at a parent that no longer exists.
fn dangling(entity: &str, id: DbId, parent: &str, parent_id: DbId) -> AppError {
    AppError::InternalError(format!(
        "{entity} {id} references missing {parent} {parent_id}"
    ))
}

/// Load the conference an attendee or presentation belongs to.
async fn owning_conference(
    store: &dyn Store,
    entity: &str,
    id: DbId,
    conference_id: DbId,
) -> AppResult<Conference> {
    store
        .find_conference(conference_id)
        .await?
        .ok_or_else(|| dangling(entity, id, "conference", conference_id))
}

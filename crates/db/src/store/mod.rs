//! The persistence seam used by the HTTP layer.
//!
//! Handlers only see [`Store`]: lookups by id (or by abbreviation for
//! states), filtered listing, create, partial update and delete. Two
//! backends implement it:
//!
//! - [`PgStore`] delegates to the repositories over a PostgreSQL pool.
//! - [`MemoryStore`] keeps everything in process, for development without a
//!   database and for tests.

use async_trait::async_trait;
use conference_core::types::DbId;

use crate::models::attendee::{Attendee, AttendeeChanges, NewAttendee};
use crate::models::conference::{Conference, ConferenceChanges, NewConference};
use crate::models::location::{Location, LocationChanges, NewLocation};
use crate::models::presentation::{NewPresentation, Presentation, PresentationChanges};
use crate::models::state::State;

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Every backend reports failures as `sqlx::Error`, which the HTTP layer
/// already knows how to classify.
pub type StoreResult<T> = Result<T, sqlx::Error>;

/// Record access for every entity.
///
/// `update_*` returns `None` when the target row does not exist and
/// `delete_*` returns whether a row was removed. Lists come back in
/// insertion order (states: by name). Deleting a location removes its
/// conferences; deleting a conference removes its attendees and
/// presentations.
#[async_trait]
pub trait Store: Send + Sync {
    /// Confirm the backend is reachable.
    async fn health_check(&self) -> StoreResult<()>;

    // -- States --
    async fn list_states(&self) -> StoreResult<Vec<State>>;
    async fn find_state(&self, id: DbId) -> StoreResult<Option<State>>;
    async fn find_state_by_abbreviation(&self, abbreviation: &str) -> StoreResult<Option<State>>;

    // -- Locations --
    async fn list_locations(&self) -> StoreResult<Vec<Location>>;
    async fn find_location(&self, id: DbId) -> StoreResult<Option<Location>>;
    async fn create_location(&self, input: &NewLocation) -> StoreResult<Location>;
    async fn update_location(
        &self,
        id: DbId,
        input: &LocationChanges,
    ) -> StoreResult<Option<Location>>;
    async fn delete_location(&self, id: DbId) -> StoreResult<bool>;

    // -- Conferences --
    async fn list_conferences(&self) -> StoreResult<Vec<Conference>>;
    async fn find_conference(&self, id: DbId) -> StoreResult<Option<Conference>>;
    async fn create_conference(&self, input: &NewConference) -> StoreResult<Conference>;
    async fn update_conference(
        &self,
        id: DbId,
        input: &ConferenceChanges,
    ) -> StoreResult<Option<Conference>>;
    async fn delete_conference(&self, id: DbId) -> StoreResult<bool>;

    // -- Attendees --
    async fn list_attendees(&self, conference_id: Option<DbId>) -> StoreResult<Vec<Attendee>>;
    async fn find_attendee(&self, id: DbId) -> StoreResult<Option<Attendee>>;
    async fn create_attendee(&self, input: &NewAttendee) -> StoreResult<Attendee>;
    async fn update_attendee(
        &self,
        id: DbId,
        input: &AttendeeChanges,
    ) -> StoreResult<Option<Attendee>>;
    async fn delete_attendee(&self, id: DbId) -> StoreResult<bool>;

    // -- Presentations --
    async fn list_presentations(
        &self,
        conference_id: Option<DbId>,
    ) -> StoreResult<Vec<Presentation>>;
    async fn find_presentation(&self, id: DbId) -> StoreResult<Option<Presentation>>;
    async fn create_presentation(&self, input: &NewPresentation) -> StoreResult<Presentation>;
    async fn update_presentation(
        &self,
        id: DbId,
        input: &PresentationChanges,
    ) -> StoreResult<Option<Presentation>>;
    async fn delete_presentation(&self, id: DbId) -> StoreResult<bool>;
}

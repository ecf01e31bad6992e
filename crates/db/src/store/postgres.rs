use async_trait::async_trait;
use conference_core::types::DbId;
use sqlx::PgPool;

use crate::models::attendee::{Attendee, AttendeeChanges, NewAttendee};
use crate::models::conference::{Conference, ConferenceChanges, NewConference};
use crate::models::location::{Location, LocationChanges, NewLocation};
use crate::models::presentation::{NewPresentation, Presentation, PresentationChanges};
use crate::models::state::State;
use crate::repositories::{
    AttendeeRepo, ConferenceRepo, LocationRepo, PresentationRepo, StateRepo,
};
use crate::store::{Store, StoreResult};

/// [`Store`] backed by PostgreSQL through the repository layer.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await
    }

    async fn list_states(&self) -> StoreResult<Vec<State>> {
        StateRepo::list(&self.pool).await
    }

    async fn find_state(&self, id: DbId) -> StoreResult<Option<State>> {
        StateRepo::find_by_id(&self.pool, id).await
    }

    async fn find_state_by_abbreviation(&self, abbreviation: &str) -> StoreResult<Option<State>> {
        StateRepo::find_by_abbreviation(&self.pool, abbreviation).await
    }

    async fn list_locations(&self) -> StoreResult<Vec<Location>> {
        LocationRepo::list(&self.pool).await
    }

    async fn find_location(&self, id: DbId) -> StoreResult<Option<Location>> {
        LocationRepo::find_by_id(&self.pool, id).await
    }

    async fn create_location(&self, input: &NewLocation) -> StoreResult<Location> {
        LocationRepo::create(&self.pool, input).await
    }

    async fn update_location(
        &self,
        id: DbId,
        input: &LocationChanges,
    ) -> StoreResult<Option<Location>> {
        LocationRepo::update(&self.pool, id, input).await
    }

    async fn delete_location(&self, id: DbId) -> StoreResult<bool> {
        LocationRepo::delete(&self.pool, id).await
    }

    async fn list_conferences(&self) -> StoreResult<Vec<Conference>> {
        ConferenceRepo::list(&self.pool).await
    }

    async fn find_conference(&self, id: DbId) -> StoreResult<Option<Conference>> {
        ConferenceRepo::find_by_id(&self.pool, id).await
    }

    async fn create_conference(&self, input: &NewConference) -> StoreResult<Conference> {
        ConferenceRepo::create(&self.pool, input).await
    }

    async fn update_conference(
        &self,
        id: DbId,
        input: &ConferenceChanges,
    ) -> StoreResult<Option<Conference>> {
        ConferenceRepo::update(&self.pool, id, input).await
    }

    async fn delete_conference(&self, id: DbId) -> StoreResult<bool> {
        ConferenceRepo::delete(&self.pool, id).await
    }

    async fn list_attendees(&self, conference_id: Option<DbId>) -> StoreResult<Vec<Attendee>> {
        AttendeeRepo::list(&self.pool, conference_id).await
    }

    async fn find_attendee(&self, id: DbId) -> StoreResult<Option<Attendee>> {
        AttendeeRepo::find_by_id(&self.pool, id).await
    }

    async fn create_attendee(&self, input: &NewAttendee) -> StoreResult<Attendee> {
        AttendeeRepo::create(&self.pool, input).await
    }

    async fn update_attendee(
        &self,
        id: DbId,
        input: &AttendeeChanges,
    ) -> StoreResult<Option<Attendee>> {
        AttendeeRepo::update(&self.pool, id, input).await
    }

    async fn delete_attendee(&self, id: DbId) -> StoreResult<bool> {
        AttendeeRepo::delete(&self.pool, id).await
    }

    async fn list_presentations(
        &self,
        conference_id: Option<DbId>,
    ) -> StoreResult<Vec<Presentation>> {
        PresentationRepo::list(&self.pool, conference_id).await
    }

    async fn find_presentation(&self, id: DbId) -> StoreResult<Option<Presentation>> {
        PresentationRepo::find_by_id(&self.pool, id).await
    }

    async fn create_presentation(&self, input: &NewPresentation) -> StoreResult<Presentation> {
        PresentationRepo::create(&self.pool, input).await
    }

    async fn update_presentation(
        &self,
        id: DbId,
        input: &PresentationChanges,
    ) -> StoreResult<Option<Presentation>> {
        PresentationRepo::update(&self.pool, id, input).await
    }

    async fn delete_presentation(&self, id: DbId) -> StoreResult<bool> {
        PresentationRepo::delete(&self.pool, id).await
    }
}

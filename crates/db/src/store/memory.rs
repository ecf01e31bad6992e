use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use conference_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::attendee::{Attendee, AttendeeChanges, NewAttendee};
use crate::models::conference::{Conference, ConferenceChanges, NewConference};
use crate::models::location::{Location, LocationChanges, NewLocation};
use crate::models::presentation::{NewPresentation, Presentation, PresentationChanges};
use crate::models::state::{State, US_STATES};
use crate::store::{Store, StoreResult};

/// One table: rows keyed by id plus a never-reused id sequence.
struct Table<T> {
    next_id: DbId,
    rows: BTreeMap<DbId, T>,
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(DbId) -> T) -> T {
        self.next_id += 1;
        let row = build(self.next_id);
        self.rows.insert(self.next_id, row.clone());
        row
    }

    fn get(&self, id: DbId) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn filtered(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| keep(row)).cloned().collect()
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            rows: BTreeMap::new(),
        }
    }
}

#[derive(Default)]
struct Tables {
    states: Table<State>,
    locations: Table<Location>,
    conferences: Table<Conference>,
    attendees: Table<Attendee>,
    presentations: Table<Presentation>,
}

impl Tables {
    fn remove_conference(&mut self, id: DbId) -> bool {
        let removed = self.conferences.rows.remove(&id).is_some();
        if removed {
            self.attendees.rows.retain(|_, a| a.conference_id != id);
            self.presentations.rows.retain(|_, p| p.conference_id != id);
        }
        removed
    }
}

/// In-process [`Store`] with the same ordering and cascade rules as the
/// PostgreSQL schema.
///
/// Foreign keys are not checked here; callers resolve parents first.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// An empty store without any states.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with [`US_STATES`], matching a freshly seeded
    /// database.
    pub fn seeded() -> Self {
        let mut tables = Tables::default();
        for &(name, abbreviation) in US_STATES {
            tables.states.insert_with(|id| State {
                id,
                name: name.to_string(),
                abbreviation: abbreviation.to_string(),
            });
        }
        Self {
            tables: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    // -- States --

    async fn list_states(&self) -> StoreResult<Vec<State>> {
        let mut states = self.tables.read().await.states.filtered(|_| true);
        states.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(states)
    }

    async fn find_state(&self, id: DbId) -> StoreResult<Option<State>> {
        Ok(self.tables.read().await.states.get(id))
    }

    async fn find_state_by_abbreviation(&self, abbreviation: &str) -> StoreResult<Option<State>> {
        let tables = self.tables.read().await;
        Ok(tables
            .states
            .rows
            .values()
            .find(|s| s.abbreviation == abbreviation)
            .cloned())
    }

    // -- Locations --

    async fn list_locations(&self) -> StoreResult<Vec<Location>> {
        Ok(self.tables.read().await.locations.filtered(|_| true))
    }

    async fn find_location(&self, id: DbId) -> StoreResult<Option<Location>> {
        Ok(self.tables.read().await.locations.get(id))
    }

    async fn create_location(&self, input: &NewLocation) -> StoreResult<Location> {
        let now = Utc::now();
        let mut tables = self.tables.write().await;
        Ok(tables.locations.insert_with(|id| Location {
            id,
            name: input.name.clone(),
            city: input.city.clone(),
            room_count: input.room_count,
            state_id: input.state_id,
            created: now,
            updated: now,
        }))
    }

    async fn update_location(
        &self,
        id: DbId,
        input: &LocationChanges,
    ) -> StoreResult<Option<Location>> {
        let mut tables = self.tables.write().await;
        let Some(row) = tables.locations.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = &input.name {
            row.name = name.clone();
        }
        if let Some(city) = &input.city {
            row.city = city.clone();
        }
        if let Some(room_count) = input.room_count {
            row.room_count = room_count;
        }
        if let Some(state_id) = input.state_id {
            row.state_id = state_id;
        }
        row.updated = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete_location(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.locations.rows.remove(&id).is_none() {
            return Ok(false);
        }
        let held_here: Vec<DbId> = tables
            .conferences
            .filtered(|c| c.location_id == id)
            .into_iter()
            .map(|c| c.id)
            .collect();
        for conference_id in held_here {
            tables.remove_conference(conference_id);
        }
        Ok(true)
    }

    // -- Conferences --

    async fn list_conferences(&self) -> StoreResult<Vec<Conference>> {
        Ok(self.tables.read().await.conferences.filtered(|_| true))
    }

    async fn find_conference(&self, id: DbId) -> StoreResult<Option<Conference>> {
        Ok(self.tables.read().await.conferences.get(id))
    }

    async fn create_conference(&self, input: &NewConference) -> StoreResult<Conference> {
        let now = Utc::now();
        let mut tables = self.tables.write().await;
        Ok(tables.conferences.insert_with(|id| Conference {
            id,
            name: input.name.clone(),
            description: input.description.clone(),
            max_presentations: input.max_presentations,
            max_attendees: input.max_attendees,
            starts: input.starts,
            ends: input.ends,
            location_id: input.location_id,
            created: now,
            updated: now,
        }))
    }

    async fn update_conference(
        &self,
        id: DbId,
        input: &ConferenceChanges,
    ) -> StoreResult<Option<Conference>> {
        let mut tables = self.tables.write().await;
        let Some(row) = tables.conferences.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = &input.name {
            row.name = name.clone();
        }
        if let Some(description) = &input.description {
            row.description = description.clone();
        }
        if let Some(max_presentations) = input.max_presentations {
            row.max_presentations = max_presentations;
        }
        if let Some(max_attendees) = input.max_attendees {
            row.max_attendees = max_attendees;
        }
        if let Some(starts) = input.starts {
            row.starts = starts;
        }
        if let Some(ends) = input.ends {
            row.ends = ends;
        }
        if let Some(location_id) = input.location_id {
            row.location_id = location_id;
        }
        row.updated = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete_conference(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.write().await.remove_conference(id))
    }

    // -- Attendees --

    async fn list_attendees(&self, conference_id: Option<DbId>) -> StoreResult<Vec<Attendee>> {
        let tables = self.tables.read().await;
        Ok(tables
            .attendees
            .filtered(|a| conference_id.map_or(true, |c| a.conference_id == c)))
    }

    async fn find_attendee(&self, id: DbId) -> StoreResult<Option<Attendee>> {
        Ok(self.tables.read().await.attendees.get(id))
    }

    async fn create_attendee(&self, input: &NewAttendee) -> StoreResult<Attendee> {
        let now = Utc::now();
        let mut tables = self.tables.write().await;
        Ok(tables.attendees.insert_with(|id| Attendee {
            id,
            name: input.name.clone(),
            email: input.email.clone(),
            company_name: input.company_name.clone(),
            conference_id: input.conference_id,
            created: now,
        }))
    }

    async fn update_attendee(
        &self,
        id: DbId,
        input: &AttendeeChanges,
    ) -> StoreResult<Option<Attendee>> {
        let mut tables = self.tables.write().await;
        let Some(row) = tables.attendees.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = &input.name {
            row.name = name.clone();
        }
        if let Some(email) = &input.email {
            row.email = email.clone();
        }
        if let Some(company_name) = &input.company_name {
            row.company_name = company_name.clone();
        }
        if let Some(conference_id) = input.conference_id {
            row.conference_id = conference_id;
        }
        Ok(Some(row.clone()))
    }

    async fn delete_attendee(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.write().await.attendees.rows.remove(&id).is_some())
    }

    // -- Presentations --

    async fn list_presentations(
        &self,
        conference_id: Option<DbId>,
    ) -> StoreResult<Vec<Presentation>> {
        let tables = self.tables.read().await;
        Ok(tables
            .presentations
            .filtered(|p| conference_id.map_or(true, |c| p.conference_id == c)))
    }

    async fn find_presentation(&self, id: DbId) -> StoreResult<Option<Presentation>> {
        Ok(self.tables.read().await.presentations.get(id))
    }

    async fn create_presentation(&self, input: &NewPresentation) -> StoreResult<Presentation> {
        let now = Utc::now();
        let mut tables = self.tables.write().await;
        Ok(tables.presentations.insert_with(|id| Presentation {
            id,
            presenter_name: input.presenter_name.clone(),
            presenter_email: input.presenter_email.clone(),
            company_name: input.company_name.clone(),
            title: input.title.clone(),
            synopsis: input.synopsis.clone(),
            status: input.status.clone(),
            conference_id: input.conference_id,
            created: now,
        }))
    }

    async fn update_presentation(
        &self,
        id: DbId,
        input: &PresentationChanges,
    ) -> StoreResult<Option<Presentation>> {
        let mut tables = self.tables.write().await;
        let Some(row) = tables.presentations.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(presenter_name) = &input.presenter_name {
            row.presenter_name = presenter_name.clone();
        }
        if let Some(presenter_email) = &input.presenter_email {
            row.presenter_email = presenter_email.clone();
        }
        if let Some(company_name) = &input.company_name {
            row.company_name = company_name.clone();
        }
        if let Some(title) = &input.title {
            row.title = title.clone();
        }
        if let Some(synopsis) = &input.synopsis {
            row.synopsis = synopsis.clone();
        }
        if let Some(status) = &input.status {
            row.status = status.clone();
        }
        if let Some(conference_id) = input.conference_id {
            row.conference_id = conference_id;
        }
        Ok(Some(row.clone()))
    }

    async fn delete_presentation(&self, id: DbId) -> StoreResult<bool> {
        Ok(self
            .tables
            .write()
            .await
            .presentations
            .rows
            .remove(&id)
            .is_some())
    }
}

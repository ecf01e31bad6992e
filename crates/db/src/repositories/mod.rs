//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Lists are ordered by id,
//! i.e. in insertion order.

pub mod attendee_repo;
pub mod conference_repo;
pub mod location_repo;
pub mod presentation_repo;
pub mod state_repo;

pub use attendee_repo::AttendeeRepo;
pub use conference_repo::ConferenceRepo;
pub use location_repo::LocationRepo;
pub use presentation_repo::PresentationRepo;
pub use state_repo::StateRepo;

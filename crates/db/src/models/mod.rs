//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO as submitted by clients (parent references
//!   by id or natural key)
//! - A resolved insert struct carrying the parent's database id
//! - A `Deserialize` update DTO (all `Option` fields) and its resolved form
//!
//! Nullable columns use `Option<Option<T>>` in update DTOs: an absent key is
//! `None`, an explicit `null` is `Some(None)`.

pub mod attendee;
pub mod conference;
pub mod location;
pub mod presentation;
pub mod state;

use serde::{Deserialize, Deserializer};

/// `deserialize_with` helper for nullable update fields. Combine with
/// `#[serde(default)]` so an absent key stays `None`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

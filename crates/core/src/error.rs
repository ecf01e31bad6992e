use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A write named a parent record that does not exist.
    ///
    /// Renders as e.g. `Invalid state abbreviation` or `Invalid location id`.
    #[error("Invalid {field} {key}")]
    InvalidReference {
        field: &'static str,
        key: &'static str,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Invalid-reference error for a parent looked up by numeric id.
    pub fn invalid_id(field: &'static str) -> Self {
        CoreError::InvalidReference { field, key: "id" }
    }
}

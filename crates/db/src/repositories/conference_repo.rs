//! Repository for the `conferences` table.

use conference_core::types::DbId;
use sqlx::PgPool;

use crate::models::conference::{Conference, ConferenceChanges, NewConference};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, max_presentations, max_attendees, \
                       starts, ends, location_id, created, updated";

/// Provides CRUD operations for conferences.
pub struct ConferenceRepo;

impl ConferenceRepo {
    /// Insert a new conference, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewConference) -> Result<Conference, sqlx::Error> {
        let query = format!(
            "INSERT INTO conferences
                (name, description, max_presentations, max_attendees, starts, ends, location_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Conference>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.max_presentations)
            .bind(input.max_attendees)
            .bind(input.starts)
            .bind(input.ends)
            .bind(input.location_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Conference>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM conferences WHERE id = $1");
        sqlx::query_as::<_, Conference>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all conferences in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Conference>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM conferences ORDER BY id");
        sqlx::query_as::<_, Conference>(&query).fetch_all(pool).await
    }

    /// Update a conference. Only non-`None` fields in `input` are applied and
    /// `updated` is bumped.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ConferenceChanges,
    ) -> Result<Option<Conference>, sqlx::Error> {
        let query = format!(
            "UPDATE conferences SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                max_presentations = COALESCE($4, max_presentations),
                max_attendees = COALESCE($5, max_attendees),
                starts = COALESCE($6, starts),
                ends = COALESCE($7, ends),
                location_id = COALESCE($8, location_id),
                updated = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Conference>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.max_presentations)
            .bind(input.max_attendees)
            .bind(input.starts)
            .bind(input.ends)
            .bind(input.location_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a conference by ID. Returns `true` if a row was removed.
    ///
    /// Attendees and presentations are removed by `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM conferences WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

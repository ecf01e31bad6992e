//! Repository for the `attendees` table.

use conference_core::types::DbId;
use sqlx::PgPool;

use crate::models::attendee::{Attendee, AttendeeChanges, NewAttendee};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, company_name, conference_id, created";

/// Provides CRUD operations for attendees.
pub struct AttendeeRepo;

impl AttendeeRepo {
    /// Insert a new attendee, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewAttendee) -> Result<Attendee, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendees (name, email, company_name, conference_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attendee>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.company_name)
            .bind(input.conference_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Attendee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM attendees WHERE id = $1");
        sqlx::query_as::<_, Attendee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List attendees in insertion order, optionally restricted to one conference.
    pub async fn list(
        pool: &PgPool,
        conference_id: Option<DbId>,
    ) -> Result<Vec<Attendee>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attendees
             WHERE ($1::BIGINT IS NULL OR conference_id = $1)
             ORDER BY id"
        );
        sqlx::query_as::<_, Attendee>(&query)
            .bind(conference_id)
            .fetch_all(pool)
            .await
    }

    /// Update an attendee. Only non-`None` fields in `input` are applied;
    /// `company_name: Some(None)` sets the column to NULL.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &AttendeeChanges,
    ) -> Result<Option<Attendee>, sqlx::Error> {
        let query = format!(
            "UPDATE attendees SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                company_name = CASE WHEN $6::BOOLEAN THEN $4::TEXT ELSE company_name END,
                conference_id = COALESCE($5, conference_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attendee>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.company_name.as_ref().and_then(|c| c.as_deref()))
            .bind(input.conference_id)
            .bind(input.company_name.is_some())
            .fetch_optional(pool)
            .await
    }

    /// Delete an attendee by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM attendees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

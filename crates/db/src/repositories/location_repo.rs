//! Repository for the `locations` table.

use conference_core::types::DbId;
use sqlx::PgPool;

use crate::models::location::{Location, LocationChanges, NewLocation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, room_count, state_id, created, updated";

/// Provides CRUD operations for locations.
pub struct LocationRepo;

impl LocationRepo {
    /// Insert a new location, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewLocation) -> Result<Location, sqlx::Error> {
        let query = format!(
            "INSERT INTO locations (name, city, room_count, state_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(input.room_count)
            .bind(input.state_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE id = $1");
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all locations in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations ORDER BY id");
        sqlx::query_as::<_, Location>(&query).fetch_all(pool).await
    }

    /// Update a location. Only non-`None` fields in `input` are applied and
    /// `updated` is bumped.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &LocationChanges,
    ) -> Result<Option<Location>, sqlx::Error> {
        let query = format!(
            "UPDATE locations SET
                name = COALESCE($2, name),
                city = COALESCE($3, city),
                room_count = COALESCE($4, room_count),
                state_id = COALESCE($5, state_id),
                updated = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(input.room_count)
            .bind(input.state_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a location by ID. Returns `true` if a row was removed.
    ///
    /// Conferences held at the location are removed by `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

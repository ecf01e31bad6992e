//! Repository for the `states` lookup table.

use conference_core::types::DbId;
use sqlx::PgPool;

use crate::models::state::{State, US_STATES};

const COLUMNS: &str = "id, name, abbreviation";

/// Read access to the seeded states, plus the seeding itself.
pub struct StateRepo;

impl StateRepo {
    /// Insert any missing rows from [`US_STATES`]. Returns the number inserted.
    pub async fn seed(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for &(name, abbreviation) in US_STATES {
            let result = sqlx::query(
                "INSERT INTO states (name, abbreviation) VALUES ($1, $2)
                 ON CONFLICT ON CONSTRAINT uq_states_abbreviation DO NOTHING",
            )
            .bind(name)
            .bind(abbreviation)
            .execute(pool)
            .await?;
            inserted += result.rows_affected();
        }
        Ok(inserted)
    }

    /// List all states ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<State>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM states ORDER BY name");
        sqlx::query_as::<_, State>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<State>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM states WHERE id = $1");
        sqlx::query_as::<_, State>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a state by its abbreviation (exact match).
    pub async fn find_by_abbreviation(
        pool: &PgPool,
        abbreviation: &str,
    ) -> Result<Option<State>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM states WHERE abbreviation = $1");
        sqlx::query_as::<_, State>(&query)
            .bind(abbreviation)
            .fetch_optional(pool)
            .await
    }
}

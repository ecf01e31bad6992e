//! Repository for the `presentations` table.

use conference_core::types::DbId;
use sqlx::PgPool;

use crate::models::presentation::{NewPresentation, Presentation, PresentationChanges};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, presenter_name, presenter_email, company_name, title, synopsis, \
                       status, conference_id, created";

/// Provides CRUD operations for presentations.
pub struct PresentationRepo;

impl PresentationRepo {
    /// Insert a new presentation, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewPresentation,
    ) -> Result<Presentation, sqlx::Error> {
        let query = format!(
            "INSERT INTO presentations
                (presenter_name, presenter_email, company_name, title, synopsis, status, conference_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Presentation>(&query)
            .bind(&input.presenter_name)
            .bind(&input.presenter_email)
            .bind(&input.company_name)
            .bind(&input.title)
            .bind(&input.synopsis)
            .bind(&input.status)
            .bind(input.conference_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Presentation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM presentations WHERE id = $1");
        sqlx::query_as::<_, Presentation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List presentations in insertion order, optionally restricted to one conference.
    pub async fn list(
        pool: &PgPool,
        conference_id: Option<DbId>,
    ) -> Result<Vec<Presentation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM presentations
             WHERE ($1::BIGINT IS NULL OR conference_id = $1)
             ORDER BY id"
        );
        sqlx::query_as::<_, Presentation>(&query)
            .bind(conference_id)
            .fetch_all(pool)
            .await
    }

    /// Update a presentation. Only non-`None` fields in `input` are applied;
    /// `company_name: Some(None)` sets the column to NULL.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &PresentationChanges,
    ) -> Result<Option<Presentation>, sqlx::Error> {
        let query = format!(
            "UPDATE presentations SET
                presenter_name = COALESCE($2, presenter_name),
                presenter_email = COALESCE($3, presenter_email),
                company_name = CASE WHEN $9::BOOLEAN THEN $4::TEXT ELSE company_name END,
                title = COALESCE($5, title),
                synopsis = COALESCE($6, synopsis),
                status = COALESCE($7, status),
                conference_id = COALESCE($8, conference_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Presentation>(&query)
            .bind(id)
            .bind(&input.presenter_name)
            .bind(&input.presenter_email)
            .bind(input.company_name.as_ref().and_then(|c| c.as_deref()))
            .bind(&input.title)
            .bind(&input.synopsis)
            .bind(&input.status)
            .bind(input.conference_id)
            .bind(input.company_name.is_some())
            .fetch_optional(pool)
            .await
    }

    /// Delete a presentation by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM presentations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Persistence for the conference backend.
//!
//! [`models`] holds row structs and request DTOs, [`repositories`] the
//! PostgreSQL queries, and [`store`] the [`Store`] trait the HTTP layer
//! talks to, with a PostgreSQL and an in-memory implementation.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod store;

pub use store::{MemoryStore, PgStore, Store, StoreResult};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations under `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Insert the reference `states` rows that are not present yet.
pub async fn seed_states(pool: &DbPool) -> Result<u64, sqlx::Error> {
    let inserted = repositories::StateRepo::seed(pool).await?;
    tracing::debug!(inserted, "Seeded states");
    Ok(inserted)
}

//! Record store for the DigitalPro site.
//!
//! The [`store::RecordStore`] trait is the only surface the API service
//! sees. [`connect`] picks a backend from the connection string.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod repositories;
pub mod store;

pub use error::StoreError;
pub use store::{MemoryStore, PgStore, RecordStore, StoreResult};

pub type DbPool = sqlx::PgPool;

/// Connection strings with this prefix select the in-memory store.
pub const MEMORY_URL_PREFIX: &str = "memory://";

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to prove the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Open the record store named by `url`.
///
/// `memory://` gives a fresh [`MemoryStore`]. Anything else is treated as a
/// Postgres URL: the pool is created, health checked and migrated before
/// the store is returned.
pub async fn connect(url: &str) -> Result<Arc<dyn RecordStore>, StoreError> {
    if url.starts_with(MEMORY_URL_PREFIX) {
        tracing::info!("Using in-memory record store");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let pool = create_pool(url).await?;
    tracing::info!("Database connection pool created");

    health_check(&pool).await?;
    tracing::info!("Database health check passed");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(Arc::new(PgStore::new(pool)))
}

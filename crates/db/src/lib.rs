//! Read-only data access for the parfum catalog.
//!
//! Repositories take a `&mut PgConnection` rather than the pool: a handler
//! acquires one [`DbConn`] per request and runs every statement of that
//! request on it. The connection returns to the pool when the guard drops,
//! which covers early returns and error paths alike.

use std::time::Duration;

use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::Postgres;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// A connection checked out of [`DbPool`]; released on drop.
pub type DbConn = PoolConnection<Postgres>;

/// Create a bounded connection pool from a database URL.
///
/// Requests beyond `max_connections` wait up to `acquire_timeout` for a
/// connection to be released before failing with `PoolTimedOut`.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    tracing::debug!(max_connections, ?acquire_timeout, "Configuring connection pool");

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

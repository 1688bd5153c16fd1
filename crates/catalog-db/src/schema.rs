//! Schema bootstrap
//!
//! The schema ships inside the binary and is applied with a single
//! multi-statement query guarded by an advisory lock, so concurrent
//! processes starting against the same database do not race.

use sqlx::PgPool;
use tracing::{info, instrument};

/// Advisory lock key held while the schema script runs
const SCHEMA_LOCK_KEY: i64 = 0x7031_0001;

/// Catalog schema (tools + tool_votes)
pub const SCHEMA_SQL: &str = include_str!("../migrations/0001_create_tools.sql");

/// Create the catalog tables and indexes if they do not exist yet
#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    sqlx::raw_sql(SCHEMA_SQL).execute(&mut *tx).await?;

    tx.commit().await?;
    info!("Database schema is up to date");
    Ok(())
}

//! SQLite connection factory and startup schema initialization.
//!
//! Every request-scoped operation checks a connection out of the pool built
//! here and returns it when the statement completes; the pool is the only
//! shared resource between requests.

use anyhow::Context;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use library_kernel::Migration;

/// Build the connection pool from the configured connection string.
///
/// WAL allows concurrent readers with one writer; the busy timeout bounds
/// how long a writer waits on the lock instead of failing immediately.
pub async fn connect(connection_string: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(connection_string)
        .await
        .with_context(|| format!("failed to open database at '{}'", connection_string))?;

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .context("failed to enable foreign keys")?;

    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await
        .context("failed to enable WAL mode")?;

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&pool)
        .await
        .context("failed to set busy timeout")?;

    tracing::info!(db = %connection_string, "database pool ready");

    Ok(pool)
}

/// Apply the DDL collected from registered modules. Statements use
/// `IF NOT EXISTS` guards, so running this on every startup is a no-op once
/// the schema exists.
pub async fn apply_migrations(
    pool: &SqlitePool,
    migrations: &[(String, Migration)],
) -> anyhow::Result<()> {
    for (module, migration) in migrations {
        tracing::info!(module = %module, id = migration.id, "applying migration");

        sqlx::query(migration.up)
            .execute(pool)
            .await
            .with_context(|| format!("failed to apply migration '{}/{}'", module, migration.id))?;
    }

    Ok(())
}

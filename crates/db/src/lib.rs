//! SQLite connection pool and per-request units of work.
//!
//! The [`Db`] handle is constructed once by the application bootstrap and
//! passed down to request handlers as axum state. Each request opens a
//! [`Session`] (one transaction on one pooled connection); committing is
//! explicit, and a session dropped without a commit rolls back.

use std::str::FromStr;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

/// Shared database handle. Cheap to clone; all clones share one pool.
#[derive(Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    /// Build the connection pool for the given connection string.
    ///
    /// Foreign key enforcement is switched on for every pooled connection so
    /// that `ON DELETE CASCADE` holds.
    pub async fn connect(url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("invalid database url '{url}'"))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .context("failed to open sqlite database")?;

        tracing::info!(url, max_connections, "database pool ready");
        Ok(Self { pool })
    }

    /// Open a unit of work for one request.
    pub async fn session(&self) -> Result<Session, sqlx::Error> {
        let tx = self.pool.begin().await?;
        Ok(Session { tx })
    }

    /// Apply schema statements (idempotent `CREATE TABLE IF NOT EXISTS` DDL).
    pub async fn create_schema<'a>(
        &self,
        statements: impl IntoIterator<Item = &'a str>,
    ) -> anyhow::Result<()> {
        for statement in statements {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .context("failed to apply schema statement")?;
        }

        tracing::info!("database schema ready");
        Ok(())
    }

    /// Direct pool access, used by tests to inspect persisted state.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// One transaction scoped to one request.
///
/// Rolls back on drop unless [`Session::commit`] was called, so any fault
/// propagating out of a handler leaves storage untouched.
pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    /// The connection backing this unit of work.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }

    /// Commit the unit of work, releasing the connection back to the pool.
    pub async fn commit(self) -> Result<(), sqlx::Error> {
        self.tx.commit().await
    }
}

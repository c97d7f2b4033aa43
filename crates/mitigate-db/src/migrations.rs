//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::MitigateDb;
use crate::error::DatabaseError;

/// One document table per collection.
const MIGRATION_001: &str = include_str!("../migrations/001_collections.sql");

impl MitigateDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_collections: {e}")))?;
        Ok(())
    }
}

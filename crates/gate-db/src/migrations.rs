//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. All statements use `IF NOT EXISTS` / `OR IGNORE` for
//! idempotent re-running.

use crate::GateDb;
use crate::error::StoreError;

/// Initial schema: 5 tables, 5 indexes, seeded pricing defaults.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl GateDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| StoreError::Migration(format!("001_initial: {e}")))?;
        Ok(())
    }
}

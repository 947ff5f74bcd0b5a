//! # gate-db
//!
//! libSQL database operations for Dispatch Gate state management.
//!
//! Handles all relational state: the catalog (companies, agencies,
//! opportunities), the pricing table, and the connection ledger. Uses the
//! `libsql` crate against a single local database file.
//!
//! Appends to the connection ledger are single transactional INSERTs, so the
//! storage layer serializes concurrent `approach` calls; readers observe
//! either the pre- or post-append state, never a partial row.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

use error::StoreError;
use libsql::Builder;

/// Central database handle for all Dispatch Gate state operations.
///
/// Wraps a libSQL database and connection. Provides ID generation and the
/// raw execute/query primitives used by the repository modules.
pub struct GateDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl GateDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open; a fresh path yields a valid,
    /// empty store (the connection ledger is lazily created empty).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or migrations
    /// fail.
    pub async fn open_local(path: &str) -> Result<Self, StoreError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| StoreError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let gate_db = Self { db, conn };
        gate_db.run_migrations().await?;
        Ok(gate_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Execute a statement, returning the number of affected rows.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the statement fails.
    pub async fn execute(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<u64, StoreError> {
        Ok(self.conn.execute(sql, params).await?)
    }

    /// Run a query, returning the row cursor.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the query fails.
    pub async fn query(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<libsql::Rows, StoreError> {
        Ok(self.conn.query(sql, params).await?)
    }

    /// Generate a prefixed ID via libSQL. Returns e.g. `"con-9f2ab4c1d0e3f586"`.
    ///
    /// Uses `randomblob(8)` in SQL for 16 hex chars of randomness, so IDs are
    /// collision-free under concurrent creation (unlike the timestamp-derived
    /// identifiers this replaced). The primary key constraint backs this up.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, StoreError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(8)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

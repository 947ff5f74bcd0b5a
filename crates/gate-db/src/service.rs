//! Service layer exposing the marketplace core to callers.
//!
//! `GateService` wraps `GateDb` (raw database access). All repo methods are
//! implemented as `impl GateService` blocks in `repos/`. Every operation
//! takes the caller's [`gate_core::enums::Role`] explicitly where visibility
//! or permission depends on it — role is never ambient state.

use crate::GateDb;
use crate::error::StoreError;

/// Orchestrates catalog reads, pricing lookups, and ledger appends.
pub struct GateService {
    db: GateDb,
}

impl GateService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` — Path to the libSQL database file, or `":memory:"` for
    ///   tests.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, StoreError> {
        let db = GateDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `GateDb` (for testing).
    #[must_use]
    pub const fn from_db(db: GateDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &GateDb {
        &self.db
    }
}

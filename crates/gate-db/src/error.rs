//! Database error types for gate-db.
//!
//! Every error kind here is a distinct, recoverable condition surfaced to
//! the caller; nothing in this crate aborts the process.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An opportunity/agency/company reference did not resolve.
    #[error("not found: {entity} '{id}'")]
    NotFound { entity: &'static str, id: String },

    /// A rank label has no pricing entry.
    #[error("no pricing entry configured for rank {0}")]
    Configuration(String),

    /// Input failed validation (negative amounts, missing acting agency).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The acting role is not allowed to perform the operation.
    #[error("permission denied: {0}")]
    Permission(String),

    /// Schema migration failed.
    #[error("migration failed: {0}")]
    Migration(String),

    /// A SQL query failed.
    #[error("query failed: {0}")]
    Query(String),

    /// Expected a result row but none was returned.
    #[error("no result returned")]
    NoResult,

    /// Underlying libSQL error (persistence unavailable or write failed).
    #[error("storage error: {0}")]
    Storage(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

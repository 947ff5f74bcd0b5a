//! ID prefix constants.
//!
//! Catalog rows (companies, agencies, opportunities) carry externally
//! assigned identifiers like `C001`/`A001`/`OP001`; only connections get
//! generated IDs. Generation lives in `gate-db` (`GateDb::generate_id`),
//! which appends 16 hex chars of randomness to the prefix — wall-clock
//! identifiers can collide at sub-second concurrency, random ones cannot.

/// Prefix for generated connection IDs, e.g. `con-9f2ab4c1d0e3f586`.
pub const PREFIX_CONNECTION: &str = "con";

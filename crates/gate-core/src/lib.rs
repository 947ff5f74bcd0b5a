//! # gate-core
//!
//! Core types for Dispatch Gate, the internal staffing marketplace.
//!
//! This crate provides the foundational types shared across all Dispatch Gate
//! crates:
//! - Entity structs for the domain objects (companies, agencies,
//!   opportunities, pricing entries, connections)
//! - Role, rank, and connection-status enums
//! - ID prefix constants
//!
//! Storage-layer errors live in `gate-db` (`StoreError`), where all fallible
//! operations are implemented.

pub mod entities;
pub mod enums;
pub mod ids;

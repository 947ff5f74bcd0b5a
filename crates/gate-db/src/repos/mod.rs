//! Repository modules implementing the marketplace operations.
//!
//! Each module adds methods to `GateService` via `impl GateService` blocks.

pub mod catalog;
pub mod connection;
pub mod dashboard;
pub mod pricing;
pub mod search;
pub mod seed;

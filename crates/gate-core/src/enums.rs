//! Role, rank, and connection-status enums for Dispatch Gate.
//!
//! `ConnectionStatus` serializes as `snake_case`; `RankLabel` serializes as
//! its bare letter (`A`/`B`/`C`) to match the stored `need_level` column.
//! Status enums with state machines provide `allowed_next_states()` to
//! enforce valid transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// The caller's role, passed explicitly to every core operation.
///
/// Never inferred from ambient session state: visibility rules (company
/// redaction, incentive disclosure) and the `approach` permission check all
/// key off this parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Internal operator: sees company names and incentive amounts.
    Admin,
    /// Staffing agency: company identity is redacted until connection.
    Agency,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Agency => "agency",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "agency" => Ok(Self::Agency),
            other => Err(format!("unknown role '{other}' (expected admin or agency)")),
        }
    }
}

// ---------------------------------------------------------------------------
// RankLabel
// ---------------------------------------------------------------------------

/// Desirability rank of an opportunity, `A` highest.
///
/// Drives the fee/incentive lookup in the pricing table. The set is closed:
/// every stored `need_level` must be one of these labels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum RankLabel {
    A,
    B,
    C,
}

impl RankLabel {
    /// All ranks in desirability order. Dashboard counts iterate this so
    /// ranks with zero opportunities still report 0.
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// String representation used in SQL storage (`need_level` column).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for RankLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            other => Err(format!("unknown rank '{other}' (expected A, B, or C)")),
        }
    }
}

// ---------------------------------------------------------------------------
// ConnectionStatus
// ---------------------------------------------------------------------------

/// Status of a connection (an agency's approach toward an opportunity).
///
/// ```text
/// requested → approved → billed
///           → rejected
/// ```
///
/// Known-incomplete state machine: only `requested` is ever written in this
/// scope. The approval/rejection/billing flows (and incentive payout) are
/// named in the domain but not implemented yet; the transition table below
/// documents where they will hang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Requested,
    Approved,
    Rejected,
    Billed,
}

impl ConnectionStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Requested => &[Self::Approved, Self::Rejected],
            Self::Approved => &[Self::Billed],
            Self::Rejected | Self::Billed => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// String representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Billed => "billed",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "requested" => Ok(Self::Requested),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "billed" => Ok(Self::Billed),
            other => Err(format!("unknown connection status '{other}'")),
        }
    }
}

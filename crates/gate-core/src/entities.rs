//! Entity structs for the Dispatch Gate domain.
//!
//! These mirror the database tables one-to-one. Timestamps are
//! `DateTime<Utc>` stored as RFC 3339 TEXT.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ConnectionStatus, RankLabel};

/// Placeholder shown to Agency-role callers in place of a company name.
///
/// The redaction is server-side: the true name never crosses the trust
/// boundary, so no client-side operation can recover it.
pub const REDACTED_COMPANY: &str = "(undisclosed)";

/// A client company posting opportunities. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Company {
    pub company_id: String,
    pub company_name: String,
}

/// A staffing agency browsing and approaching opportunities. Immutable.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Agency {
    pub agency_id: String,
    pub agency_name: String,
}

/// A staffing request posted by a company, carrying a desirability rank.
///
/// Immutable in this system's scope; catalog editing is a future extension.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Opportunity {
    pub opportunity_id: String,
    pub company_id: String,
    pub region: String,
    pub industry: String,
    pub rank: RankLabel,
    pub role_title: String,
    pub headcount_needed: i64,
    pub requirements: String,
}

/// Fee and incentive amounts for one rank, in whole currency units.
///
/// Mutable by Admin only. Connections copy these amounts at creation time;
/// later pricing changes never retroactively alter recorded connections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PricingEntry {
    pub rank: RankLabel,
    pub fee_amount: i64,
    pub incentive_amount: i64,
}

/// A recorded approach by an agency toward an opportunity.
///
/// Created exactly once per approach action, never updated or deleted here.
/// `fee_amount` and `incentive_amount` are the pricing-table values as of
/// creation time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Connection {
    pub connection_id: String,
    pub created_at: DateTime<Utc>,
    pub agency_id: String,
    pub opportunity_id: String,
    pub status: ConnectionStatus,
    pub fee_amount: i64,
    pub incentive_amount: i64,
    pub notes: String,
}

/// Role-aware rendering of a [`Connection`].
///
/// The incentive amount is withheld from Agency-facing views; `None` here
/// means the caller is not allowed to see it, not that it is absent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConnectionView {
    pub connection_id: String,
    pub created_at: DateTime<Utc>,
    pub agency_id: String,
    pub opportunity_id: String,
    pub status: ConnectionStatus,
    pub fee_amount: i64,
    pub incentive_amount: Option<i64>,
    pub notes: String,
}

impl ConnectionView {
    /// Render a connection for the given disclosure level.
    #[must_use]
    pub fn from_connection(connection: Connection, disclose_incentive: bool) -> Self {
        Self {
            connection_id: connection.connection_id,
            created_at: connection.created_at,
            agency_id: connection.agency_id,
            opportunity_id: connection.opportunity_id,
            status: connection.status,
            fee_amount: connection.fee_amount,
            incentive_amount: disclose_incentive.then_some(connection.incentive_amount),
            notes: connection.notes,
        }
    }
}

/// One row of a catalog search result: an opportunity joined to its company
/// and current pricing, with role-based redaction already applied.
///
/// For Agency callers `company_name` is [`REDACTED_COMPANY`] and
/// `incentive_amount` is `None`. `fee_amount` is `None` only when the rank
/// has no pricing entry (a configuration gap, logged per-row).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OpportunityView {
    pub opportunity_id: String,
    pub company_name: String,
    pub region: String,
    pub industry: String,
    pub rank: RankLabel,
    pub role_title: String,
    pub headcount_needed: i64,
    pub requirements: String,
    pub fee_amount: Option<i64>,
    pub incentive_amount: Option<i64>,
}

/// Dashboard aggregation: opportunity counts per rank plus the total number
/// of recorded connections. Pure read over the two stores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardCounts {
    pub rank_a: i64,
    pub rank_b: i64,
    pub rank_c: i64,
    pub total_connections: i64,
}

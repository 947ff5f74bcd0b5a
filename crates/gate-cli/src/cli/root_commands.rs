use clap::{Args, Subcommand};

use crate::cli::global::{RankArg, RoleArg, StatusArg};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Initialize the database and default configuration.
    Init,
    /// Load the sample dataset (idempotent).
    Seed,
    /// Search the opportunity catalog.
    Search(SearchArgs),
    /// Record an approach toward an opportunity.
    Approach(ApproachArgs),
    /// List recorded connections.
    Connections(ConnectionsArgs),
    /// Pricing table.
    Pricing {
        #[command(subcommand)]
        action: PricingCommands,
    },
    /// Opportunity counts per rank and total connections.
    Dashboard,
    /// List companies.
    Companies,
    /// List agencies.
    Agencies,
}

/// Arguments for `dgt search`.
#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Exact-match region filter.
    #[arg(long)]
    pub region: Option<String>,
    /// Exact-match industry filter.
    #[arg(long)]
    pub industry: Option<String>,
    /// Exact-match rank filter.
    #[arg(long, value_enum)]
    pub rank: Option<RankArg>,
    /// Minimum headcount (inclusive).
    #[arg(long, default_value_t = 0)]
    pub min_headcount: i64,
    /// Case-insensitive keyword over role title and requirements.
    #[arg(long)]
    pub keyword: Option<String>,
    /// Acting role; company names are redacted for agency.
    #[arg(long, value_enum, default_value_t = RoleArg::Agency)]
    pub role: RoleArg,
}

/// Arguments for `dgt approach`.
#[derive(Clone, Debug, Args)]
pub struct ApproachArgs {
    /// Opportunity to approach.
    pub opportunity_id: String,
    /// Acting agency ID.
    #[arg(long)]
    pub agency: String,
}

/// Arguments for `dgt connections`.
#[derive(Clone, Debug, Args)]
pub struct ConnectionsArgs {
    /// Only connections from this agency.
    #[arg(long)]
    pub agency: Option<String>,
    /// Only connections toward this opportunity.
    #[arg(long)]
    pub opportunity: Option<String>,
    /// Only connections in this status.
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
    /// Acting role; incentive amounts are withheld for agency.
    #[arg(long, value_enum, default_value_t = RoleArg::Admin)]
    pub role: RoleArg,
    /// Maximum rows returned, 0 for unlimited. Defaults to the configured
    /// `general.default_limit`.
    #[arg(long)]
    pub limit: Option<u32>,
}

/// Pricing subcommands.
#[derive(Clone, Debug, Subcommand)]
pub enum PricingCommands {
    /// Show all pricing entries.
    List,
    /// Show one rank's entry.
    Get {
        #[arg(value_enum)]
        rank: RankArg,
    },
    /// Update a rank's fee and incentive (admin only).
    Set {
        #[arg(value_enum)]
        rank: RankArg,
        /// Connection fee in whole currency units.
        #[arg(long)]
        fee: i64,
        /// Company incentive in whole currency units.
        #[arg(long)]
        incentive: i64,
        /// Acting role.
        #[arg(long, value_enum, default_value_t = RoleArg::Admin)]
        role: RoleArg,
    },
}

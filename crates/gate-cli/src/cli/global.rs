use clap::ValueEnum;

use gate_core::enums::{ConnectionStatus, RankLabel, Role};

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Acting role, passed through to every core operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum RoleArg {
    Admin,
    Agency,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Admin => Self::Admin,
            RoleArg::Agency => Self::Agency,
        }
    }
}

/// Rank filter/selector on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum RankArg {
    A,
    B,
    C,
}

impl From<RankArg> for RankLabel {
    fn from(arg: RankArg) -> Self {
        match arg {
            RankArg::A => Self::A,
            RankArg::B => Self::B,
            RankArg::C => Self::C,
        }
    }
}

/// Connection status filter on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum StatusArg {
    Requested,
    Approved,
    Rejected,
    Billed,
}

impl From<StatusArg> for ConnectionStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Requested => Self::Requested,
            StatusArg::Approved => Self::Approved,
            StatusArg::Rejected => Self::Rejected,
            StatusArg::Billed => Self::Billed,
        }
    }
}

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{OutputFormat, RankArg, RoleArg, StatusArg};
pub use root_commands::Commands;

/// Top-level CLI parser for the `dgt` binary.
#[derive(Debug, Parser)]
#[command(name = "dgt", version, about = "Dispatch Gate - internal staffing marketplace")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database file path (overrides configuration)
    #[arg(long, global = true)]
    pub db: Option<String>,
}

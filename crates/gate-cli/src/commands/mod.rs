//! Command handler modules, one per `dgt` subcommand.

pub mod approach;
pub mod catalog;
pub mod connections;
pub mod dashboard;
pub mod init;
pub mod pricing;
pub mod search;
pub mod seed;

use gate_db::service::GateService;

use crate::cli::{Commands, OutputFormat};

/// Dispatch a parsed command to the corresponding handler module.
///
/// # Errors
///
/// Propagates the handler's error.
pub async fn dispatch(
    command: Commands,
    svc: &GateService,
    format: OutputFormat,
    default_limit: u32,
) -> anyhow::Result<()> {
    match command {
        Commands::Seed => seed::handle(svc, format).await,
        Commands::Search(args) => search::handle(&args, svc, format).await,
        Commands::Approach(args) => approach::handle(&args, svc, format).await,
        Commands::Connections(args) => {
            connections::handle(&args, svc, format, default_limit).await
        }
        Commands::Pricing { action } => pricing::handle(&action, svc, format).await,
        Commands::Dashboard => dashboard::handle(svc, format).await,
        Commands::Companies => catalog::handle_companies(svc, format).await,
        Commands::Agencies => catalog::handle_agencies(svc, format).await,
        Commands::Init => unreachable!("init is pre-dispatched in main"),
    }
}

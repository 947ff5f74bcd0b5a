use std::path::Path;

use clap::Parser;

mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("dgt error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = gate_config::GateConfig::load_with_dotenv()?;
    let db_path = cli
        .db
        .clone()
        .unwrap_or_else(|| config.storage.db_path.clone());

    if matches!(cli.command, cli::Commands::Init) {
        return commands::init::handle(&db_path, cli.format).await;
    }

    // Opening the database file lazily creates it; only the parent
    // directory needs to exist up front.
    if let Some(parent) = Path::new(&db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let service = gate_db::service::GateService::new_local(&db_path).await?;
    commands::dispatch(
        cli.command,
        &service,
        cli.format,
        config.general.default_limit,
    )
    .await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("DISPATCH_GATE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

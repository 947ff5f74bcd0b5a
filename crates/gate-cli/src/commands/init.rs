//! `dgt init` — create the database and a default project config.

use std::path::Path;

use serde::Serialize;

use gate_db::service::GateService;

use crate::cli::OutputFormat;
use crate::output;

const CONFIG_PATH: &str = ".dispatch-gate/config.toml";

const DEFAULT_CONFIG: &str = "\
[storage]
db_path = \".dispatch-gate/gate.db\"

[general]
default_limit = 20
";

#[derive(Serialize)]
struct InitSummary {
    db_path: String,
    config_path: String,
    config_created: bool,
}

/// Create the project directory, open (and thereby migrate) the database,
/// and write a default config file if none exists.
///
/// # Errors
///
/// Returns an error if directory creation, the database open, or the config
/// write fails.
pub async fn handle(db_path: &str, format: OutputFormat) -> anyhow::Result<()> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // Opening runs migrations and seeds the pricing defaults.
    let _svc = GateService::new_local(db_path).await?;

    let config_path = Path::new(CONFIG_PATH);
    let config_created = if config_path.exists() {
        false
    } else {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, DEFAULT_CONFIG)?;
        true
    };

    output::output(
        &InitSummary {
            db_path: db_path.to_string(),
            config_path: CONFIG_PATH.to_string(),
            config_created,
        },
        format,
    )
}

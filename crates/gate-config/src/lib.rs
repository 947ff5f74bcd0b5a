//! # gate-config
//!
//! Layered configuration loading for Dispatch Gate using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DISPATCH_GATE_*` prefix, `__` as separator)
//! 2. Project-level `.dispatch-gate/config.toml`
//! 3. User-level `~/.config/dispatch-gate/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DISPATCH_GATE_STORAGE__DB_PATH` -> `storage.db_path`,
//! `DISPATCH_GATE_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use gate_config::GateConfig;
//!
//! let config = GateConfig::load_with_dotenv().expect("config");
//! println!("database at {}", config.storage.db_path);
//! ```

mod error;
mod general;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GateConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl GateConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` — use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`DISPATCH_GATE_*` prefix)
    /// 2. `.dispatch-gate/config.toml` (project-local)
    /// 3. `~/.config/dispatch-gate/config.toml` (user-global)
    /// 4. Default values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any layer fails to parse or merge.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any layer fails to parse or merge.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".dispatch-gate/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("DISPATCH_GATE_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dispatch-gate").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or the current dir
    /// looking for a `.env` file. Silently does nothing if none is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = GateConfig::default();
        assert_eq!(config.storage.db_path, ".dispatch-gate/gate.db");
        assert_eq!(config.general.default_limit, 20);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: GateConfig = GateConfig::figment().extract()?;
            assert_eq!(config.storage.db_path, ".dispatch-gate/gate.db");
            assert_eq!(config.general.default_limit, 20);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_project_toml() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".dispatch-gate")?;
            jail.create_file(
                ".dispatch-gate/config.toml",
                r#"
                [storage]
                db_path = "from-toml.db"
                "#,
            )?;
            jail.set_env("DISPATCH_GATE_STORAGE__DB_PATH", "from-env.db");

            let config: GateConfig = GateConfig::figment().extract()?;
            assert_eq!(config.storage.db_path, "from-env.db");
            Ok(())
        });
    }

    #[test]
    fn project_toml_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".dispatch-gate")?;
            jail.create_file(
                ".dispatch-gate/config.toml",
                r#"
                [general]
                default_limit = 50
                "#,
            )?;

            let config: GateConfig = GateConfig::figment().extract()?;
            assert_eq!(config.general.default_limit, 50);
            assert_eq!(config.storage.db_path, ".dispatch-gate/gate.db");
            Ok(())
        });
    }
}

//! Storage configuration: where the embedded database lives.

use serde::{Deserialize, Serialize};

/// Default database path, relative to the project root.
fn default_db_path() -> String {
    String::from(".dispatch-gate/gate.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path to the libSQL database file. `:memory:` is accepted for tests.
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

//! Credential store configuration.

use serde::{Deserialize, Serialize};

/// Where the persisted credential record lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store provider: `"file"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Path of the JSON file used by the `file` provider.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            path: default_path(),
        }
    }
}

fn default_provider() -> String {
    "file".to_string()
}

fn default_path() -> String {
    "data/credentials.json".to_string()
}

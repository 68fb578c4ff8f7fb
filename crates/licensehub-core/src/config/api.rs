//! Backend API configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for the HTTP client talking to the licensing backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Default per-call timeout in milliseconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
    /// Timeout for license activation uploads in milliseconds.
    #[serde(default = "default_upload_timeout")]
    pub upload_timeout_ms: u64,
    /// Timeout for system backup calls in milliseconds.
    #[serde(default = "default_backup_timeout")]
    pub backup_timeout_ms: u64,
    /// `User-Agent` header sent with every call.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ApiConfig {
    /// Default request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Upload timeout as a [`Duration`].
    pub fn upload_timeout(&self) -> Duration {
        Duration::from_millis(self.upload_timeout_ms)
    }

    /// Backup timeout as a [`Duration`].
    pub fn backup_timeout(&self) -> Duration {
        Duration::from_millis(self.backup_timeout_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout(),
            upload_timeout_ms: default_upload_timeout(),
            backup_timeout_ms: default_backup_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_request_timeout() -> u64 {
    30_000
}

fn default_upload_timeout() -> u64 {
    60_000
}

fn default_backup_timeout() -> u64 {
    60_000
}

fn default_user_agent() -> String {
    concat!("licensehub-console/", env!("CARGO_PKG_VERSION")).to_string()
}

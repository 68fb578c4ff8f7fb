//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use tracing::info;

use licensehub_core::config::StorageConfig;
use licensehub_core::error::AppError;
use licensehub_core::result::AppResult;
use licensehub_core::traits::CredentialStore;

/// Store manager that wraps the configured credential store provider.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner store provider.
    inner: Arc<dyn CredentialStore>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub fn new(config: &StorageConfig) -> AppResult<Self> {
        let inner: Arc<dyn CredentialStore> = match config.provider.as_str() {
            #[cfg(feature = "file")]
            "file" => {
                info!(path = %config.path, "Initializing file credential store");
                Arc::new(crate::file::FileCredentialStore::open(&config.path)?)
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory credential store");
                Arc::new(crate::memory::MemoryCredentialStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown credential store provider: '{other}'. Supported: file, memory"
                )));
            }
        };

        Ok(Self { inner })
    }
}

impl CredentialStore for StoreManager {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.inner.remove(key)
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> AppResult<()> {
        self.inner.set_many(entries)
    }

    fn remove_many(&self, keys: &[&str]) -> AppResult<()> {
        self.inner.remove_many(keys)
    }
}

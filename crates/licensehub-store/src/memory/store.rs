//! In-memory credential store using the dashmap crate.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use licensehub_core::result::AppResult;
use licensehub_core::traits::CredentialStore;

/// In-memory credential store.
///
/// Nothing survives the process; used for ephemeral consoles and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    /// Stored entries.
    entries: Arc<DashMap<String, String>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        if self.entries.remove(key).is_some() {
            debug!(key, "Removed credential entry");
        }
        Ok(())
    }
}

//! Credential store trait for pluggable persistence backends.

use crate::result::AppResult;

/// Durable string key-value storage for the persisted credential record.
///
/// The store is a passive device: it holds whatever the session writes and
/// has no notion of tokens or roles. Operations are synchronous so that a
/// session write is observable as soon as it returns.
pub trait CredentialStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a single value.
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a single key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> AppResult<()>;

    /// Write several entries as one group.
    ///
    /// Backends that can commit a batch in one step should override this.
    fn set_many(&self, entries: &[(&str, &str)]) -> AppResult<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Remove several keys as one group.
    fn remove_many(&self, keys: &[&str]) -> AppResult<()> {
        for key in keys {
            self.remove(key)?;
        }
        Ok(())
    }
}

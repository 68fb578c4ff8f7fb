//! Credential store persisted as a single JSON document on disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, warn};

use licensehub_core::error::{AppError, ErrorKind};
use licensehub_core::result::AppResult;
use licensehub_core::traits::CredentialStore;

/// File-backed credential store.
///
/// The whole record is loaded once on open and rewritten through a
/// temporary file plus rename on every change, so a batch written with
/// [`CredentialStore::set_many`] lands on disk in one step.
#[derive(Debug)]
pub struct FileCredentialStore {
    /// Location of the JSON document.
    path: PathBuf,
    /// In-memory copy of the document.
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileCredentialStore {
    /// Open the store at `path`, loading any existing document.
    ///
    /// A missing file yields an empty store. An unreadable document is
    /// logged and discarded so a damaged file cannot lock the console out.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Discarding unreadable credential file");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read credential file '{}'", path.display()),
                    e,
                ));
            }
        };

        debug!(path = %path.display(), entries = entries.len(), "Opened credential file");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn apply<F>(&self, change: F) -> AppResult<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let mut entries = self.entries.lock();
        let mut next = entries.clone();
        change(&mut next);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        if entries.is_empty() {
            return match fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            };
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.apply(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        if !self.entries.lock().contains_key(key) {
            return Ok(());
        }
        self.apply(|entries| {
            entries.remove(key);
        })
    }

    fn set_many(&self, batch: &[(&str, &str)]) -> AppResult<()> {
        self.apply(|entries| {
            for (key, value) in batch {
                entries.insert((*key).to_string(), (*value).to_string());
            }
        })
    }

    fn remove_many(&self, keys: &[&str]) -> AppResult<()> {
        self.apply(|entries| {
            for key in keys {
                entries.remove(*key);
            }
        })
    }
}

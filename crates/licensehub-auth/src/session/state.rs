//! The authoritative session of the running console.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use licensehub_core::result::AppResult;
use licensehub_core::traits::CredentialStore;
use licensehub_core::types::Role;
use licensehub_store::keys;

/// Snapshot of the current principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Bearer token. Empty means no session.
    pub token: String,
    /// Role of the principal.
    pub role: Role,
    /// Customer or admin record as returned by the backend.
    pub user_info: Value,
}

impl SessionRecord {
    /// Whether the record describes a logged-in principal.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self {
            token: String::new(),
            role: Role::None,
            user_info: Value::Object(Default::default()),
        }
    }
}

/// Session state shared by the request pipeline, the route guard and the
/// auth actions.
///
/// Only [`set_auth`](Self::set_auth) and [`clear_auth`](Self::clear_auth)
/// write, and both update memory and the credential store under one lock.
#[derive(Debug)]
pub struct SessionState {
    /// Persisted mirror of the record.
    store: Arc<dyn CredentialStore>,
    /// In-memory record.
    record: RwLock<SessionRecord>,
    /// Incremented on every `set_auth`; identifies a login.
    epoch: AtomicU64,
}

impl SessionState {
    /// Create a logged-out session without reading the store.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            store,
            record: RwLock::new(SessionRecord::default()),
            epoch: AtomicU64::new(0),
        }
    }

    /// Seed the session from the credential store.
    ///
    /// A persisted record that breaks the token/role pairing (token without
    /// a principal role, or a role without token) is cleared.
    pub fn restore(store: Arc<dyn CredentialStore>) -> AppResult<Self> {
        let token = store.get(keys::TOKEN)?.unwrap_or_default();
        let role = Role::from_tag(&store.get(keys::ROLE)?.unwrap_or_default());
        let user_info = match store.get(keys::USER_INFO)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "Persisted user info is not valid JSON, using empty record");
                Value::Object(Default::default())
            }),
            None => Value::Object(Default::default()),
        };

        let session = Self::new(store);

        if token.is_empty() != !role.is_principal() {
            warn!(%role, has_token = !token.is_empty(), "Inconsistent persisted session, clearing");
            session.clear_auth()?;
            return Ok(session);
        }

        if !token.is_empty() {
            info!(%role, "Restored persisted session");
            *session.record.write() = SessionRecord {
                token,
                role,
                user_info,
            };
            session.epoch.store(1, Ordering::SeqCst);
        }

        Ok(session)
    }

    /// Overwrite the session and its persisted mirror.
    ///
    /// No validation is performed: callers pass a backend-issued token and
    /// `Role::Client` or `Role::Admin`. The in-memory record is updated even
    /// when persisting fails; the store error is returned.
    pub fn set_auth(&self, token: impl Into<String>, role: Role, user_info: Value) -> AppResult<()> {
        let mut record = self.record.write();
        *record = SessionRecord {
            token: token.into(),
            role,
            user_info,
        };
        self.epoch.fetch_add(1, Ordering::SeqCst);

        let info_json = serde_json::to_string(&record.user_info)?;
        self.store.set_many(&[
            (keys::TOKEN, record.token.as_str()),
            (keys::ROLE, role.as_tag()),
            (keys::USER_INFO, info_json.as_str()),
        ])?;

        debug!(%role, "Session set");
        Ok(())
    }

    /// Reset the session to logged-out and erase the persisted mirror.
    ///
    /// Idempotent.
    pub fn clear_auth(&self) -> AppResult<()> {
        let mut record = self.record.write();
        *record = SessionRecord::default();
        self.store.remove_many(&keys::ALL)?;
        debug!("Session cleared");
        Ok(())
    }

    /// Local presence check. Clears the session when no token is held.
    ///
    /// Does not ask the backend whether the token is still valid.
    pub fn check_auth(&self) -> bool {
        if self.is_authenticated() {
            return true;
        }
        if let Err(e) = self.clear_auth() {
            warn!(error = %e, "Failed to erase persisted session");
        }
        false
    }

    /// Whether a token is held.
    pub fn is_authenticated(&self) -> bool {
        self.record.read().is_authenticated()
    }

    /// Whether the principal is an administrator.
    pub fn is_admin(&self) -> bool {
        self.record.read().role == Role::Admin
    }

    /// Whether the principal is a customer.
    pub fn is_client(&self) -> bool {
        self.record.read().role == Role::Client
    }

    /// Current bearer token (empty when logged out).
    pub fn token(&self) -> String {
        self.record.read().token.clone()
    }

    /// Current role.
    pub fn role(&self) -> Role {
        self.record.read().role
    }

    /// Current user info record.
    pub fn user_info(&self) -> Value {
        self.record.read().user_info.clone()
    }

    /// Copy of the whole record.
    pub fn snapshot(&self) -> SessionRecord {
        self.record.read().clone()
    }

    /// Login epoch. Changes on every `set_auth`, never on `clear_auth`.
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }
}

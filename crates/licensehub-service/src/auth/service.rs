//! Auth actions: customer login, administrator login, logout.

use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use serde_json::Value;
use tracing::{info, warn};

use licensehub_auth::{SessionRecord, SessionState};
use licensehub_client::RequestError;
use licensehub_client::api::AuthApi;
use licensehub_client::api::auth::{AdminLoginRequest, ClientLoginRequest};
use licensehub_core::error::AppError;
use licensehub_core::result::AppResult;
use licensehub_core::traits::Notifier;
use licensehub_core::types::notice::messages;
use licensehub_core::types::{Notice, Role};

/// Drives the login and logout flows. Holds no state of its own.
#[derive(Debug, Clone)]
pub struct AuthService {
    api: AuthApi,
    session: Arc<SessionState>,
    notifier: Arc<dyn Notifier>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(api: AuthApi, session: Arc<SessionState>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            session,
            notifier,
        }
    }

    /// Log in a customer with an authorization code and a captcha token.
    ///
    /// On failure the session is left untouched and the business message
    /// (or a generic one) is raised as a notice and returned.
    pub async fn client_login(
        &self,
        authorization_code: &str,
        captcha_token: &str,
    ) -> AppResult<SessionRecord> {
        let request = ClientLoginRequest {
            authorization_code: authorization_code.to_string(),
            captcha_token: captcha_token.to_string(),
        };

        let response = self
            .api
            .client_login(&request)
            .await
            .map_err(|e| self.login_failed(Role::Client, e))?;

        self.session
            .set_auth(response.session_token, Role::Client, response.customer_info)?;

        info!(role = %Role::Client, "Login succeeded");
        self.notifier.notify(Notice::success(messages::LOGIN_SUCCESS));
        Ok(self.session.snapshot())
    }

    /// Log in an administrator. `totp_code` may be empty for accounts
    /// without a second factor.
    pub async fn admin_login(
        &self,
        username: &str,
        password: &str,
        totp_code: &str,
    ) -> AppResult<SessionRecord> {
        let request = AdminLoginRequest {
            username: username.to_string(),
            password: password.to_string(),
            totp_code: totp_code.to_string(),
        };

        let response = self
            .api
            .admin_login(&request)
            .await
            .map_err(|e| self.login_failed(Role::Admin, e))?;

        let admin = serde_json::to_value(&response.admin)?;
        self.session.set_auth(response.token, Role::Admin, admin)?;

        let expires_at = TimeDelta::try_seconds(response.expires_in).map(|ttl| Utc::now() + ttl);
        info!(
            role = %Role::Admin,
            admin_id = response.admin.id,
            username = %response.admin.username,
            ?expires_at,
            "Login succeeded"
        );
        self.notifier.notify(Notice::success(messages::LOGIN_SUCCESS));
        Ok(self.session.snapshot())
    }

    /// Log out.
    ///
    /// The backend call is best effort and skipped when no session is held.
    /// The local session is always cleared and the confirmation notice is
    /// always raised; only a failure to erase the persisted copy is
    /// returned.
    pub async fn logout(&self) -> AppResult<()> {
        let record = self.session.snapshot();

        if record.is_authenticated() {
            if let Err(e) = self.api.logout(record.role).await {
                warn!(role = %record.role, error = %e, "Backend logout failed, clearing locally");
            }
        }

        let cleared = self.session.clear_auth();
        info!(role = %record.role, "Logged out");
        self.notifier.notify(Notice::success(messages::LOGGED_OUT));
        cleared
    }

    /// Fetch the backend's public key material.
    pub async fn public_key(&self) -> AppResult<Value> {
        Ok(self.api.public_key().await?)
    }

    fn login_failed(&self, role: Role, err: RequestError) -> AppError {
        let message = err.message_or(messages::LOGIN_FAILED);
        warn!(%role, status = ?err.status(), %message, "Login failed");
        self.notifier.notify(Notice::error(message.clone()));
        AppError::with_source(err.kind(), message, err)
    }
}

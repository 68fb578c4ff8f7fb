//! Login, logout and public key endpoints.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use licensehub_core::types::Role;

use crate::failure::RequestError;
use crate::http::ApiClient;

/// Customer login request.
#[derive(Debug, Clone, Serialize)]
pub struct ClientLoginRequest {
    /// Authorization code issued to the customer.
    pub authorization_code: String,
    /// Captcha token obtained by the front end.
    pub captcha_token: String,
}

/// Customer login response.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientLoginResponse {
    /// Session token.
    pub session_token: String,
    /// Customer record.
    #[serde(default)]
    pub customer_info: Value,
}

/// Administrator login request.
#[derive(Debug, Clone, Serialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
    /// Current TOTP code. Empty when the account has no TOTP.
    pub totp_code: String,
}

/// Administrator record returned on login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminInfo {
    pub id: u64,
    pub username: String,
}

/// Administrator login response.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminLoginResponse {
    /// Session token.
    pub token: String,
    /// Token lifetime in seconds.
    #[serde(default)]
    pub expires_in: i64,
    pub admin: AdminInfo,
}

/// Authentication endpoints.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /login`
    pub async fn client_login(
        &self,
        request: &ClientLoginRequest,
    ) -> Result<ClientLoginResponse, RequestError> {
        self.client.post_json("/login", request).await
    }

    /// `POST /admin/login`
    pub async fn admin_login(
        &self,
        request: &AdminLoginRequest,
    ) -> Result<AdminLoginResponse, RequestError> {
        self.client.post_json("/admin/login", request).await
    }

    /// `POST /admin/logout` for administrators, `POST /logout` otherwise.
    pub async fn logout(&self, role: Role) -> Result<(), RequestError> {
        let path = match role {
            Role::Admin => "/admin/logout",
            _ => "/logout",
        };
        self.client.post_empty::<Value>(path).await.map(|_| ())
    }

    /// `GET /public-key`
    pub async fn public_key(&self) -> Result<Value, RequestError> {
        self.client.get_json("/public-key").await
    }
}

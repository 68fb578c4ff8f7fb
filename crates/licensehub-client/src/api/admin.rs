//! Administrator console endpoints.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{Value, json};

use crate::failure::RequestError;
use crate::http::ApiClient;

/// Endpoints available to a logged-in administrator.
#[derive(Debug, Clone)]
pub struct AdminApi {
    client: Arc<ApiClient>,
}

impl AdminApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /admin/dashboard`
    pub async fn dashboard(&self) -> Result<Value, RequestError> {
        self.client.get_json("/admin/dashboard").await
    }

    /// `GET /admin/totp/info/{id}`
    pub async fn totp_info(&self, admin_id: u64) -> Result<Value, RequestError> {
        self.client
            .get_json(&format!("/admin/totp/info/{admin_id}"))
            .await
    }

    /// `POST /admin/totp/enable/{id}`, answers with the enrollment secret.
    pub async fn totp_enable(&self, admin_id: u64) -> Result<Value, RequestError> {
        self.client
            .post_empty(&format!("/admin/totp/enable/{admin_id}"))
            .await
    }

    /// `POST /admin/totp/disable/{id}`
    pub async fn totp_disable(&self, admin_id: u64) -> Result<Value, RequestError> {
        self.client
            .post_empty(&format!("/admin/totp/disable/{admin_id}"))
            .await
    }

    /// `POST /admin/totp/verify/{id}`
    pub async fn totp_verify(&self, admin_id: u64, totp_code: &str) -> Result<Value, RequestError> {
        self.client
            .post_json(
                &format!("/admin/totp/verify/{admin_id}"),
                &json!({ "totp_code": totp_code }),
            )
            .await
    }

    /// `POST /admin/system/backup`, with the backup timeout.
    pub async fn create_backup(&self) -> Result<Value, RequestError> {
        let request = self
            .client
            .request(Method::POST, "/admin/system/backup")
            .timeout(self.client.config().backup_timeout())
            .json(&json!({}));
        self.client.send_json(request).await
    }

    /// `GET /admin/system/config`
    pub async fn system_config(&self) -> Result<Value, RequestError> {
        self.client.get_json("/admin/system/config").await
    }
}

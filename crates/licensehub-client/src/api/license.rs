//! License file endpoints.

use std::sync::Arc;

use bytes::Bytes;
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::failure::RequestError;
use crate::http::{ApiClient, BinaryPayload};

/// A device binding file uploaded for activation.
#[derive(Debug, Clone)]
pub struct LicenseFile {
    /// File name as sent to the backend.
    pub name: String,
    /// File contents.
    pub content: Bytes,
}

/// License activation, transfer and download.
#[derive(Debug, Clone)]
pub struct LicenseApi {
    client: Arc<ApiClient>,
}

impl LicenseApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /licenses/{id}/download`
    pub async fn download(&self, license_id: &str) -> Result<BinaryPayload, RequestError> {
        self.client
            .get_bytes(&format!("/licenses/{license_id}/download"))
            .await
    }

    /// `POST /actions/activate-licenses`
    ///
    /// Answers with an archive of license files. Uses the upload timeout.
    pub async fn activate(
        &self,
        authorization_code: &str,
        files: Vec<LicenseFile>,
    ) -> Result<BinaryPayload, RequestError> {
        let form = files.into_iter().fold(
            Form::new().text("authorization_code", authorization_code.to_string()),
            |form, file| {
                form.part(
                    "files",
                    Part::stream(file.content).file_name(file.name),
                )
            },
        );

        let request = self
            .client
            .request(Method::POST, "/actions/activate-licenses")
            .timeout(self.client.config().upload_timeout())
            .multipart(form);
        self.client.send_binary(request).await
    }

    /// `POST /actions/transfer-license`
    pub async fn transfer(
        &self,
        from_code: &str,
        to_code: &str,
        device_ids: &[String],
    ) -> Result<Value, RequestError> {
        let form = device_ids.iter().fold(
            Form::new()
                .text("from_authorization_code", from_code.to_string())
                .text("to_authorization_code", to_code.to_string()),
            |form, id| form.text("device_ids", id.clone()),
        );

        let request = self
            .client
            .request(Method::POST, "/actions/transfer-license")
            .multipart(form);
        self.client.send_json(request).await
    }
}

//! Customer console endpoints.

use std::sync::Arc;

use serde_json::Value;

use crate::failure::RequestError;
use crate::http::ApiClient;

/// Endpoints available to a logged-in customer.
#[derive(Debug, Clone)]
pub struct CustomerApi {
    client: Arc<ApiClient>,
}

impl CustomerApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /client/dashboard`
    pub async fn dashboard(&self) -> Result<Value, RequestError> {
        self.client.get_json("/client/dashboard").await
    }
}

//! HTTP client for the LicenseHub backend.
//!
//! Every call runs the outbound stage, the transport, and on failure the
//! inbound stage, whose navigation decision is handed to the navigator
//! before the error reaches the caller.

use std::sync::Arc;

use bytes::Bytes;
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE, HeaderMap};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use licensehub_auth::SessionState;
use licensehub_core::config::ApiConfig;
use licensehub_core::error::AppError;
use licensehub_core::result::AppResult;
use licensehub_core::traits::{Navigator, Notifier};

use crate::failure::{HttpFailure, RawFailure, RequestError, StructuredFailure};
use crate::pipeline::RequestPipeline;

/// Expected payload of a successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// JSON document.
    Json,
    /// Opaque bytes (file download).
    Binary,
}

/// Body of a successful binary call.
#[derive(Debug, Clone)]
pub struct BinaryPayload {
    /// Raw bytes.
    pub bytes: Bytes,
    /// `Content-Type`, when sent.
    pub content_type: Option<String>,
    /// File name from `Content-Disposition`, when sent.
    pub file_name: Option<String>,
}

/// A response that made it through the transport.
#[derive(Debug)]
struct Exchange {
    headers: HeaderMap,
    body: Bytes,
}

/// Backend client shared by every endpoint binding.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    pipeline: RequestPipeline,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(
        config: &ApiConfig,
        session: Arc<SessionState>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            config: config.clone(),
            pipeline: RequestPipeline::new(session, notifier),
            navigator,
        })
    }

    /// API settings in effect.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Start a request with the default timeout. Override with
    /// [`RequestBuilder::timeout`] for long-running calls.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .timeout(self.config.request_timeout())
    }

    /// Send a request and decode its JSON body. An empty body decodes as
    /// `null`.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, RequestError> {
        self.execute(request, ResponseKind::Json, |exchange| {
            let body: &[u8] = if exchange.body.iter().all(u8::is_ascii_whitespace) {
                b"null"
            } else {
                &exchange.body
            };
            serde_json::from_slice(body).map_err(|e| RequestError::Decode(e.to_string()))
        })
        .await
    }

    /// Send a request expecting a binary body.
    pub async fn send_binary(&self, request: RequestBuilder) -> Result<BinaryPayload, RequestError> {
        self.execute(request, ResponseKind::Binary, |exchange| {
            Ok(BinaryPayload {
                content_type: header_str(&exchange.headers, CONTENT_TYPE.as_str()),
                file_name: header_str(&exchange.headers, CONTENT_DISPOSITION.as_str())
                    .and_then(|value| attachment_name(&value)),
                bytes: exchange.body,
            })
        })
        .await
    }

    /// `GET` a JSON resource.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        self.send_json(self.request(Method::GET, path)).await
    }

    /// `POST` a JSON body and decode the JSON answer.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.request(Method::POST, path).json(body))
            .await
    }

    /// `POST` without a body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        self.send_json(self.request(Method::POST, path)).await
    }

    /// `GET` a binary resource.
    pub async fn get_bytes(&self, path: &str) -> Result<BinaryPayload, RequestError> {
        self.send_binary(self.request(Method::GET, path)).await
    }

    async fn execute<T>(
        &self,
        request: RequestBuilder,
        kind: ResponseKind,
        finish: impl FnOnce(Exchange) -> Result<T, RequestError>,
    ) -> Result<T, RequestError> {
        let request = self.pipeline.outbound.apply(request);

        match self.transport(request, kind).await.and_then(finish) {
            Ok(value) => Ok(value),
            Err(error) => {
                let outcome = self
                    .pipeline
                    .inbound
                    .handle(error, &self.navigator.current_path());
                if let Some(intent) = &outcome.navigation {
                    self.navigator.navigate(intent);
                }
                Err(outcome.error)
            }
        }
    }

    /// Dispatch and read the whole body. Error statuses become failures of
    /// the shape matching `kind`.
    async fn transport(
        &self,
        request: RequestBuilder,
        kind: ResponseKind,
    ) -> Result<Exchange, RequestError> {
        let response = request.send().await.map_err(RequestError::from_transport)?;
        let status = response.status();
        let headers = response.headers().clone();
        debug!(url = %response.url(), status = status.as_u16(), "Backend responded");

        let body = response.bytes().await.map_err(RequestError::from_transport)?;

        if status.is_success() {
            return Ok(Exchange { headers, body });
        }

        Err(RequestError::Http(failure(status, &headers, body, kind)))
    }
}

fn failure(status: StatusCode, headers: &HeaderMap, body: Bytes, kind: ResponseKind) -> HttpFailure {
    match kind {
        ResponseKind::Json => HttpFailure::Structured(StructuredFailure::from_body(status, &body)),
        ResponseKind::Binary => HttpFailure::Raw(RawFailure {
            status,
            content_type: header_str(headers, CONTENT_TYPE.as_str()),
            body,
        }),
    }
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// `filename` parameter of a `Content-Disposition` value.
fn attachment_name(disposition: &str) -> Option<String> {
    disposition
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}

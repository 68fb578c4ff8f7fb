//! Failure types produced by backend calls.
//!
//! An HTTP error response starts life either as a [`StructuredFailure`]
//! (JSON call, body parsed) or as a [`RawFailure`] (binary call, body kept
//! as bytes). The inbound stage upgrades raw failures whose bytes turn out
//! to be a JSON document, so callers see one shape for business errors.

use std::fmt;

use bytes::Bytes;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use licensehub_core::error::{AppError, ErrorKind};

/// Error response whose body has not been decoded.
#[derive(Debug, Clone)]
pub struct RawFailure {
    /// HTTP status.
    pub status: StatusCode,
    /// `Content-Type` of the body, when sent.
    pub content_type: Option<String>,
    /// Body bytes as received.
    pub body: Bytes,
}

impl RawFailure {
    /// Decode the body as UTF-8 text holding a JSON document.
    pub fn decode(&self) -> Option<StructuredFailure> {
        let text = std::str::from_utf8(&self.body).ok()?;
        let data = serde_json::from_str(text).ok()?;
        Some(StructuredFailure {
            status: self.status,
            data,
        })
    }
}

/// Error response with a parsed JSON body.
#[derive(Debug, Clone)]
pub struct StructuredFailure {
    /// HTTP status.
    pub status: StatusCode,
    /// Parsed body. Non-JSON text is kept as a string, an empty body as null.
    pub data: Value,
}

impl StructuredFailure {
    /// Build from a body received on a JSON call.
    pub fn from_body(status: StatusCode, body: &[u8]) -> Self {
        let data = if body.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(body)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
        };
        Self { status, data }
    }

    /// Business message carried by the body: `error` first, then `message`.
    pub fn business_message(&self) -> Option<&str> {
        ["error", "message"]
            .iter()
            .filter_map(|field| self.data.get(field).and_then(Value::as_str))
            .find(|message| !message.is_empty())
    }

    /// Whether the body flags a business error at all.
    ///
    /// Any non-empty `error` or `message` counts, including non-string
    /// values such as error objects or codes. `business_message` only
    /// yields the ones that can be shown as text.
    pub fn has_business_error(&self) -> bool {
        ["error", "message"]
            .iter()
            .filter_map(|field| self.data.get(field))
            .any(is_truthy)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// An HTTP response with a non-success status.
#[derive(Debug, Clone)]
pub enum HttpFailure {
    /// Body not decoded (binary call).
    Raw(RawFailure),
    /// Body parsed as JSON.
    Structured(StructuredFailure),
}

impl HttpFailure {
    /// HTTP status.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Raw(raw) => raw.status,
            Self::Structured(structured) => structured.status,
        }
    }

    /// Business message, when the body carries one.
    pub fn business_message(&self) -> Option<&str> {
        match self {
            Self::Raw(_) => None,
            Self::Structured(structured) => structured.business_message(),
        }
    }

    /// Whether the body flags a business error, shown or not.
    pub fn has_business_error(&self) -> bool {
        match self {
            Self::Raw(_) => false,
            Self::Structured(structured) => structured.has_business_error(),
        }
    }
}

impl fmt::Display for HttpFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.business_message() {
            Some(message) => f.write_str(message),
            None => write!(f, "HTTP {}", self.status()),
        }
    }
}

/// Failure of a backend call.
#[derive(Debug, Clone, Error)]
pub enum RequestError {
    /// The backend answered with an error status.
    #[error("{0}")]
    Http(HttpFailure),
    /// The call did not complete before its deadline.
    #[error("request timed out")]
    Timeout,
    /// No response was received.
    #[error("network error: {0}")]
    Network(String),
    /// A success response carried a body that could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The request could not be built.
    #[error("invalid request: {0}")]
    Build(String),
}

impl RequestError {
    /// Classify a transport error raised by reqwest.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_builder() {
            Self::Build(err.to_string())
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }

    /// HTTP status, for responses that arrived.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http(failure) => Some(failure.status()),
            _ => None,
        }
    }

    /// Business message carried by the error body.
    pub fn business_message(&self) -> Option<&str> {
        match self {
            Self::Http(failure) => failure.business_message(),
            _ => None,
        }
    }

    /// Business message, or `fallback` when there is none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.business_message().unwrap_or(fallback).to_string()
    }

    /// Error category of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(failure) => match failure.status() {
                StatusCode::UNAUTHORIZED => ErrorKind::Authentication,
                StatusCode::FORBIDDEN => ErrorKind::Authorization,
                StatusCode::NOT_FOUND => ErrorKind::NotFound,
                status if status.is_client_error() => ErrorKind::Validation,
                _ => ErrorKind::ExternalService,
            },
            Self::Timeout => ErrorKind::Timeout,
            Self::Network(_) => ErrorKind::Network,
            Self::Decode(_) => ErrorKind::Serialization,
            Self::Build(_) => ErrorKind::Internal,
        }
    }
}

impl From<RequestError> for AppError {
    fn from(err: RequestError) -> Self {
        let message = err.to_string();
        Self::with_source(err.kind(), message, err)
    }
}

//! User-facing notices raised by the console core.

use serde::{Deserialize, Serialize};

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// An operation completed.
    Success,
    /// Something went wrong.
    Error,
}

/// A short message meant for the person driving the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Message text.
    pub message: String,
}

impl Notice {
    /// Create a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Create an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Fixed notice texts.
pub mod messages {
    /// Raised when the backend answers 401.
    pub const SESSION_EXPIRED: &str = "Session expired, please log in again";
    /// Raised on 404 without a business message.
    pub const NOT_FOUND: &str = "The requested resource does not exist";
    /// Raised on 500 without a business message.
    pub const SERVER_ERROR: &str = "Internal server error";
    /// Raised when a call exceeds its deadline.
    pub const TIMEOUT: &str = "Request timed out";
    /// Raised when no response was received.
    pub const NETWORK: &str = "Network error";
    /// Raised after a successful login.
    pub const LOGIN_SUCCESS: &str = "Login successful";
    /// Fallback when a failed login carries no business message.
    pub const LOGIN_FAILED: &str = "Login failed";
    /// Raised after logout.
    pub const LOGGED_OUT: &str = "Logged out";
}

//! Principal role carried by a console session.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Role of the current principal.
///
/// `None` is only valid while no session token is held; an authenticated
/// session is always `Client` or `Admin`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// No principal is logged in.
    #[default]
    None,
    /// A customer holding an authorization code.
    Client,
    /// A platform administrator.
    Admin,
}

impl Role {
    /// Tag written to the credential store. Empty for [`Role::None`].
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Client => "client",
            Self::Admin => "admin",
        }
    }

    /// Parse a persisted tag. Unknown or empty tags map to [`Role::None`].
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }

    /// Whether this role can back an authenticated session.
    pub fn is_principal(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Client => write!(f, "client"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(Self::None),
            "client" => Ok(Self::Client),
            "admin" => Ok(Self::Admin),
            other => Err(AppError::validation(format!("Unknown role: '{other}'"))),
        }
    }
}

//! Static per-route access declaration.

use serde::{Deserialize, Serialize};

use licensehub_core::types::Role;

/// Access requirements declared on a route when the table is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMeta {
    /// Whether a session token is needed to enter the route.
    pub requires_auth: bool,
    /// Role the route is meant for, if any.
    pub role: Option<Role>,
}

impl RouteMeta {
    /// A route anyone can open.
    pub const fn public() -> Self {
        Self {
            requires_auth: false,
            role: None,
        }
    }

    /// A route that needs a session held by `role`.
    pub const fn protected(role: Role) -> Self {
        Self {
            requires_auth: true,
            role: Some(role),
        }
    }

    /// A route that needs any session.
    pub const fn authenticated() -> Self {
        Self {
            requires_auth: true,
            role: None,
        }
    }
}

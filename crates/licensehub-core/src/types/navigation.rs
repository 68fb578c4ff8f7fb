//! Declarative navigation decisions.
//!
//! Decision logic (route guard, response pipeline) returns these values;
//! a [`Navigator`](crate::traits::Navigator) executes them.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// Landing route used when an authenticated principal opens a route
/// declared for another role.
pub const LANDING_PATH: &str = "/";
/// Customer login route.
pub const CLIENT_LOGIN_PATH: &str = "/client/login";
/// Administrator login route.
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

/// A navigation the console should perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "target", rename_all = "snake_case")]
pub enum NavigationIntent {
    /// Client-side redirect decided before a navigation completes.
    Redirect(String),
    /// Full reload of the console at the given location.
    HardRedirect(String),
}

impl NavigationIntent {
    /// Target path of the navigation.
    pub fn target(&self) -> &str {
        match self {
            Self::Redirect(target) | Self::HardRedirect(target) => target,
        }
    }
}

/// Login route for a role declared on a route. Anything but `Admin` goes to
/// the customer login.
pub fn login_path_for_role(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Admin) => ADMIN_LOGIN_PATH,
        _ => CLIENT_LOGIN_PATH,
    }
}

/// Login route for the area the console is currently in, by the top-level
/// path segment.
pub fn login_path_for_location(current_path: &str) -> &'static str {
    if current_path.starts_with("/admin") {
        ADMIN_LOGIN_PATH
    } else {
        CLIENT_LOGIN_PATH
    }
}

//! Navigation guard: decides whether the current session may enter a route.

use tracing::debug;

use licensehub_core::types::navigation::{LANDING_PATH, login_path_for_role};
use licensehub_core::types::{NavigationIntent, Role};

use super::meta::RouteMeta;
use super::routes::{Route, RouteTable};
use crate::session::SessionState;

/// Outcome of the guard for one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// The navigation may proceed.
    Allow,
    /// The navigation is replaced by one to the given path.
    Redirect(String),
}

impl GuardDecision {
    /// Navigation intent to execute, if the guard rerouted.
    pub fn into_intent(self) -> Option<NavigationIntent> {
        match self {
            Self::Allow => None,
            Self::Redirect(target) => Some(NavigationIntent::Redirect(target)),
        }
    }

    /// Whether the navigation may proceed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// A resolved navigation together with the guard's decision.
#[derive(Debug, Clone)]
pub struct RouteCheck<'a> {
    /// Route reached after static redirects.
    pub route: &'a Route,
    /// Path of that route.
    pub path: String,
    /// Guard decision for it.
    pub decision: GuardDecision,
}

/// Enforces route metadata against the current session.
///
/// The guard only reads the session.
#[derive(Debug, Clone, Default)]
pub struct RouteGuard {
    /// The route table consulted for path lookups.
    table: RouteTable,
}

impl RouteGuard {
    /// Creates a guard over the given route table.
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    /// Returns the underlying route table.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Decide a navigation from route metadata and session facts.
    ///
    /// - public route: allow
    /// - protected route, no session: login page for the declared role
    /// - protected route, session of another role: landing page
    pub fn decide(meta: &RouteMeta, authenticated: bool, role: Role) -> GuardDecision {
        if !meta.requires_auth {
            return GuardDecision::Allow;
        }

        if !authenticated {
            return GuardDecision::Redirect(login_path_for_role(meta.role).to_string());
        }

        match meta.role {
            Some(required) if required != role => GuardDecision::Redirect(LANDING_PATH.to_string()),
            _ => GuardDecision::Allow,
        }
    }

    /// Decide a navigation to a route with the given metadata.
    pub fn evaluate(meta: &RouteMeta, session: &SessionState) -> GuardDecision {
        let record = session.snapshot();
        Self::decide(meta, record.is_authenticated(), record.role)
    }

    /// Resolve `path` through the route table and run the guard on the
    /// route it lands on.
    pub fn check(&self, path: &str, session: &SessionState) -> RouteCheck<'_> {
        let (route, path) = self.table.resolve(path);
        let decision = Self::evaluate(&route.meta, session);

        debug!(
            path = %path,
            route = route.name,
            ?decision,
            "Route guard evaluated"
        );

        RouteCheck {
            route,
            path,
            decision,
        }
    }
}

//! The console route table.

use serde::Serialize;

use licensehub_core::types::Role;
use licensehub_core::types::navigation::{ADMIN_LOGIN_PATH, CLIENT_LOGIN_PATH, LANDING_PATH};

use super::meta::RouteMeta;

/// Upper bound on chained static redirects while resolving a path.
const MAX_REDIRECTS: usize = 8;

/// A single console route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Absolute path, without trailing slash (except the root).
    pub path: String,
    /// Route name.
    pub name: &'static str,
    /// Access declaration.
    pub meta: RouteMeta,
    /// Static redirect applied before the guard runs.
    pub redirect: Option<&'static str>,
}

impl Route {
    /// A leaf route.
    pub fn page(path: impl Into<String>, name: &'static str, meta: RouteMeta) -> Self {
        Self {
            path: path.into(),
            name,
            meta,
            redirect: None,
        }
    }

    /// A route that only forwards to another path.
    pub fn redirect(path: impl Into<String>, name: &'static str, target: &'static str) -> Self {
        Self {
            path: path.into(),
            name,
            meta: RouteMeta::public(),
            redirect: Some(target),
        }
    }
}

/// Immutable table of console routes plus the fallback for unknown paths.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    fallback: Route,
}

impl RouteTable {
    /// Create a table from explicit routes.
    pub fn new(routes: Vec<Route>, fallback: Route) -> Self {
        Self { routes, fallback }
    }

    /// Routes of the LicenseHub console.
    pub fn console() -> Self {
        let admin = RouteMeta::protected(Role::Admin);

        let mut routes = vec![
            Route::redirect(LANDING_PATH, "Root", CLIENT_LOGIN_PATH),
            Route::page(CLIENT_LOGIN_PATH, "ClientLogin", RouteMeta::public()),
            Route::page(
                "/client/dashboard",
                "ClientDashboard",
                RouteMeta::protected(Role::Client),
            ),
            Route::page(ADMIN_LOGIN_PATH, "AdminLogin", RouteMeta::public()),
            Route {
                path: "/admin".to_string(),
                name: "AdminLayout",
                meta: admin,
                redirect: Some("/admin/dashboard"),
            },
        ];

        routes.extend(layout(
            "/admin",
            admin,
            &[
                ("dashboard", "AdminDashboard"),
                ("authorizations", "AuthorizationManagement"),
                ("customers", "CustomerManagement"),
                ("system", "SystemSettings"),
            ],
        ));

        Self::new(routes, Route::page("*", "NotFound", RouteMeta::public()))
    }

    /// All declared routes, in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Route for an exact path, or the fallback.
    pub fn lookup(&self, path: &str) -> &Route {
        let path = normalize(path);
        self.routes
            .iter()
            .find(|route| route.path == path)
            .unwrap_or(&self.fallback)
    }

    /// Follow static redirects from `path` and return the final route with
    /// the path it was reached at.
    pub fn resolve(&self, path: &str) -> (&Route, String) {
        let mut current = normalize(path).to_string();
        let mut route = self.lookup(&current);

        for _ in 0..MAX_REDIRECTS {
            match route.redirect {
                Some(target) => {
                    current = target.to_string();
                    route = self.lookup(&current);
                }
                None => break,
            }
        }

        (route, current)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::console()
    }
}

/// Children of a layout route inherit the layout's metadata.
fn layout(prefix: &str, meta: RouteMeta, children: &[(&str, &'static str)]) -> Vec<Route> {
    children
        .iter()
        .map(|&(segment, name)| Route::page(format!("{prefix}/{segment}"), name, meta))
        .collect()
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => LANDING_PATH,
        trimmed => trimmed,
    }
}

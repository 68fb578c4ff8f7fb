//! Route metadata, the console route table, and the navigation guard.

pub mod enforcer;
pub mod meta;
pub mod routes;

pub use enforcer::{GuardDecision, RouteCheck, RouteGuard};
pub use meta::RouteMeta;
pub use routes::{Route, RouteTable};

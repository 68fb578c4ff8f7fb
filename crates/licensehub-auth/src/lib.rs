//! # licensehub-auth
//!
//! Client-held authentication state for the LicenseHub console.
//!
//! ## Modules
//!
//! - `session` - the authoritative session record and its persisted mirror
//! - `guard` - route metadata, the console route table, and the route guard

pub mod guard;
pub mod session;

pub use guard::{GuardDecision, RouteGuard, RouteMeta, RouteTable};
pub use session::{SessionRecord, SessionState};

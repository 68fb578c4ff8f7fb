//! # licensehub-service
//!
//! Console use cases built on the backend client. Services follow
//! constructor injection: the session, the API bindings and the notifier
//! are handed in as `Arc` references.

pub mod auth;
pub mod license;

pub use auth::AuthService;
pub use license::LicenseService;

//! Typed bindings for backend endpoints.

pub mod admin;
pub mod auth;
pub mod customer;
pub mod license;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use customer::CustomerApi;
pub use license::{LicenseApi, LicenseFile};

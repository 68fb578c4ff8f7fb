//! # licensehub-core
//!
//! Core crate for the LicenseHub console. Contains the seam traits,
//! configuration schemas, shared session/navigation types, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other LicenseHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;

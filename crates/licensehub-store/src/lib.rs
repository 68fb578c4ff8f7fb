//! # licensehub-store
//!
//! Credential store implementations for the LicenseHub console:
//!
//! - **file**: a JSON document on disk, rewritten atomically on each change
//! - **memory**: an in-process map using [dashmap](https://crates.io/crates/dashmap)
//!
//! The provider is selected at runtime based on configuration.

#[cfg(feature = "file")]
pub mod file;
pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;

pub use provider::StoreManager;

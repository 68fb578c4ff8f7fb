//! JSON file credential store.

pub mod store;

pub use store::FileCredentialStore;

//! Seam traits implemented by pluggable backends and by the console front end.

pub mod credential_store;
pub mod navigator;
pub mod notifier;

pub use credential_store::CredentialStore;
pub use navigator::Navigator;
pub use notifier::Notifier;

pub mod service;

pub use service::LicenseService;

//! Shared value types used by several LicenseHub crates.

pub mod navigation;
pub mod notice;
pub mod role;

pub use navigation::NavigationIntent;
pub use notice::{Notice, NoticeLevel};
pub use role::Role;

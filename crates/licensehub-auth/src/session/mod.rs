//! Session lifecycle: restore, set, clear, check.

pub mod state;

pub use state::{SessionRecord, SessionState};

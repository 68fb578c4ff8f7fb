//! Sink for user-facing notices.

use crate::types::Notice;

/// Presents notices to the person using the console.
///
/// The terminal front end prints them; tests record them.
pub trait Notifier: Send + Sync + std::fmt::Debug + 'static {
    /// Present a notice.
    fn notify(&self, notice: Notice);
}

//! Executor for navigation intents.

use crate::types::NavigationIntent;

/// Owns the console location and carries out navigation decisions.
pub trait Navigator: Send + Sync + std::fmt::Debug + 'static {
    /// Path the console is currently showing.
    fn current_path(&self) -> String;

    /// Record a navigation the guard allowed.
    fn arrive(&self, path: &str);

    /// Perform a rerouting decision. Repeating the same intent must be
    /// harmless.
    fn navigate(&self, intent: &NavigationIntent);
}

//! Terminal implementations of the notice sink and the navigator.

use parking_lot::RwLock;
use tracing::info;

use licensehub_core::traits::{Navigator, Notifier};
use licensehub_core::types::navigation::LANDING_PATH;
use licensehub_core::types::{NavigationIntent, Notice, NoticeLevel};

use crate::output;

/// Prints notices as they are raised.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => output::print_success(&notice.message),
            NoticeLevel::Error => output::print_error(&notice.message),
        }
    }
}

/// Tracks the console location for one CLI invocation.
#[derive(Debug)]
pub struct ConsoleNavigator {
    location: RwLock<String>,
}

impl ConsoleNavigator {
    /// Start at the landing route.
    pub fn new() -> Self {
        Self {
            location: RwLock::new(LANDING_PATH.to_string()),
        }
    }
}

impl Default for ConsoleNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for ConsoleNavigator {
    fn current_path(&self) -> String {
        self.location.read().clone()
    }

    fn arrive(&self, path: &str) {
        *self.location.write() = path.to_string();
    }

    fn navigate(&self, intent: &NavigationIntent) {
        let target = intent.target();
        let mut location = self.location.write();
        if *location == target {
            return;
        }

        info!(from = location.as_str(), to = target, ?intent, "Navigating");
        match intent {
            NavigationIntent::Redirect(_) => {
                output::print_warning(&format!("Redirected to {target}"))
            }
            NavigationIntent::HardRedirect(_) => {
                output::print_warning(&format!("Console reset, continue at {target}"))
            }
        }
        *location = target.to_string();
    }
}

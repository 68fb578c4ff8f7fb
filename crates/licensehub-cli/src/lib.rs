//! # licensehub-cli
//!
//! Terminal console for LicenseHub. Wires the credential store, the
//! session, the backend client and the route guard together and exposes
//! them as a clap command tree.

pub mod commands;
pub mod console;
pub mod output;
pub mod terminal;

pub use commands::Cli;
pub use console::Console;
pub use terminal::{ConsoleNavigator, TerminalNotifier};

//! CLI command definitions and dispatch.

pub mod admin;
pub mod client;
pub mod license;
pub mod login;
pub mod session;

use clap::{Parser, Subcommand};

use licensehub_core::config::AppConfig;
use licensehub_core::error::AppError;

use crate::console::Console;
use crate::output::OutputFormat;

/// LicenseHub console
#[derive(Debug, Parser)]
#[command(name = "licensehub", version, about, long_about = None)]
pub struct Cli {
    /// Path to an extra configuration file
    #[arg(short, long, env = "LICENSEHUB_CONFIG")]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in as a customer or an administrator
    Login(login::LoginArgs),
    /// End the current session
    Logout,
    /// Show the current session
    Status,
    /// List console routes and whether the session may open them
    Routes,
    /// Navigate to a console path through the route guard
    Open {
        /// Console path, e.g. /admin/system
        path: String,
    },
    /// Show the backend public key
    PublicKey,
    /// Customer console
    Client(client::ClientArgs),
    /// License files
    License(license::LicenseArgs),
    /// Administrator console
    Admin(admin::AdminArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        let console = Console::open(config)?;
        self.run(&console).await
    }

    /// Execute against an already assembled console
    pub async fn run(&self, console: &Console) -> Result<(), AppError> {
        match &self.command {
            Commands::Login(args) => login::execute(args, console, self.format).await,
            Commands::Logout => session::logout(console).await,
            Commands::Status => session::status(console, self.format),
            Commands::Routes => session::routes(console, self.format),
            Commands::Open { path } => session::open(console, path),
            Commands::PublicKey => session::public_key(console, self.format).await,
            Commands::Client(args) => client::execute(args, console, self.format).await,
            Commands::License(args) => license::execute(args, console, self.format).await,
            Commands::Admin(args) => admin::execute(args, console, self.format).await,
        }
    }
}

/// Helper: prompt for a value that was not given on the command line
pub(crate) fn prompt_text(value: &Option<String>, prompt: &str, allow_empty: bool) -> Result<String, AppError> {
    match value {
        Some(v) => Ok(v.clone()),
        None => dialoguer::Input::new()
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text()
            .map_err(|e| AppError::internal(format!("Input error: {e}"))),
    }
}

//! Customer console commands.

use clap::{Args, Subcommand};

use licensehub_core::error::AppError;

use crate::console::Console;
use crate::output::{self, OutputFormat};

/// Customer dashboard route.
pub const DASHBOARD_PATH: &str = "/client/dashboard";

/// Arguments for customer commands
#[derive(Debug, Args)]
pub struct ClientArgs {
    /// Customer subcommand
    #[command(subcommand)]
    pub command: ClientCommand,
}

/// Customer subcommands
#[derive(Debug, Subcommand)]
pub enum ClientCommand {
    /// Show the customer dashboard
    Dashboard,
}

/// Execute customer commands
pub async fn execute(args: &ClientArgs, console: &Console, format: OutputFormat) -> Result<(), AppError> {
    console.enter(DASHBOARD_PATH)?;

    match &args.command {
        ClientCommand::Dashboard => {
            let dashboard = console.customer.dashboard().await?;
            output::print_value("Dashboard", &dashboard, format);
        }
    }
    Ok(())
}

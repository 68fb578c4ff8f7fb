//! Administrator console commands.

use clap::{Args, Subcommand};
use serde_json::Value;

use licensehub_core::error::AppError;

use crate::console::Console;
use crate::output::{self, OutputFormat};

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Show the admin dashboard
    Dashboard,
    /// Create a system backup
    Backup,
    /// Show the system configuration
    Config,
    /// Manage TOTP for an administrator
    Totp {
        #[command(subcommand)]
        command: TotpCommand,
    },
}

/// TOTP subcommands. The admin id defaults to the logged-in administrator.
#[derive(Debug, Subcommand)]
pub enum TotpCommand {
    /// Show TOTP status
    Info { id: Option<u64> },
    /// Start TOTP enrollment
    Enable { id: Option<u64> },
    /// Turn TOTP off
    Disable { id: Option<u64> },
    /// Confirm enrollment with a code from the authenticator
    Verify {
        id: Option<u64>,
        /// Current TOTP code
        #[arg(long)]
        code: String,
    },
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, console: &Console, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        AdminCommand::Dashboard => {
            console.enter("/admin/dashboard")?;
            let dashboard = console.admin.dashboard().await?;
            output::print_value("Dashboard", &dashboard, format);
        }
        AdminCommand::Backup => {
            console.enter("/admin/system")?;
            let backup = console.admin.create_backup().await?;
            output::print_success("Backup created");
            output::print_value("Backup", &backup, format);
        }
        AdminCommand::Config => {
            console.enter("/admin/system")?;
            let config = console.admin.system_config().await?;
            output::print_value("System configuration", &config, format);
        }
        AdminCommand::Totp { command } => {
            console.enter("/admin/system")?;
            let result = match command {
                TotpCommand::Info { id } => console.admin.totp_info(admin_id(console, *id)?).await?,
                TotpCommand::Enable { id } => {
                    console.admin.totp_enable(admin_id(console, *id)?).await?
                }
                TotpCommand::Disable { id } => {
                    console.admin.totp_disable(admin_id(console, *id)?).await?
                }
                TotpCommand::Verify { id, code } => {
                    console
                        .admin
                        .totp_verify(admin_id(console, *id)?, code)
                        .await?
                }
            };
            output::print_value("TOTP", &result, format);
        }
    }
    Ok(())
}

fn admin_id(console: &Console, explicit: Option<u64>) -> Result<u64, AppError> {
    explicit
        .or_else(|| console.session.user_info().get("id").and_then(Value::as_u64))
        .ok_or_else(|| AppError::validation("Admin id required"))
}

//! License file commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use licensehub_core::error::AppError;

use crate::console::Console;
use crate::output::{self, OutputFormat};

/// Arguments for license commands
#[derive(Debug, Args)]
pub struct LicenseArgs {
    /// License subcommand
    #[command(subcommand)]
    pub command: LicenseCommand,
}

/// License subcommands
#[derive(Debug, Subcommand)]
pub enum LicenseCommand {
    /// Download a license file
    Download {
        /// License id
        id: String,
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
    /// Activate devices from binding files
    Activate {
        /// Authorization code the devices are bound to
        #[arg(long)]
        code: String,
        /// Directory for the returned license archive
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
        /// Device binding files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Move devices to another authorization code
    Transfer {
        /// Source authorization code
        #[arg(long)]
        from: String,
        /// Target authorization code
        #[arg(long)]
        to: String,
        /// Device ids to move
        #[arg(long = "device", required = true)]
        devices: Vec<String>,
    },
}

/// Execute license commands
pub async fn execute(args: &LicenseArgs, console: &Console, format: OutputFormat) -> Result<(), AppError> {
    console.enter(super::client::DASHBOARD_PATH)?;

    match &args.command {
        LicenseCommand::Download { id, out } => {
            let path = console.licenses.download_to(id, out).await?;
            output::print_success(&format!("License saved to {}", path.display()));
        }
        LicenseCommand::Activate { code, out, files } => {
            let path = console.licenses.activate_files(code, files, out).await?;
            output::print_success(&format!("Licenses saved to {}", path.display()));
        }
        LicenseCommand::Transfer { from, to, devices } => {
            let result = console.licenses.transfer(from, to, devices).await?;
            output::print_success(&format!("Transferred {} device(s)", devices.len()));
            output::print_value("Result", &result, format);
        }
    }
    Ok(())
}

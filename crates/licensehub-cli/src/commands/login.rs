//! Login commands.

use clap::{Args, Subcommand};

use licensehub_auth::SessionRecord;
use licensehub_core::error::AppError;

use crate::console::Console;
use crate::output::{self, OutputFormat};

/// Arguments for login commands
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Login subcommand
    #[command(subcommand)]
    pub command: LoginCommand,
}

/// Login subcommands
#[derive(Debug, Subcommand)]
pub enum LoginCommand {
    /// Log in with a customer authorization code
    Client {
        /// Authorization code (will prompt if not provided)
        #[arg(long)]
        code: Option<String>,
        /// Captcha token
        #[arg(long)]
        captcha: Option<String>,
    },
    /// Log in as an administrator
    Admin {
        /// Username (will prompt if not provided)
        #[arg(short, long)]
        username: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
        /// TOTP code, if the account has one
        #[arg(long)]
        totp: Option<String>,
    },
}

/// Execute login commands
pub async fn execute(args: &LoginArgs, console: &Console, format: OutputFormat) -> Result<(), AppError> {
    let (record, landing) = match &args.command {
        LoginCommand::Client { code, captcha } => {
            let code = super::prompt_text(code, "Authorization code", false)?;
            let captcha = super::prompt_text(captcha, "Captcha token", true)?;
            let record = console.auth.client_login(&code, &captcha).await?;
            (record, "/client/dashboard")
        }
        LoginCommand::Admin {
            username,
            password,
            totp,
        } => {
            let username = super::prompt_text(username, "Admin username", false)?;
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Admin password")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };
            let totp = super::prompt_text(totp, "TOTP code (press Enter to skip)", true)?;
            let record = console.auth.admin_login(&username, &password, &totp).await?;
            (record, "/admin/dashboard")
        }
    };

    let path = console.enter(landing)?;
    print_session(&record, &path, format);
    Ok(())
}

fn print_session(record: &SessionRecord, path: &str, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            output::print_kv("Role", &record.role.to_string());
            output::print_kv("Console", path);
        }
        OutputFormat::Json => output::print_value(
            "Session",
            &serde_json::json!({ "role": record.role, "user_info": record.user_info, "path": path }),
            format,
        ),
    }
}

//! LicenseHub console entry point.
//!
//! Parses the command line, loads configuration, initializes logging and
//! dispatches the command.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use licensehub_cli::Cli;
use licensehub_core::config::AppConfig;
use licensehub_core::error::AppError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = cli.execute(&config).await {
        tracing::debug!(kind = %e.kind, "Command failed");
        eprintln!("Error: {}", e.message);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration(cli: &Cli) -> Result<AppConfig, AppError> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| "config/default.toml".to_string());

    AppConfig::load(&config_path)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

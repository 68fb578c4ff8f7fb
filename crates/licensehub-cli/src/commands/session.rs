//! Session and navigation commands.

use serde::Serialize;
use tabled::Tabled;

use licensehub_auth::{GuardDecision, RouteGuard};
use licensehub_core::error::AppError;

use crate::console::Console;
use crate::output::{self, OutputFormat};

/// A row of the `routes` listing.
#[derive(Debug, Serialize, Tabled)]
pub struct RouteRow {
    /// Route path.
    pub path: String,
    /// Route name.
    pub name: String,
    /// Who may open it.
    pub access: String,
    /// Guard outcome for the current session.
    pub decision: String,
}

/// `logout`
pub async fn logout(console: &Console) -> Result<(), AppError> {
    console.auth.logout().await
}

/// `status`
pub fn status(console: &Console, format: OutputFormat) -> Result<(), AppError> {
    let authenticated = console.session.check_auth();
    let record = console.session.snapshot();

    match format {
        OutputFormat::Table => {
            output::print_kv("Authenticated", &authenticated.to_string());
            output::print_kv("Role", &record.role.to_string());
            if authenticated {
                output::print_value("User", &record.user_info, format);
            } else {
                output::print_warning("Not logged in");
            }
        }
        OutputFormat::Json => output::print_value(
            "Session",
            &serde_json::json!({
                "authenticated": authenticated,
                "role": record.role,
                "user_info": record.user_info,
            }),
            format,
        ),
    }
    Ok(())
}

/// `routes`
pub fn routes(console: &Console, format: OutputFormat) -> Result<(), AppError> {
    let rows: Vec<RouteRow> = console
        .guard
        .table()
        .routes()
        .iter()
        .map(|route| RouteRow {
            path: route.path.clone(),
            name: route.name.to_string(),
            access: match (route.meta.requires_auth, route.meta.role) {
                (false, _) => "public".to_string(),
                (true, Some(role)) => role.to_string(),
                (true, None) => "any session".to_string(),
            },
            decision: match route.redirect {
                Some(target) => format!("-> {target}"),
                None => match RouteGuard::evaluate(&route.meta, &console.session) {
                    GuardDecision::Allow => "allow".to_string(),
                    GuardDecision::Redirect(target) => format!("-> {target}"),
                },
            },
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}

/// `open PATH`
pub fn open(console: &Console, path: &str) -> Result<(), AppError> {
    let reached = console.enter(path)?;
    output::print_success(&format!("Opened {reached}"));
    Ok(())
}

/// `public-key`
pub async fn public_key(console: &Console, format: OutputFormat) -> Result<(), AppError> {
    let key = console.auth.public_key().await?;
    output::print_value("Public key", &key, format);
    Ok(())
}

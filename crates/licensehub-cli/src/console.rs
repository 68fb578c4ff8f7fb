//! Console context shared by every command.

use std::sync::Arc;

use tracing::{debug, info};

use licensehub_auth::{GuardDecision, RouteGuard, SessionState};
use licensehub_client::ApiClient;
use licensehub_client::api::{AdminApi, AuthApi, CustomerApi, LicenseApi};
use licensehub_core::config::AppConfig;
use licensehub_core::error::AppError;
use licensehub_core::result::AppResult;
use licensehub_core::traits::{CredentialStore, Navigator, Notifier};
use licensehub_service::{AuthService, LicenseService};
use licensehub_store::StoreManager;

use crate::terminal::{ConsoleNavigator, TerminalNotifier};

/// Everything a command needs, built once per invocation.
#[derive(Debug, Clone)]
pub struct Console {
    /// Session shared by the pipeline, the guard and the auth actions.
    pub session: Arc<SessionState>,
    /// Location owner.
    pub navigator: Arc<dyn Navigator>,
    /// Route guard over the console route table.
    pub guard: Arc<RouteGuard>,
    /// Auth actions.
    pub auth: AuthService,
    /// License file flows.
    pub licenses: LicenseService,
    /// Customer endpoints.
    pub customer: CustomerApi,
    /// Administrator endpoints.
    pub admin: AdminApi,
}

impl Console {
    /// Build the terminal console from configuration.
    pub fn open(config: &AppConfig) -> AppResult<Self> {
        let store = StoreManager::new(&config.storage)?;
        Self::assemble(
            config,
            Arc::new(store),
            Arc::new(TerminalNotifier),
            Arc::new(ConsoleNavigator::new()),
        )
    }

    /// Build a console from explicit collaborators. The session is seeded
    /// from `store`.
    pub fn assemble(
        config: &AppConfig,
        store: Arc<dyn CredentialStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> AppResult<Self> {
        let session = Arc::new(SessionState::restore(store)?);
        let client = Arc::new(ApiClient::new(
            &config.api,
            Arc::clone(&session),
            Arc::clone(&notifier),
            Arc::clone(&navigator),
        )?);

        debug!(base_url = %config.api.base_url, role = %session.role(), "Console ready");

        Ok(Self {
            auth: AuthService::new(AuthApi::new(Arc::clone(&client)), Arc::clone(&session), notifier),
            licenses: LicenseService::new(LicenseApi::new(Arc::clone(&client))),
            customer: CustomerApi::new(Arc::clone(&client)),
            admin: AdminApi::new(client),
            guard: Arc::new(RouteGuard::default()),
            session,
            navigator,
        })
    }

    /// Navigate to `path` through the route guard.
    ///
    /// Returns the path reached. A redirect is executed by the navigator
    /// and reported as an error so the command stops before calling the
    /// backend.
    pub fn enter(&self, path: &str) -> AppResult<String> {
        let check = self.guard.check(path, &self.session);

        match check.decision {
            GuardDecision::Allow => {
                self.navigator.arrive(&check.path);
                info!(path = %check.path, route = check.route.name, "Entered route");
                Ok(check.path)
            }
            decision @ GuardDecision::Redirect(_) => {
                let authenticated = self.session.check_auth();
                if let Some(intent) = decision.into_intent() {
                    self.navigator.navigate(&intent);
                }

                Err(if authenticated {
                    AppError::authorization(format!(
                        "'{}' is not available to a {} session",
                        check.path,
                        self.session.role()
                    ))
                } else {
                    AppError::authentication(format!("Log in to open '{}'", check.path))
                })
            }
        }
    }
}

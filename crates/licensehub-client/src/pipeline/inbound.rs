//! Inbound stage: failure classification and global reactions.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::StatusCode;
use tracing::{debug, info, warn};

use licensehub_auth::SessionState;
use licensehub_core::traits::Notifier;
use licensehub_core::types::navigation::login_path_for_location;
use licensehub_core::types::notice::messages;
use licensehub_core::types::{NavigationIntent, Notice};

use crate::failure::{HttpFailure, RequestError};

/// Result of running the inbound stage on a failed call.
#[derive(Debug)]
pub struct InboundOutcome {
    /// The failure to propagate, possibly upgraded to a structured one.
    pub error: RequestError,
    /// Navigation the console should perform, if any.
    pub navigation: Option<NavigationIntent>,
}

/// Classifies failed calls and performs the pipeline-level reactions.
///
/// Safe to run concurrently for any number of in-flight calls. A 401 always
/// clears the session; the expiry notice and redirect are raised once per
/// login epoch. The latch covers sequential 401s as well as concurrent ones:
/// after the first, nothing more is announced until the next `set_auth`.
#[derive(Debug)]
pub struct InboundStage {
    session: Arc<SessionState>,
    notifier: Arc<dyn Notifier>,
    /// Epoch whose expiry has already been announced.
    expired_epoch: AtomicU64,
}

impl InboundStage {
    /// Create the stage.
    pub fn new(session: Arc<SessionState>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            session,
            notifier,
            expired_epoch: AtomicU64::new(u64::MAX),
        }
    }

    /// Run the stage on a failure observed while the console shows
    /// `current_path`.
    pub fn handle(&self, error: RequestError, current_path: &str) -> InboundOutcome {
        let error = reclassify(error);
        let mut navigation = None;

        if let RequestError::Http(HttpFailure::Raw(raw)) = &error {
            debug!(
                status = raw.status.as_u16(),
                path = current_path,
                "Binary error body is not JSON, propagated unchanged"
            );
            return InboundOutcome { error, navigation };
        }

        match &error {
            RequestError::Http(failure) => {
                let status = failure.status();
                debug!(status = status.as_u16(), path = current_path, "Backend call failed");

                match status {
                    StatusCode::UNAUTHORIZED => navigation = self.expire(current_path),
                    StatusCode::FORBIDDEN => {}
                    StatusCode::NOT_FOUND => self.generic(failure, messages::NOT_FOUND),
                    StatusCode::INTERNAL_SERVER_ERROR => {
                        self.generic(failure, messages::SERVER_ERROR)
                    }
                    _ => {}
                }
            }
            RequestError::Timeout => {
                warn!(path = current_path, "Backend call timed out");
                self.notifier.notify(Notice::error(messages::TIMEOUT));
            }
            RequestError::Network(reason) => {
                warn!(path = current_path, %reason, "Backend unreachable");
                self.notifier.notify(Notice::error(messages::NETWORK));
            }
            RequestError::Decode(reason) | RequestError::Build(reason) => {
                warn!(path = current_path, %reason, "Backend call failed locally");
            }
        }

        InboundOutcome { error, navigation }
    }

    /// Force logout; announce and redirect once per login epoch, however
    /// many 401s arrive in it and whether they overlap or not.
    fn expire(&self, current_path: &str) -> Option<NavigationIntent> {
        if let Err(e) = self.session.clear_auth() {
            warn!(error = %e, "Failed to erase persisted session after 401");
        }

        let epoch = self.session.epoch();
        if self.expired_epoch.swap(epoch, Ordering::SeqCst) == epoch {
            debug!(epoch, "Session expiry already handled");
            return None;
        }

        let target = login_path_for_location(current_path);
        info!(epoch, login = target, "Session expired, redirecting to login");
        self.notifier.notify(Notice::error(messages::SESSION_EXPIRED));
        Some(NavigationIntent::HardRedirect(target.to_string()))
    }

    /// Generic notice unless the body carries a business message.
    fn generic(&self, failure: &HttpFailure, message: &str) {
        if !failure.has_business_error() {
            self.notifier.notify(Notice::error(message));
        }
    }
}

/// Upgrade a raw error body that holds a JSON document. A body that is not
/// JSON stays raw and skips the status reactions.
fn reclassify(error: RequestError) -> RequestError {
    match error {
        RequestError::Http(HttpFailure::Raw(raw)) if raw.status.as_u16() >= 400 => {
            match raw.decode() {
                Some(structured) => {
                    debug!(status = raw.status.as_u16(), "Binary error body decoded as JSON");
                    RequestError::Http(HttpFailure::Structured(structured))
                }
                None => RequestError::Http(HttpFailure::Raw(raw)),
            }
        }
        other => other,
    }
}

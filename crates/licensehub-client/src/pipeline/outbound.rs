//! Outbound stage: bearer credential attachment.

use std::sync::Arc;

use reqwest::RequestBuilder;

use licensehub_auth::SessionState;

/// Attaches the session token to outgoing requests.
#[derive(Debug, Clone)]
pub struct OutboundStage {
    session: Arc<SessionState>,
}

impl OutboundStage {
    /// Create the stage.
    pub fn new(session: Arc<SessionState>) -> Self {
        Self { session }
    }

    /// Add `Authorization: Bearer <token>` when a token is held.
    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self.session.token();
        if token.is_empty() {
            request
        } else {
            request.bearer_auth(token)
        }
    }
}

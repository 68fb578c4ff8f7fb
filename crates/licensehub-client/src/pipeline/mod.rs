//! Request pipeline wrapped around every backend call.
//!
//! The outbound stage runs before dispatch, the inbound stage after a
//! failure. Neither stage swallows a failure.

pub mod inbound;
pub mod outbound;

use std::sync::Arc;

use licensehub_auth::SessionState;
use licensehub_core::traits::Notifier;

pub use inbound::{InboundOutcome, InboundStage};
pub use outbound::OutboundStage;

/// Both stages, sharing one session.
#[derive(Debug)]
pub struct RequestPipeline {
    /// Credential attachment.
    pub outbound: OutboundStage,
    /// Failure classification and reactions.
    pub inbound: InboundStage,
}

impl RequestPipeline {
    /// Create a pipeline over the shared session.
    pub fn new(session: Arc<SessionState>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            outbound: OutboundStage::new(Arc::clone(&session)),
            inbound: InboundStage::new(session, notifier),
        }
    }
}

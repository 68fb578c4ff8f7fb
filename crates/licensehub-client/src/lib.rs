//! # licensehub-client
//!
//! HTTP access to the LicenseHub backend.
//!
//! Every call goes through the [`RequestPipeline`]: the outbound stage
//! attaches the session's bearer token, the inbound stage classifies
//! failures, reacts to expired sessions and raises the fixed transport
//! notices. Endpoint bindings in [`api`] are thin typed wrappers over
//! [`ApiClient`].

pub mod api;
pub mod failure;
pub mod http;
pub mod pipeline;

pub use failure::{HttpFailure, RawFailure, RequestError, StructuredFailure};
pub use http::{ApiClient, BinaryPayload, ResponseKind};
pub use pipeline::{InboundOutcome, InboundStage, OutboundStage, RequestPipeline};

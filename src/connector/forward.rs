//! The forwarding capability boundary.
//!
//! # Responsibilities
//! - Define the transport seam the script calls into
//! - Carry transport failures to the caller untranslated
//!
//! # Design Decisions
//! - Trait object: the host injects the real transport, tests inject doubles
//! - Errors are the transport's own taxonomy; the script adds no kinds of its own
//! - Implementations must observe the cancellation signal while a call is pending

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use thiserror::Error;

use crate::connector::cancel::CancelSignal;

/// Failures a forwarding capability can produce.
///
/// The script surfaces these unchanged; mapping them to client-visible
/// responses is the host's job.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// The upstream could not be reached (connection refused, DNS failure, reset).
    #[error("upstream connection failed: {0}")]
    Connect(String),

    /// The upstream did not answer within the transport's deadline.
    #[error("upstream request timed out after {0} seconds")]
    Timeout(u64),

    /// The cancellation signal fired while the call was pending.
    #[error("call cancelled while awaiting the upstream response")]
    Cancelled,

    /// The request could not be forwarded as given.
    #[error("request could not be forwarded: {0}")]
    InvalidRequest(String),
}

/// Host-provided capability that sends a request to the backend service and
/// yields its response.
#[async_trait]
pub trait Forward: Send + Sync {
    /// Send `request` to the backend and return its response.
    ///
    /// Must resolve with [`ForwardError::Cancelled`] if `cancel` fires before
    /// the upstream answers.
    async fn send(
        &self,
        request: Request<Body>,
        cancel: CancelSignal,
    ) -> Result<Response<Body>, ForwardError>;
}

//! Per-call execution context.
//!
//! # Responsibilities
//! - Bundle everything one invocation needs: operation id, inbound request,
//!   cancellation signal, forwarding capability
//! - Guarantee the capability is invoked at most once per call
//!
//! # Design Decisions
//! - An explicit struct handed to the script, never ambient state, so the
//!   script is testable with a fake capability
//! - `forward` consumes the context: the request leaves exactly as it arrived
//! - Created by the host per call, discarded with the response

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};

use crate::connector::cancel::CancelSignal;
use crate::connector::forward::{Forward, ForwardError};

/// Everything the host supplies for a single invocation of the script.
pub struct ExecutionContext {
    operation_id: String,
    request: Request<Body>,
    cancel: CancelSignal,
    forwarder: Arc<dyn Forward>,
}

impl ExecutionContext {
    /// Assemble the context for one call.
    pub fn new(
        operation_id: impl Into<String>,
        request: Request<Body>,
        cancel: CancelSignal,
        forwarder: Arc<dyn Forward>,
    ) -> Self {
        Self {
            operation_id: operation_id.into(),
            request,
            cancel,
            forwarder,
        }
    }

    /// Operation id of this call.
    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }

    /// The inbound request, untouched.
    pub fn request(&self) -> &Request<Body> {
        &self.request
    }

    /// Send the inbound request to the backend and yield its response.
    ///
    /// Consumes the context, so a single invocation forwards at most once,
    /// and the request goes out exactly as it came in.
    pub async fn forward(self) -> Result<Response<Body>, ForwardError> {
        let Self {
            request,
            cancel,
            forwarder,
            ..
        } = self;
        forwarder.send(request, cancel).await
    }
}

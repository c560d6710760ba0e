//! HTTP server embedding the connector script.
//!
//! # Responsibilities
//! - Stand in for the connector platform during local development
//! - Read the operation id and hand each call to the script
//! - Derive per-call cancellation from the server drain signal
//! - Map forwarding failures to client-visible responses
//!
//! # Design Decisions
//! - Catch-all routes: the script sees every request, side doors would skew
//!   pass-through behavior
//! - The script receives the request exactly as delivered (plus the request
//!   id stamped by the layer below)
//! - Error mapping lives here, not in the script: 502 connect, 504 timeout

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ConnectorConfig;
use crate::connector::{CancelSignal, ExecutionContext, Forward, ForwardError, Script};
use crate::http::request::{RequestIdLayer, X_REQUEST_ID};
use crate::http::upstream::UpstreamForwarder;

/// Header the host reads to tag each call with its operation id.
///
/// A missing header is treated as the empty string, which takes the default
/// path through the script.
pub const X_OPERATION_ID: &str = "x-operation-id";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    script: Script,
    forwarder: Arc<dyn Forward>,
    drain: CancelSignal,
}

/// HTTP server hosting the connector script.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Wire the script, its upstream transport, and the middleware stack.
    ///
    /// `drain` should come from the host's shutdown coordinator; it cancels
    /// in-flight upstream calls when the server stops.
    pub fn new(config: &ConnectorConfig, drain: CancelSignal) -> Self {
        let script = Script::new();
        script.on_init();

        let forwarder: Arc<dyn Forward> = Arc::new(UpstreamForwarder::new(&config.upstream));
        let state = AppState {
            script,
            forwarder,
            drain,
        };

        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the axum router: one catch-all route behind request-id and
    /// tracing layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(operation_handler))
            .route("/", any(operation_handler))
            .with_state(state)
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Serve until the shutdown signal fires. In-flight calls observe the
    /// same signal and finish by cancellation.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: CancelSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Connector host listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await?;

        tracing::info!("Connector host stopped");
        Ok(())
    }
}

/// Funnel every inbound call through the connector script.
async fn operation_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let operation_id = request
        .headers()
        .get(X_OPERATION_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    tracing::debug!(
        request_id = %request_id,
        operation = %operation_id,
        method = %request.method(),
        path = %request.uri().path(),
        "Dispatching call to the connector script"
    );

    let ctx = ExecutionContext::new(
        operation_id,
        request,
        state.drain.clone(),
        Arc::clone(&state.forwarder),
    );

    match state.script.execute(ctx).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Call failed");
            error_response(&e, &request_id)
        }
    }
}

/// Map a forwarding failure to a client-visible response.
fn error_response(error: &ForwardError, request_id: &str) -> Response {
    let status = match error {
        ForwardError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        ForwardError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        ForwardError::Connect(_) | ForwardError::Cancelled => StatusCode::BAD_GATEWAY,
    };

    (
        status,
        axum::Json(serde_json::json!({
            "error": error.to_string(),
            "request_id": request_id,
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwarding_failures_map_to_gateway_statuses() {
        assert_eq!(
            error_response(&ForwardError::Connect("refused".into()), "r1").status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            error_response(&ForwardError::Timeout(30), "r1").status(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            error_response(&ForwardError::Cancelled, "r1").status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            error_response(&ForwardError::InvalidRequest("bad".into()), "r1").status(),
            StatusCode::BAD_REQUEST
        );
    }
}

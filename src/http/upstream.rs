//! Upstream forwarding transport.
//!
//! # Responsibilities
//! - Implement the forwarding capability against the real Apify API
//! - Rewrite only scheme and authority; method, path, query, headers and
//!   body travel untouched
//! - Observe cancellation and the configured request deadline
//!
//! # Design Decisions
//! - reqwest client: pooled connections and TLS to the public API
//! - Cancellation races the pending call in a select; the losing future drops,
//!   abandoning the upstream request
//! - Failures map onto the capability's taxonomy, nothing else

use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response};

use crate::config::UpstreamConfig;
use crate::connector::cancel::CancelSignal;
use crate::connector::forward::{Forward, ForwardError};

/// Production forwarding capability: sends requests to the configured
/// upstream over pooled HTTP connections.
pub struct UpstreamForwarder {
    client: reqwest::Client,
    base_url: String,
    request_timeout: Duration,
}

impl UpstreamForwarder {
    /// Build a forwarder from validated upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    fn upstream_url(&self, request: &Request<Body>) -> String {
        let path_and_query = request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        format!("{}{}", self.base_url, path_and_query)
    }
}

#[async_trait]
impl Forward for UpstreamForwarder {
    async fn send(
        &self,
        request: Request<Body>,
        mut cancel: CancelSignal,
    ) -> Result<Response<Body>, ForwardError> {
        let url = self.upstream_url(&request);
        let (parts, body) = request.into_parts();

        let body_bytes = axum::body::to_bytes(body, usize::MAX)
            .await
            .map_err(|e| ForwardError::InvalidRequest(format!("failed to read request body: {e}")))?;

        let mut builder = self.client.request(parts.method, &url);
        for (name, value) in parts.headers.iter() {
            // The Host header belongs to the upstream authority.
            if name != header::HOST {
                builder = builder.header(name, value);
            }
        }
        let pending = builder
            .timeout(self.request_timeout)
            .body(body_bytes)
            .send();

        let upstream_resp = tokio::select! {
            result = pending => match result {
                Ok(resp) => resp,
                Err(err) if err.is_timeout() => {
                    return Err(ForwardError::Timeout(self.request_timeout.as_secs()));
                }
                Err(err) => return Err(ForwardError::Connect(err.to_string())),
            },
            _ = cancel.cancelled() => {
                tracing::debug!(url = %url, "Upstream call abandoned: cancelled");
                return Err(ForwardError::Cancelled);
            }
        };

        let mut response = Response::builder().status(upstream_resp.status());
        for (name, value) in upstream_resp.headers() {
            response = response.header(name, value);
        }
        let bytes = upstream_resp
            .bytes()
            .await
            .map_err(|e| ForwardError::Connect(format!("failed to read upstream response: {e}")))?;

        response
            .body(Body::from(bytes))
            .map_err(|e| ForwardError::InvalidRequest(format!("failed to assemble response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpstreamConfig;

    fn forwarder_for(base_url: &str) -> UpstreamForwarder {
        UpstreamForwarder::new(&UpstreamConfig {
            base_url: base_url.to_string(),
            request_timeout_secs: 5,
        })
    }

    #[test]
    fn keeps_path_and_query_on_the_new_authority() {
        let forwarder = forwarder_for("http://127.0.0.1:9000");
        let request = Request::builder()
            .uri("/v2/acts/me~actor/runs?wait=60")
            .body(Body::empty())
            .unwrap();

        assert_eq!(
            forwarder.upstream_url(&request),
            "http://127.0.0.1:9000/v2/acts/me~actor/runs?wait=60"
        );
    }

    #[test]
    fn trailing_slash_on_base_url_does_not_double_up() {
        let forwarder = forwarder_for("http://127.0.0.1:9000/");
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

        assert_eq!(
            forwarder.upstream_url(&request),
            "http://127.0.0.1:9000/health"
        );
    }
}

//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address and the upstream URL are usable
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ConnectorConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the host

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::ConnectorConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `listener.bind_address` does not parse as a socket address.
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    /// `upstream.base_url` is not an absolute http(s) URL.
    #[error("upstream.base_url {0:?} is not an absolute http(s) URL")]
    InvalidUpstreamUrl(String),

    /// `upstream.base_url` carries more than scheme and authority.
    #[error("upstream.base_url must not carry a path, query, or fragment (got {0:?})")]
    UpstreamUrlNotBare(String),

    /// `upstream.request_timeout_secs` is zero.
    #[error("upstream.request_timeout_secs must be greater than zero")]
    ZeroRequestTimeout,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ConnectorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) => {
            if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
                errors.push(ValidationError::InvalidUpstreamUrl(
                    config.upstream.base_url.clone(),
                ));
            } else if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
                errors.push(ValidationError::UpstreamUrlNotBare(
                    config.upstream.base_url.clone(),
                ));
            }
        }
        Err(_) => {
            errors.push(ValidationError::InvalidUpstreamUrl(
                config.upstream.base_url.clone(),
            ));
        }
    }

    if config.upstream.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

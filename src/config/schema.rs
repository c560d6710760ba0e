//! Configuration schema definitions.
//!
//! This module defines the configuration structure for the connector host.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the connector host.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ConnectorConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream Apify API settings.
    pub upstream: UpstreamConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Upstream configuration: where forwarded requests go.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the upstream API. Scheme and authority only; each
    /// forwarded request keeps its own path and query.
    pub base_url: String,

    /// Total time allowed for one upstream request/response, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.apify.com".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_public_api() {
        let config = ConnectorConfig::default();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
        assert_eq!(config.upstream.base_url, "https://api.apify.com");
        assert_eq!(config.upstream.request_timeout_secs, 30);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: ConnectorConfig = toml::from_str(
            r#"
            [upstream]
            base_url = "http://localhost:9000"
            "#,
        )
        .unwrap();

        assert_eq!(config.upstream.base_url, "http://localhost:9000");
        assert_eq!(config.upstream.request_timeout_secs, 30);
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
    }
}

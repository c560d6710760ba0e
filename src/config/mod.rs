//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! TOML file (optional)
//!     → loader.rs     (read + parse)
//!     → validation.rs (semantic checks, all errors collected)
//!     → schema.rs     (typed ConnectorConfig, defaults for anything omitted)
//!     → injected into the host at startup
//! ```
//!
//! # Design Decisions
//! - The script itself is configuration-free; everything here is host-side
//! - Missing keys fall back to defaults
//! - Validation is a pure function and reports every problem, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ConnectorConfig, ListenerConfig, ObservabilityConfig, UpstreamConfig};
pub use validation::{validate_config, ValidationError};

//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging through `tracing`; every call carries request_id and
//!   operation fields
//! - Log level comes from config, with `RUST_LOG` taking precedence

pub mod logging;

pub use logging::init_logging;

//! Pass-through custom-code shell for the Apify connector.
//!
//! The crate has one job: receive an operation-tagged HTTP request, dispatch
//! on the operation id, and forward the request to the Apify API unchanged,
//! returning the API's response unchanged. The five recognized operations
//! (`RunActor`, `RunTask`, `GetDatasetItems`, `GetKeyValueStoreRecord`,
//! `ScrapeSingleUrl`) each have a named handler reserved for future custom
//! logic; today every path, including the default for unrecognized ids, is
//! the same verbatim pass-through.
//!
//! # Architecture Overview
//!
//! ```text
//!  Client ──▶ http::server ──▶ connector::script ──▶ http::upstream ──▶ Apify API
//!                 │                    │                     │
//!           x-request-id        dispatch on the       scheme/authority
//!           x-operation-id      operation id          rewrite only
//!
//!  Cross-cutting: config (host-injected settings), lifecycle (shutdown →
//!  per-call cancellation), observability (structured tracing)
//! ```

// Core subsystems
pub mod config;
pub mod connector;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::{load_config, ConnectorConfig};
pub use connector::{ExecutionContext, Script};
pub use http::HttpServer;
pub use lifecycle::Shutdown;

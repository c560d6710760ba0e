//! HTTP hosting subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → request.rs  (stamp x-request-id if absent)
//!     → server.rs   (read x-operation-id, build the ExecutionContext)
//!     → Script::execute (dispatch + pass-through)
//!     → upstream.rs (send to the Apify API, honoring cancellation)
//!     → Response returned to the client unchanged
//! ```
//!
//! # Design Decisions
//! - Catch-all routing: every request goes through the script, no side doors
//! - Error mapping to HTTP statuses happens here, never inside the script

pub mod request;
pub mod server;
pub mod upstream;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::{HttpServer, X_OPERATION_ID};
pub use upstream::UpstreamForwarder;

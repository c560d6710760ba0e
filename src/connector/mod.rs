//! Connector script subsystem: operation dispatch and verbatim forwarding.
//!
//! # Data Flow
//! ```text
//! Host delivers a call
//!     → context.rs    (operation id + request + cancel + forward, bundled per call)
//!     → script.rs     (dispatch on the operation id, fixed set + default)
//!     → forward.rs    (capability sends the request to the backend)
//!     → Response returned to the host unchanged
//! ```
//!
//! # Design Decisions
//! - The script never inspects or mutates the request or the response
//! - The forwarding capability is the only failure source; no local recovery
//! - One forward per invocation, enforced by a consuming call
//! - No state survives an invocation, so concurrent calls need no coordination

pub mod cancel;
pub mod context;
pub mod forward;
pub mod operations;
pub mod script;

pub use cancel::{CancelHandle, CancelSignal};
pub use context::ExecutionContext;
pub use forward::{Forward, ForwardError};
pub use operations::Operation;
pub use script::Script;

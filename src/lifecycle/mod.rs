//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Construct script (on_init once) → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → In-flight forwards cancelled → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM / Ctrl-C → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Shutdown subscriptions are the same cancellation signal the execution
//!   context carries, so stopping the host abandons in-flight upstream calls
//! - Startup is ordered: config first, then the script, listener last

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::wait_for_signal;

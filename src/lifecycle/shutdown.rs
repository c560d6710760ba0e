//! Shutdown coordination for the connector host.

use crate::connector::cancel::{CancelHandle, CancelSignal};

/// Coordinator for graceful shutdown.
///
/// Hands out [`CancelSignal`] subscriptions. Triggering shutdown fires every
/// subscription at once, which both stops the server accepting and cancels
/// in-flight upstream calls.
pub struct Shutdown {
    handle: CancelHandle,
    signal: CancelSignal,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (handle, signal) = CancelHandle::new();
        Self { handle, signal }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> CancelSignal {
        self.signal.clone()
    }

    /// Trigger shutdown. Idempotent.
    pub fn trigger(&self) {
        self.handle.cancel();
    }

    /// Whether shutdown has been triggered.
    pub fn is_triggered(&self) -> bool {
        self.signal.is_cancelled()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn trigger_reaches_every_subscriber() {
        let shutdown = Shutdown::new();
        let mut first = shutdown.subscribe();
        let mut second = shutdown.subscribe();

        assert!(!shutdown.is_triggered());
        shutdown.trigger();
        assert!(shutdown.is_triggered());

        timeout(Duration::from_millis(100), first.cancelled())
            .await
            .expect("first subscriber should observe shutdown");
        timeout(Duration::from_millis(100), second.cancelled())
            .await
            .expect("second subscriber should observe shutdown");
    }
}

//! Per-call cancellation signal.
//!
//! # Responsibilities
//! - Let the host abandon an in-flight forward
//! - Give the forwarding capability a signal to await alongside the upstream call
//!
//! # Design Decisions
//! - watch channel underneath: fired at most once, observed by any number of clones
//! - Dropping the handle without cancelling never fires the signal
//! - A fired signal stays fired

use tokio::sync::watch;

/// Sender half of a cancellation pair. Held by the host.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

/// Receiver half of a cancellation pair. Carried by the execution context
/// into the forward call.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

impl CancelHandle {
    /// Create a connected handle/signal pair.
    pub fn new() -> (CancelHandle, CancelSignal) {
        let (tx, rx) = watch::channel(false);
        (CancelHandle { tx }, CancelSignal { rx })
    }

    /// Fire the signal. Idempotent.
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

impl CancelSignal {
    /// Whether the signal has fired.
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once the signal fires.
    ///
    /// An abandoned handle is not a cancellation: if the sender is dropped
    /// without firing, this never resolves.
    pub async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                // Sender gone without cancelling; stay pending.
                std::future::pending::<()>().await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn signal_fires_after_cancel() {
        let (handle, mut signal) = CancelHandle::new();
        assert!(!signal.is_cancelled());

        handle.cancel();
        assert!(signal.is_cancelled());
        timeout(Duration::from_millis(100), signal.cancelled())
            .await
            .expect("signal should fire after cancel");
    }

    #[tokio::test]
    async fn dropped_handle_is_not_a_cancellation() {
        let (handle, mut signal) = CancelHandle::new();
        drop(handle);

        assert!(!signal.is_cancelled());
        assert!(
            timeout(Duration::from_millis(50), signal.cancelled())
                .await
                .is_err(),
            "signal must stay pending when the handle is dropped unfired"
        );
    }

    #[tokio::test]
    async fn clones_observe_the_same_signal() {
        let (handle, signal) = CancelHandle::new();
        let mut cloned = signal.clone();

        handle.cancel();
        timeout(Duration::from_millis(100), cloned.cancelled())
            .await
            .expect("cloned signal should observe the cancellation");
    }

    #[tokio::test]
    async fn cancel_is_idempotent() {
        let (handle, mut signal) = CancelHandle::new();
        handle.cancel();
        handle.cancel();
        timeout(Duration::from_millis(100), signal.cancelled())
            .await
            .expect("signal should still resolve");
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Cooperative cancellation for workers.
//!
//! The registry keeps the [`CancelHandle`]; the worker keeps the matching
//! [`CancelSignal`] and observes it only while suspended: inside a pool wait
//! or during its cadence sleep. A pool mutation in progress is never
//! interrupted.

use std::time::Duration;
use tokio::sync::watch;

/// Creates a connected handle/signal pair.
///
/// # Examples
///
/// ```
/// use ticketpool_rs::worker::cancellation;
///
/// let (handle, signal) = cancellation();
/// assert!(!signal.is_cancelled());
/// handle.cancel();
/// assert!(signal.is_cancelled());
/// ```
#[must_use]
pub fn cancellation() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelSignal { rx })
}

/// Sending side of a cancellation pair.
///
/// Dropping the handle cancels the worker as well.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Signals cancellation. Idempotent and non-blocking.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

/// Receiving side of a cancellation pair.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

impl CancelSignal {
    /// Returns `true` if cancellation was requested or the handle is gone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }

    /// Resolves once cancellation is requested or the handle is dropped.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        // Err means the handle was dropped, which counts as cancellation.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }

    /// Sleeps for `duration` unless cancelled first.
    ///
    /// # Errors
    ///
    /// Returns [`Cancelled`] if the signal fires before the sleep elapses.
    pub async fn sleep(&self, duration: Duration) -> Result<(), Cancelled> {
        tokio::select! {
            biased;
            () = self.cancelled() => Err(Cancelled),
            () = tokio::time::sleep(duration) => Ok(()),
        }
    }
}

/// Outcome of a wait that was abandoned because the worker was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "worker was cancelled")
    }
}

impl std::error::Error for Cancelled {}

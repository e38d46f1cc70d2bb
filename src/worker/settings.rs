/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Worker kinds, exit states and run parameters.

use crate::error::{MarketError, ensure_positive};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The two worker variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkerKind {
    /// Producer releasing tickets into the pool.
    Vendor,
    /// Consumer buying tickets from the pool.
    Customer,
}

impl WorkerKind {
    /// Prefix used for worker identities (`Vendor-1`, `Customer-3`, ...).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Vendor => "Vendor",
            Self::Customer => "Customer",
        }
    }
}

impl std::fmt::Display for WorkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vendor => write!(f, "vendor"),
            Self::Customer => write!(f, "customer"),
        }
    }
}

/// How a worker's run loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerExit {
    /// The pool is sold out (vendors: supply exhausted, customers: all sold).
    SoldOut,

    /// The worker observed its cancellation signal.
    Cancelled,

    /// The worker task panicked or was aborted by the runtime.
    Failed,
}

impl WorkerExit {
    /// Returns `true` if the worker stopped because it was told to.
    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Cadence and batch size shared by both worker kinds.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use ticketpool_rs::worker::WorkerSettings;
///
/// let settings = WorkerSettings::new(250, 3).unwrap();
/// assert_eq!(settings.cadence(), Duration::from_millis(250));
/// assert!(WorkerSettings::new(0, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerSettings {
    cadence: Duration,
    batch_size: usize,
}

impl WorkerSettings {
    /// Validates and builds worker settings.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidParameter`] if either value is zero.
    pub fn new(cadence_ms: u64, batch_size: usize) -> Result<Self, MarketError> {
        ensure_positive("cadence_ms", cadence_ms)?;
        ensure_positive("batch_size", batch_size as u64)?;
        Ok(Self {
            cadence: Duration::from_millis(cadence_ms),
            batch_size,
        })
    }

    /// Delay between two actions.
    #[must_use]
    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    /// Units attempted per action.
    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

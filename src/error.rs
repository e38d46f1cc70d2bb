/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types surfaced to callers of the marketplace.
//!
//! Running out of tickets is not an error: it shows up as a `0` admitted
//! count or a `None` ticket. Only parameter validation, worker spawning and
//! the configuration document produce a [`MarketError`].

use crate::worker::WorkerKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by configuration, validation and spawn operations.
#[derive(Debug, Error)]
pub enum MarketError {
    /// A parameter was rejected before any state was touched.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Human-readable reason for the rejection.
        reason: String,
    },

    /// No async runtime is reachable from the caller, so no worker can run.
    #[error("cannot spawn {kind} worker: no tokio runtime is available")]
    RuntimeUnavailable {
        /// Kind of worker that was requested.
        kind: WorkerKind,
    },

    /// Reading or writing the configuration document failed.
    #[error("configuration I/O failed for {}: {source}", .path.display())]
    ConfigIo {
        /// File that was being read or written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is not valid JSON for [`SimulationConfig`].
    ///
    /// [`SimulationConfig`]: crate::config::SimulationConfig
    #[error("malformed configuration: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}

impl MarketError {
    /// Shorthand for [`MarketError::InvalidParameter`].
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a parameter validation failure.
    #[inline]
    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

/// Rejects zero for a parameter that must be strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: u64) -> Result<(), MarketError> {
    if value == 0 {
        return Err(MarketError::invalid(name, "must be greater than zero"));
    }
    Ok(())
}

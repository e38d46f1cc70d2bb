/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Persisted simulation configuration.
//!
//! The configuration document carries the four numbers an operator sets up
//! a run with. It is stored as JSON with camel-case keys:
//!
//! ```json
//! {
//!   "totalTickets": 500,
//!   "ticketReleaseRate": 1000,
//!   "customerRetrievalRate": 1500,
//!   "maxTicketCapacity": 50
//! }
//! ```
//!
//! Rates are cadences in milliseconds.

use crate::error::{MarketError, ensure_positive};
use crate::worker::WorkerSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Operator-facing parameters of one simulation run.
///
/// # Examples
///
/// ```
/// use ticketpool_rs::SimulationConfig;
///
/// let config = SimulationConfig::from_json(
///     r#"{"totalTickets":20,"ticketReleaseRate":10,"customerRetrievalRate":15,"maxTicketCapacity":5}"#,
/// ).unwrap();
/// assert_eq!(config.max_ticket_capacity, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    /// Lifetime ticket supply.
    pub total_tickets: usize,

    /// Vendor cadence in milliseconds.
    pub ticket_release_rate: u64,

    /// Customer cadence in milliseconds.
    pub customer_retrieval_rate: u64,

    /// Maximum number of tickets resident in the pool.
    pub max_ticket_capacity: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            total_tickets: 500,
            ticket_release_rate: 1000,
            customer_retrieval_rate: 1000,
            max_ticket_capacity: 50,
        }
    }
}

impl SimulationConfig {
    /// Checks that rates and capacity are positive.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidParameter`] naming the first bad field.
    pub fn validate(&self) -> Result<(), MarketError> {
        ensure_positive("ticket_release_rate", self.ticket_release_rate)?;
        ensure_positive("customer_retrieval_rate", self.customer_retrieval_rate)?;
        ensure_positive("max_ticket_capacity", self.max_ticket_capacity as u64)?;
        Ok(())
    }

    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::ConfigFormat`] for malformed JSON and
    /// [`MarketError::InvalidParameter`] for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, MarketError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::ConfigFormat`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, MarketError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads and validates a document from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::ConfigIo`] if the file cannot be read, plus
    /// the errors of [`from_json`](Self::from_json).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MarketError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| MarketError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Validates and writes the document to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidParameter`] for an invalid document and
    /// [`MarketError::ConfigIo`] if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), MarketError> {
        self.validate()?;
        let path = path.as_ref();
        fs::write(path, self.to_json()?).map_err(|source| MarketError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Vendor settings using the configured release rate.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidParameter`] if the rate or
    /// `tickets_per_release` is zero.
    pub fn vendor_settings(&self, tickets_per_release: usize) -> Result<WorkerSettings, MarketError> {
        WorkerSettings::new(self.ticket_release_rate, tickets_per_release)
    }

    /// Customer settings using the configured retrieval rate.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidParameter`] if the rate or
    /// `tickets_per_purchase` is zero.
    pub fn customer_settings(
        &self,
        tickets_per_purchase: usize,
    ) -> Result<WorkerSettings, MarketError> {
        WorkerSettings::new(self.customer_retrieval_rate, tickets_per_purchase)
    }
}

impl std::fmt::Display for SimulationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration [totalTickets={}, ticketReleaseRate={}, customerRetrievalRate={}, maxTicketCapacity={}]",
            self.total_tickets,
            self.ticket_release_rate,
            self.customer_retrieval_rate,
            self.max_ticket_capacity
        )
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Marketplace facade.
//!
//! [`Marketplace`] is the single entry point a transport or CLI layer talks
//! to. It owns the live [`TicketPool`] and the [`WorkerRegistry`] of the
//! current run, validates every parameter before touching either, and
//! replaces both wholesale on reconfiguration.
//!
//! # Examples
//!
//! ```
//! use ticketpool_rs::Marketplace;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let market = Marketplace::new(10, 3)?;
//!
//! let added = market
//!     .add_tickets("Vendor-1", "Event-1", "Music Concert", 100.0, "VIP", 5)
//!     .await?;
//! assert_eq!(added, 3);
//! assert_eq!(market.status().to_string(), "Tickets Remaining: 3");
//!
//! let ticket = market.remove_ticket("Customer-1").await;
//! assert_eq!(ticket.map(|t| t.vendor_id().to_owned()), Some("Vendor-1".into()));
//! # Ok(())
//! # }
//! ```

use crate::config::SimulationConfig;
use crate::error::MarketError;
use crate::log::LogSink;
use crate::pool::{PoolStatus, TicketPool};
use crate::registry::WorkerRegistry;
use crate::ticket::{EventListing, Ticket};
use crate::worker::{WorkerExit, WorkerKind, WorkerSettings};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// One simulation: a live pool plus the workers acting on it.
pub struct Marketplace {
    pool: RwLock<Arc<TicketPool>>,
    registry: Mutex<WorkerRegistry>,
    sinks: Vec<Arc<dyn LogSink>>,
}

impl Marketplace {
    /// Creates a marketplace with an empty pool and no workers.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidParameter`] if `capacity` is zero.
    pub fn new(total_supply: usize, capacity: usize) -> Result<Self, MarketError> {
        Self::with_sinks(total_supply, capacity, Vec::new())
    }

    /// Creates a marketplace whose pool logs (current and future ones) are
    /// mirrored to `sinks`.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidParameter`] if `capacity` is zero.
    pub fn with_sinks(
        total_supply: usize,
        capacity: usize,
        sinks: Vec<Arc<dyn LogSink>>,
    ) -> Result<Self, MarketError> {
        let pool = TicketPool::with_sinks(total_supply, capacity, sinks.clone())?;
        Ok(Self {
            pool: RwLock::new(Arc::new(pool)),
            registry: Mutex::new(WorkerRegistry::new()),
            sinks,
        })
    }

    /// Creates a marketplace sized by a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidParameter`] if the document is invalid.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, MarketError> {
        config.validate()?;
        Self::new(config.total_tickets, config.max_ticket_capacity)
    }

    /// Replaces the live pool with a fresh, empty one.
    ///
    /// Parameters are validated first; on error nothing changes. Otherwise
    /// every worker of the previous run is stopped, then the pool (stock and
    /// log) and the worker identities start over. The previous pool is
    /// closed, so callers still waiting on it return `0` or `None`.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidParameter`] if `capacity` is zero.
    pub async fn configure(&self, total_supply: usize, capacity: usize) -> Result<(), MarketError> {
        let fresh = Arc::new(TicketPool::with_sinks(
            total_supply,
            capacity,
            self.sinks.clone(),
        )?);

        let mut registry = self.registry.lock().await;
        registry.stop_all(WorkerKind::Vendor).await;
        registry.stop_all(WorkerKind::Customer).await;
        *registry = WorkerRegistry::new();
        let retired = std::mem::replace(&mut *self.pool.write(), fresh);
        retired.close();

        info!(total_supply, capacity, "ticket pool configured");
        Ok(())
    }

    /// The live pool.
    #[must_use]
    pub fn pool(&self) -> Arc<TicketPool> {
        self.pool.read().clone()
    }

    /// Releases up to `count` tickets on behalf of `vendor_id`.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidParameter`] for a negative or
    /// non-finite `price`. Nothing is admitted in that case.
    pub async fn add_tickets(
        &self,
        vendor_id: &str,
        event_id: &str,
        event_name: &str,
        price: f64,
        category: &str,
        count: usize,
    ) -> Result<usize, MarketError> {
        let listing = EventListing::new(event_id, event_name, price, category)?;
        let pool = self.pool();
        Ok(pool.add_tickets(vendor_id, &listing, count).await)
    }

    /// Sells one ticket to `customer_id`, or `None` once sold out or once
    /// the pool it waited on was replaced by [`configure`](Self::configure).
    pub async fn remove_ticket(&self, customer_id: &str) -> Option<Ticket> {
        let pool = self.pool();
        pool.remove_ticket(customer_id).await
    }

    /// Current pool counters.
    #[must_use]
    pub fn status(&self) -> PoolStatus {
        self.pool.read().status()
    }

    /// Copy of the live pool's log.
    #[must_use]
    pub fn logs(&self) -> Vec<String> {
        self.pool.read().snapshot_log()
    }

    /// Spawns `count` vendors.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidParameter`] if any argument is zero and
    /// [`MarketError::RuntimeUnavailable`] outside a tokio runtime.
    pub async fn start_vendors(
        &self,
        count: usize,
        cadence_ms: u64,
        batch_size: usize,
    ) -> Result<Vec<String>, MarketError> {
        let settings = WorkerSettings::new(cadence_ms, batch_size)?;
        let mut registry = self.registry.lock().await;
        registry.start_vendors(&self.pool(), count, settings)
    }

    /// Spawns `count` customers.
    ///
    /// # Errors
    ///
    /// Same as [`start_vendors`](Self::start_vendors).
    pub async fn start_customers(
        &self,
        count: usize,
        cadence_ms: u64,
        batch_size: usize,
    ) -> Result<Vec<String>, MarketError> {
        let settings = WorkerSettings::new(cadence_ms, batch_size)?;
        let mut registry = self.registry.lock().await;
        registry.start_customers(&self.pool(), count, settings)
    }

    /// Stops every vendor.
    pub async fn stop_vendors(&self) -> Vec<(String, WorkerExit)> {
        self.registry.lock().await.stop_all(WorkerKind::Vendor).await
    }

    /// Stops every customer.
    pub async fn stop_customers(&self) -> Vec<(String, WorkerExit)> {
        self.registry.lock().await.stop_all(WorkerKind::Customer).await
    }

    /// Spawns one more vendor.
    ///
    /// # Errors
    ///
    /// Same as [`start_vendors`](Self::start_vendors).
    pub async fn add_one_vendor(
        &self,
        cadence_ms: u64,
        batch_size: usize,
    ) -> Result<String, MarketError> {
        let settings = WorkerSettings::new(cadence_ms, batch_size)?;
        let mut registry = self.registry.lock().await;
        registry.add_one_vendor(&self.pool(), settings)
    }

    /// Spawns one more customer.
    ///
    /// # Errors
    ///
    /// Same as [`start_vendors`](Self::start_vendors).
    pub async fn add_one_customer(
        &self,
        cadence_ms: u64,
        batch_size: usize,
    ) -> Result<String, MarketError> {
        let settings = WorkerSettings::new(cadence_ms, batch_size)?;
        let mut registry = self.registry.lock().await;
        registry.add_one_customer(&self.pool(), settings)
    }

    /// Stops the most recently added vendor, if any.
    pub async fn remove_one_vendor(&self) -> Option<(String, WorkerExit)> {
        self.registry.lock().await.remove_one(WorkerKind::Vendor).await
    }

    /// Stops the most recently added customer, if any.
    pub async fn remove_one_customer(&self) -> Option<(String, WorkerExit)> {
        self.registry.lock().await.remove_one(WorkerKind::Customer).await
    }

    /// Number of vendors still running.
    pub async fn vendor_count(&self) -> usize {
        self.registry.lock().await.live_count(WorkerKind::Vendor)
    }

    /// Number of customers still running.
    pub async fn customer_count(&self) -> usize {
        self.registry.lock().await.live_count(WorkerKind::Customer)
    }

    /// Stops every worker of both kinds.
    pub async fn shutdown(&self) {
        let mut registry = self.registry.lock().await;
        let vendors = registry.stop_all(WorkerKind::Vendor).await;
        let customers = registry.stop_all(WorkerKind::Customer).await;
        info!(
            vendors = vendors.len(),
            customers = customers.len(),
            "marketplace shut down"
        );
    }
}

impl std::fmt::Debug for Marketplace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Marketplace")
            .field("pool", &self.pool.read())
            .field("sinks", &self.sinks.len())
            .finish_non_exhaustive()
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Core WorkerRegistry implementation.

use super::handle::WorkerHandle;
use super::identity::IdentityGenerator;
use crate::error::{MarketError, ensure_positive};
use crate::pool::TicketPool;
use crate::worker::{
    Customer, Vendor, WorkerExit, WorkerKind, WorkerSettings, cancellation, catalog_listing,
};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, info};

/// Tracks the live workers of one simulation run.
///
/// Workers of each kind are kept in spawn order; removal of a single worker
/// takes the most recently added one that is still running.
#[derive(Debug, Default)]
pub struct WorkerRegistry {
    identities: IdentityGenerator,
    vendors: Vec<WorkerHandle>,
    customers: Vec<WorkerHandle>,
}

impl WorkerRegistry {
    /// Creates an empty registry with a fresh identity generator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns `count` vendors against `pool` and returns their identities.
    ///
    /// Each vendor stamps its tickets with the catalog listing for its
    /// ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidParameter`] if `count` is zero and
    /// [`MarketError::RuntimeUnavailable`] outside a tokio runtime. Nothing
    /// is spawned or registered in either case.
    pub fn start_vendors(
        &mut self,
        pool: &Arc<TicketPool>,
        count: usize,
        settings: WorkerSettings,
    ) -> Result<Vec<String>, MarketError> {
        self.start(WorkerKind::Vendor, pool, count, settings)
    }

    /// Spawns `count` customers against `pool` and returns their identities.
    ///
    /// # Errors
    ///
    /// Same as [`start_vendors`](Self::start_vendors).
    pub fn start_customers(
        &mut self,
        pool: &Arc<TicketPool>,
        count: usize,
        settings: WorkerSettings,
    ) -> Result<Vec<String>, MarketError> {
        self.start(WorkerKind::Customer, pool, count, settings)
    }

    /// Spawns exactly one more vendor.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::RuntimeUnavailable`] outside a tokio runtime.
    pub fn add_one_vendor(
        &mut self,
        pool: &Arc<TicketPool>,
        settings: WorkerSettings,
    ) -> Result<String, MarketError> {
        let runtime = runtime_handle(WorkerKind::Vendor)?;
        Ok(self.spawn(&runtime, WorkerKind::Vendor, pool, settings))
    }

    /// Spawns exactly one more customer.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::RuntimeUnavailable`] outside a tokio runtime.
    pub fn add_one_customer(
        &mut self,
        pool: &Arc<TicketPool>,
        settings: WorkerSettings,
    ) -> Result<String, MarketError> {
        let runtime = runtime_handle(WorkerKind::Customer)?;
        Ok(self.spawn(&runtime, WorkerKind::Customer, pool, settings))
    }

    /// Cancels every live worker of `kind`, clears them from the registry
    /// and waits for each one to exit.
    pub async fn stop_all(&mut self, kind: WorkerKind) -> Vec<(String, WorkerExit)> {
        let handles = std::mem::take(self.workers_mut(kind));
        for handle in &handles {
            handle.cancel();
        }

        let mut exits = Vec::with_capacity(handles.len());
        for handle in handles {
            exits.push(handle.join().await);
        }

        info!(%kind, stopped = exits.len(), "stopped all workers");
        exits
    }

    /// Cancels and deregisters the most recently added running worker of
    /// `kind`, then waits for it to exit.
    ///
    /// Workers that already finished on their own are dropped from the
    /// registry first. Returns `None` when no worker of that kind is left.
    pub async fn remove_one(&mut self, kind: WorkerKind) -> Option<(String, WorkerExit)> {
        self.prune_finished(kind);
        let handle = self.workers_mut(kind).pop()?;
        handle.cancel();

        let (id, exit) = handle.join().await;
        info!(%kind, worker = %id, ?exit, "removed worker");
        Some((id, exit))
    }

    /// Number of registered workers of `kind` that are still running.
    #[must_use]
    pub fn live_count(&self, kind: WorkerKind) -> usize {
        self.workers(kind).iter().filter(|h| !h.is_finished()).count()
    }

    /// Identities of the registered workers of `kind` still running, in
    /// spawn order.
    #[must_use]
    pub fn live_ids(&self, kind: WorkerKind) -> Vec<String> {
        self.workers(kind)
            .iter()
            .filter(|h| !h.is_finished())
            .map(|h| h.id().to_owned())
            .collect()
    }

    /// Number of identities handed out so far for `kind`.
    #[must_use]
    pub fn issued(&self, kind: WorkerKind) -> u64 {
        self.identities.issued(kind)
    }

    fn start(
        &mut self,
        kind: WorkerKind,
        pool: &Arc<TicketPool>,
        count: usize,
        settings: WorkerSettings,
    ) -> Result<Vec<String>, MarketError> {
        ensure_positive("count", count as u64)?;
        let runtime = runtime_handle(kind)?;

        let ids: Vec<String> = (0..count)
            .map(|_| self.spawn(&runtime, kind, pool, settings))
            .collect();

        info!(%kind, count, ?settings, "started workers");
        Ok(ids)
    }

    fn spawn(
        &mut self,
        runtime: &Handle,
        kind: WorkerKind,
        pool: &Arc<TicketPool>,
        settings: WorkerSettings,
    ) -> String {
        let (ordinal, id) = self.identities.next(kind);
        let (cancel, signal) = cancellation();

        let task = match kind {
            WorkerKind::Vendor => {
                let vendor = Vendor::new(id.clone(), pool.clone(), settings, catalog_listing(ordinal));
                runtime.spawn(vendor.run(signal))
            }
            WorkerKind::Customer => {
                let customer = Customer::new(id.clone(), pool.clone(), settings);
                runtime.spawn(customer.run(signal))
            }
        };

        debug!(%kind, worker = %id, "spawned worker");
        self.workers_mut(kind)
            .push(WorkerHandle::new(id.clone(), kind, cancel, task));
        id
    }

    fn prune_finished(&mut self, kind: WorkerKind) {
        self.workers_mut(kind).retain(|h| !h.is_finished());
    }

    fn workers(&self, kind: WorkerKind) -> &[WorkerHandle] {
        match kind {
            WorkerKind::Vendor => &self.vendors,
            WorkerKind::Customer => &self.customers,
        }
    }

    fn workers_mut(&mut self, kind: WorkerKind) -> &mut Vec<WorkerHandle> {
        match kind {
            WorkerKind::Vendor => &mut self.vendors,
            WorkerKind::Customer => &mut self.customers,
        }
    }
}

/// Resolves the runtime up front so a spawn batch never half-succeeds.
fn runtime_handle(kind: WorkerKind) -> Result<Handle, MarketError> {
    Handle::try_current().map_err(|_| MarketError::RuntimeUnavailable { kind })
}

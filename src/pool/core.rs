/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Core TicketPool implementation.
//!
//! This module provides the bounded buffer shared by every vendor and
//! customer of one simulation run, with blocking admission and removal.

use super::status::PoolStatus;
use crate::error::{MarketError, ensure_positive};
use crate::log::{EventLog, LogSink};
use crate::ticket::{EventListing, Ticket};
use crate::worker::{CancelSignal, Cancelled};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::future::{Future, pending};
use std::pin::pin;
use std::sync::Arc;
use tokio::sync::Notify;

/// Mutable pool state, only touched under the pool lock.
#[derive(Debug, Default)]
struct PoolState {
    stock: VecDeque<Ticket>,
    released: usize,
    sold: usize,
    closed: bool,
}

impl PoolState {
    #[inline]
    fn is_sold_out(&self, total_supply: usize) -> bool {
        self.released >= total_supply && self.stock.is_empty()
    }
}

/// A capacity-bounded FIFO ticket buffer with a lifetime supply cap.
///
/// Vendors call [`add_tickets`](Self::add_tickets) and wait while the pool
/// is full; customers call [`remove_ticket`](Self::remove_ticket) and wait
/// while it is empty. Both waits are notification driven and the `_until`
/// variants abandon the wait as soon as the caller's [`CancelSignal`] fires.
///
/// Invariants, for every reachable state:
///
/// - `remaining_in_pool() <= capacity()`
/// - `released() <= total_supply()`
/// - `released() == remaining_in_pool() + sold()`
/// - once [`is_sold_out`](Self::is_sold_out) returns `true` it never
///   returns `false` again
///
/// A pool that has been [`close`](Self::close)d admits and sells nothing;
/// every wait on it returns at once.
pub struct TicketPool {
    capacity: usize,
    total_supply: usize,
    state: Mutex<PoolState>,
    space_available: Notify,
    stock_available: Notify,
    log: EventLog,
}

impl TicketPool {
    /// Creates an empty pool.
    ///
    /// A `total_supply` of zero is allowed and yields a pool that is sold
    /// out from the start.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidParameter`] if `capacity` is zero.
    pub fn new(total_supply: usize, capacity: usize) -> Result<Self, MarketError> {
        Self::with_sinks(total_supply, capacity, Vec::new())
    }

    /// Creates an empty pool whose log is mirrored to `sinks`.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidParameter`] if `capacity` is zero.
    pub fn with_sinks(
        total_supply: usize,
        capacity: usize,
        sinks: Vec<Arc<dyn LogSink>>,
    ) -> Result<Self, MarketError> {
        ensure_positive("capacity", capacity as u64)?;

        Ok(Self {
            capacity,
            total_supply,
            state: Mutex::new(PoolState::default()),
            space_available: Notify::new(),
            stock_available: Notify::new(),
            log: EventLog::with_sinks(sinks),
        })
    }

    /// Releases up to `count` tickets stamped with `listing`.
    ///
    /// Returns immediately with `0` once the lifetime supply is used up or
    /// the pool is closed.
    /// Otherwise waits for at least one free slot, then admits
    /// `min(count, total_supply - released, capacity - resident)` tickets.
    pub async fn add_tickets(&self, vendor_id: &str, listing: &EventListing, count: usize) -> usize {
        self.admit(vendor_id, listing, count, pending()).await.unwrap_or(0)
    }

    /// Like [`add_tickets`](Self::add_tickets), but gives up the wait for a
    /// free slot when `cancel` fires.
    ///
    /// # Errors
    ///
    /// Returns [`Cancelled`] if the signal fired while waiting. Nothing was
    /// admitted in that case.
    pub async fn add_tickets_until(
        &self,
        vendor_id: &str,
        listing: &EventListing,
        count: usize,
        cancel: &CancelSignal,
    ) -> Result<usize, Cancelled> {
        self.admit(vendor_id, listing, count, cancel.cancelled()).await
    }

    /// Sells the earliest released ticket to `customer_id`.
    ///
    /// Waits while the pool is empty but not sold out. Returns `None` once
    /// the pool is sold out or closed.
    pub async fn remove_ticket(&self, customer_id: &str) -> Option<Ticket> {
        self.take(customer_id, pending()).await.unwrap_or(None)
    }

    /// Like [`remove_ticket`](Self::remove_ticket), but gives up the wait
    /// for stock when `cancel` fires.
    ///
    /// # Errors
    ///
    /// Returns [`Cancelled`] if the signal fired while waiting. Nothing was
    /// removed in that case.
    pub async fn remove_ticket_until(
        &self,
        customer_id: &str,
        cancel: &CancelSignal,
    ) -> Result<Option<Ticket>, Cancelled> {
        self.take(customer_id, cancel.cancelled()).await
    }

    /// Admission loop: register for "space available", check, then wait.
    async fn admit(
        &self,
        vendor_id: &str,
        listing: &EventListing,
        count: usize,
        cancel: impl Future<Output = ()>,
    ) -> Result<usize, Cancelled> {
        let mut cancel = pin!(cancel);
        loop {
            let mut space = pin!(self.space_available.notified());
            space.as_mut().enable();

            if let Some(admitted) = self.try_admit(vendor_id, listing, count) {
                return Ok(admitted);
            }

            tokio::select! {
                biased;
                () = cancel.as_mut() => return Err(Cancelled),
                () = space.as_mut() => {}
            }
        }
    }

    /// Removal loop: register for "stock available", check, then wait.
    async fn take(
        &self,
        customer_id: &str,
        cancel: impl Future<Output = ()>,
    ) -> Result<Option<Ticket>, Cancelled> {
        let mut cancel = pin!(cancel);
        loop {
            let mut stock = pin!(self.stock_available.notified());
            stock.as_mut().enable();

            if let Some(outcome) = self.try_take(customer_id) {
                return Ok(outcome);
            }

            tokio::select! {
                biased;
                () = cancel.as_mut() => return Err(Cancelled),
                () = stock.as_mut() => {}
            }
        }
    }

    /// One admission attempt. `None` means "pool full, wait".
    ///
    /// Log sinks run after the pool lock is released.
    fn try_admit(&self, vendor_id: &str, listing: &EventListing, count: usize) -> Option<usize> {
        let mut state = self.state.lock();

        if state.closed {
            return Some(0);
        }

        if state.released >= self.total_supply {
            self.log.push(format!(
                "{vendor_id}: total ticket limit reached. No more tickets can be added."
            ));
            drop(state);
            self.log.flush_sinks();
            return Some(0);
        }

        let free = self.capacity - state.stock.len();
        if free == 0 {
            return None;
        }

        let admitted = count.min(self.total_supply - state.released).min(free);
        for _ in 0..admitted {
            state.released += 1;
            let serial = state.released as u64;
            state
                .stock
                .push_back(Ticket::release(serial, vendor_id, listing));
        }

        self.log.push(format!(
            "{vendor_id} added {admitted} tickets for {}. Total in pool: {}",
            listing.event_name(),
            state.stock.len()
        ));
        self.stock_available.notify_waiters();
        drop(state);
        self.log.flush_sinks();

        Some(admitted)
    }

    /// One removal attempt. `None` means "pool empty, wait".
    fn try_take(&self, customer_id: &str) -> Option<Option<Ticket>> {
        let mut state = self.state.lock();

        if state.closed {
            return Some(None);
        }

        let Some(ticket) = state.stock.pop_front() else {
            return state.is_sold_out(self.total_supply).then_some(None);
        };
        state.sold += 1;

        self.log.push(format!(
            "{customer_id} purchased a ticket for event '{}' (Vendor: {}, Price: ${:.2}, Category: {}). Tickets remaining in pool: {}",
            ticket.event_name(),
            ticket.vendor_id(),
            ticket.price(),
            ticket.category(),
            state.stock.len()
        ));
        self.space_available.notify_waiters();

        // Customers still parked on an empty pool must observe the sell-out.
        if state.is_sold_out(self.total_supply) {
            self.stock_available.notify_waiters();
        }
        drop(state);
        self.log.flush_sinks();

        Some(Some(ticket))
    }

    /// Retires the pool: current and future callers of the add and remove
    /// operations return `0` and `None` without waiting.
    ///
    /// Stock and counters are left as they were, so a closed pool still
    /// reports its final status.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        self.space_available.notify_waiters();
        self.stock_available.notify_waiters();
    }

    /// Returns `true` once [`close`](Self::close) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Returns `true` once the supply is exhausted and the stock drained.
    #[must_use]
    pub fn is_sold_out(&self) -> bool {
        self.state.lock().is_sold_out(self.total_supply)
    }

    /// Number of tickets currently resident.
    #[must_use]
    pub fn remaining_in_pool(&self) -> usize {
        self.state.lock().stock.len()
    }

    /// Number of tickets ever released.
    #[must_use]
    pub fn released(&self) -> usize {
        self.state.lock().released
    }

    /// Number of tickets sold to customers.
    #[must_use]
    pub fn sold(&self) -> usize {
        self.state.lock().sold
    }

    /// Lifetime release ceiling.
    #[inline]
    #[must_use]
    pub fn total_supply(&self) -> usize {
        self.total_supply
    }

    /// Resident ticket ceiling.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reads every counter under one lock acquisition.
    #[must_use]
    pub fn status(&self) -> PoolStatus {
        let state = self.state.lock();
        PoolStatus {
            remaining_in_pool: state.stock.len(),
            released: state.released,
            sold: state.sold,
            total_supply: self.total_supply,
            capacity: self.capacity,
            sold_out: state.is_sold_out(self.total_supply),
        }
    }

    /// Appends a free-form message to the pool's log.
    pub fn append_log(&self, message: impl Into<String>) -> u64 {
        self.log.append(message)
    }

    /// Returns a copy of the log messages, in order.
    #[must_use]
    pub fn snapshot_log(&self) -> Vec<String> {
        self.log.snapshot()
    }

    /// The pool's event log.
    #[must_use]
    pub fn log(&self) -> &EventLog {
        &self.log
    }
}

impl std::fmt::Debug for TicketPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketPool")
            .field("status", &self.status())
            .field("log", &self.log)
            .finish()
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Vendor worker: releases tickets at a fixed cadence.

use super::cancel::CancelSignal;
use super::settings::{WorkerExit, WorkerSettings};
use crate::pool::TicketPool;
use crate::ticket::EventListing;
use std::sync::Arc;
use tracing::debug;

/// Producer that releases `batch_size` tickets every `cadence` until the
/// pool is sold out or the vendor is cancelled.
#[derive(Debug)]
pub struct Vendor {
    id: String,
    pool: Arc<TicketPool>,
    settings: WorkerSettings,
    listing: EventListing,
}

impl Vendor {
    /// Creates a vendor bound to `pool`.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        pool: Arc<TicketPool>,
        settings: WorkerSettings,
        listing: EventListing,
    ) -> Self {
        Self {
            id: id.into(),
            pool,
            settings,
            listing,
        }
    }

    /// Vendor identity.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Listing stamped on every released ticket.
    #[must_use]
    pub fn listing(&self) -> &EventListing {
        &self.listing
    }

    /// Runs the release loop to completion.
    ///
    /// Cancellation is observed while waiting for pool space and while
    /// sleeping between releases. A closed pool counts as cancellation.
    pub async fn run(self, cancel: CancelSignal) -> WorkerExit {
        debug!(vendor = %self.id, "vendor started");

        while !self.pool.is_sold_out() {
            let released = self
                .pool
                .add_tickets_until(&self.id, &self.listing, self.settings.batch_size(), &cancel)
                .await;
            if released.is_err()
                || self.pool.is_closed()
                || cancel.sleep(self.settings.cadence()).await.is_err()
            {
                return self.stop(false);
            }
        }

        self.stop(true)
    }

    fn stop(&self, sold_out: bool) -> WorkerExit {
        let (exit, reason) = if sold_out {
            (WorkerExit::SoldOut, "supply exhausted")
        } else {
            (WorkerExit::Cancelled, "interrupted")
        };
        self.pool.append_log(format!("{} stopped ({reason})", self.id));
        debug!(vendor = %self.id, ?exit, "vendor stopped");
        exit
    }
}

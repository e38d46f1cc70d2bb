/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Customer worker: buys tickets at a fixed cadence.

use super::cancel::CancelSignal;
use super::settings::{WorkerExit, WorkerSettings};
use crate::pool::TicketPool;
use std::sync::Arc;
use tracing::debug;

/// Consumer that attempts `batch_size` purchases every `cadence` until the
/// pool is sold out or the customer is cancelled.
///
/// A batch is best effort: each purchase is a separate pool operation, so
/// under contention a batch may end up with fewer tickets than requested.
#[derive(Debug)]
pub struct Customer {
    id: String,
    pool: Arc<TicketPool>,
    settings: WorkerSettings,
}

impl Customer {
    /// Creates a customer bound to `pool`.
    #[must_use]
    pub fn new(id: impl Into<String>, pool: Arc<TicketPool>, settings: WorkerSettings) -> Self {
        Self {
            id: id.into(),
            pool,
            settings,
        }
    }

    /// Customer identity.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Runs the purchase loop to completion.
    ///
    /// A closed pool counts as cancellation.
    pub async fn run(self, cancel: CancelSignal) -> WorkerExit {
        debug!(customer = %self.id, "customer started");

        while !self.pool.is_sold_out() {
            for _ in 0..self.settings.batch_size() {
                if self.pool.remove_ticket_until(&self.id, &cancel).await.is_err()
                    || self.pool.is_closed()
                {
                    return self.stop(false);
                }
                if self.pool.is_sold_out() {
                    break;
                }
            }
            if cancel.sleep(self.settings.cadence()).await.is_err() {
                return self.stop(false);
            }
        }

        self.stop(true)
    }

    fn stop(&self, sold_out: bool) -> WorkerExit {
        let (exit, reason) = if sold_out {
            (WorkerExit::SoldOut, "all tickets sold")
        } else {
            (WorkerExit::Cancelled, "interrupted")
        };
        self.pool.append_log(format!("{} stopped ({reason})", self.id));
        debug!(customer = %self.id, ?exit, "customer stopped");
        exit
    }
}

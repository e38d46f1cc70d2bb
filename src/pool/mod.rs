/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Bounded ticket pool coordinating vendors and customers.
//!
//! The [`TicketPool`] is a bounded FIFO buffer with two ceilings: `capacity`
//! limits how many tickets are resident at once and `total_supply` limits how
//! many tickets are ever released. Once the supply is exhausted and the
//! buffer drained, the pool is sold out for good.
//!
//! # Architecture
//!
//! - One `parking_lot` mutex guards the stock, the release counter and the
//!   sale counter
//! - Two `tokio::sync::Notify` wait queues: "space available" for vendors
//!   and "stock available" for customers
//! - Waiters register interest before checking the predicate under the lock,
//!   so a notification can never slip between check and wait
//! - Every mutation records its [`EventLog`] entry while still holding the
//!   pool lock, so the log follows the mutation order; log sinks run only
//!   after the pool lock is released
//! - [`TicketPool::close`] retires a pool and releases every waiter
//!
//! # Examples
//!
//! ```
//! use ticketpool_rs::{EventListing, TicketPool};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = TicketPool::new(10, 3)?;
//! let listing = EventListing::new("Event-1", "Music Concert", 100.0, "VIP")?;
//!
//! let added = pool.add_tickets("Vendor-1", &listing, 5).await;
//! assert_eq!(added, 3);
//!
//! let ticket = pool.remove_ticket("Customer-1").await;
//! assert_eq!(ticket.map(|t| t.serial()), Some(1));
//! assert_eq!(pool.remaining_in_pool(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! [`EventLog`]: crate::log::EventLog

pub mod core;
pub mod status;

#[cfg(test)]
mod tests;

pub use self::core::TicketPool;
pub use status::PoolStatus;

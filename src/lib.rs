/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # ticketpool-rs
//!
//! A concurrent ticket marketplace simulation: any number of vendor workers
//! release tickets into a shared, capacity-bounded pool while any number of
//! customer workers buy them, under a lifetime supply cap.
//!
//! ## Components
//!
//! - [`TicketPool`]: the bounded FIFO buffer. Enforces the capacity and
//!   supply ceilings, blocks vendors while full and customers while empty,
//!   and records every mutation in its [`EventLog`].
//! - [`worker`]: the [`Vendor`] and [`Customer`] run loops, each driven by a
//!   cadence and a batch size and stopped cooperatively through a
//!   [`CancelSignal`].
//! - [`WorkerRegistry`]: spawns workers as tokio tasks, hands out identities
//!   and removes workers in LIFO order.
//! - [`Marketplace`]: the facade a transport layer calls into.
//! - [`SimulationConfig`]: the persisted configuration document.
//!
//! ## Guarantees
//!
//! - `0 <= resident <= capacity` and `0 <= released <= total_supply`
//! - tickets are sold in release order
//! - sold out (`released == total_supply` with an empty pool) is terminal
//! - a worker blocked on the pool wakes promptly when cancelled
//! - log order matches pool operation order
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use ticketpool_rs::Marketplace;
//!
//! # #[tokio::main(flavor = "multi_thread", worker_threads = 2)]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let market = Marketplace::new(20, 5)?;
//! market.start_vendors(2, 5, 3).await?;
//! market.start_customers(3, 5, 2).await?;
//!
//! while !market.status().sold_out {
//!     tokio::time::sleep(Duration::from_millis(10)).await;
//! }
//!
//! assert_eq!(market.status().released, 20);
//! market.shutdown().await;
//! # Ok(())
//! # }
//! ```
//!
//! [`EventLog`]: log::EventLog
//! [`Vendor`]: worker::Vendor
//! [`Customer`]: worker::Customer
//! [`CancelSignal`]: worker::CancelSignal

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod log;
pub mod market;
pub mod pool;
pub mod registry;
pub mod ticket;
pub mod worker;

pub use config::SimulationConfig;
pub use error::MarketError;
pub use market::Marketplace;
pub use pool::{PoolStatus, TicketPool};
pub use registry::WorkerRegistry;
pub use ticket::{EventListing, Ticket};

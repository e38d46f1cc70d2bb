/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Vendor and customer workers.
//!
//! A worker is an independent task repeatedly acting on a shared
//! [`TicketPool`]: vendors release tickets, customers buy them. Each one is
//! parametrised by a cadence (delay between actions) and a batch size
//! (units per action) and runs until the pool is sold out or its
//! [`CancelSignal`] fires.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use ticketpool_rs::TicketPool;
//! use ticketpool_rs::worker::{Customer, Vendor, WorkerExit, WorkerSettings, cancellation, catalog_listing};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = Arc::new(TicketPool::new(6, 3)?);
//! let settings = WorkerSettings::new(1, 2)?;
//!
//! let (_vendor_handle, vendor_signal) = cancellation();
//! let (_customer_handle, customer_signal) = cancellation();
//! let vendor = Vendor::new("Vendor-1", pool.clone(), settings, catalog_listing(1));
//! let customer = Customer::new("Customer-1", pool.clone(), settings);
//!
//! let vendor = tokio::spawn(vendor.run(vendor_signal));
//! let customer = tokio::spawn(customer.run(customer_signal));
//!
//! assert_eq!(vendor.await?, WorkerExit::SoldOut);
//! assert_eq!(customer.await?, WorkerExit::SoldOut);
//! # Ok(())
//! # }
//! ```
//!
//! [`TicketPool`]: crate::pool::TicketPool

pub mod cancel;
pub mod catalog;
pub mod customer;
pub mod settings;
pub mod vendor;

#[cfg(test)]
mod tests;

pub use cancel::{CancelHandle, CancelSignal, Cancelled, cancellation};
pub use catalog::catalog_listing;
pub use customer::Customer;
pub use settings::{WorkerExit, WorkerKind, WorkerSettings};
pub use vendor::Vendor;

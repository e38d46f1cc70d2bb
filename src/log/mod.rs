/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Append-only audit log for ticket pool activity.
//!
//! Every admission, sale and worker transition against a [`TicketPool`] is
//! recorded as a [`LogEntry`] with a gap-free sequence number. The append
//! order is the causal order of the pool operations that produced the
//! entries, because pool operations append while holding the pool lock.
//!
//! Entries can be mirrored to external collaborators through [`LogSink`]s.
//! A failing sink is reported via `tracing` and otherwise ignored; it never
//! blocks or alters the in-memory log.
//!
//! # Examples
//!
//! ```
//! use ticketpool_rs::log::EventLog;
//!
//! let log = EventLog::new();
//! log.append("Vendor-1 added 3 tickets for Tech Expo. Total in pool: 3");
//! log.append("Customer-1 stopped (interrupted)");
//!
//! assert_eq!(log.len(), 2);
//! assert_eq!(log.last_sequence(), Some(2));
//! assert_eq!(log.snapshot()[1], "Customer-1 stopped (interrupted)");
//! ```
//!
//! [`TicketPool`]: crate::pool::TicketPool

pub mod entry;
pub mod event_log;
pub mod sink;

pub use entry::LogEntry;
pub use event_log::EventLog;
pub use sink::{LogSink, WriterSink};

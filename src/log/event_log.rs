/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! In-memory event log implementation.

use super::entry::{LogEntry, nanos_since_epoch};
use super::sink::LogSink;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, warn};

/// Thread-safe, append-only sequence of status messages.
///
/// The log has its own lock, independent from the pool lock. Entries are
/// numbered from 1 without gaps; sinks see them in the same order.
///
/// Sinks never run under the entries lock. Appended entries wait in an
/// outbox that is drained by one caller at a time, so a slow sink delays
/// only the appender that drains it, never readers of the log.
pub struct EventLog {
    entries: Mutex<Vec<LogEntry>>,
    outbox: Mutex<VecDeque<LogEntry>>,
    dispatch: Mutex<()>,
    sinks: Vec<Arc<dyn LogSink>>,
    sink_failures: AtomicU64,
}

impl EventLog {
    /// Creates an empty log with no sinks.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sinks(Vec::new())
    }

    /// Creates an empty log mirrored to the given sinks.
    #[must_use]
    pub fn with_sinks(sinks: Vec<Arc<dyn LogSink>>) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            outbox: Mutex::new(VecDeque::new()),
            dispatch: Mutex::new(()),
            sinks,
            sink_failures: AtomicU64::new(0),
        }
    }

    /// Appends a message, mirrors it to the sinks and returns its sequence
    /// number.
    ///
    /// A sink error is counted and reported, never propagated.
    pub fn append(&self, message: impl Into<String>) -> u64 {
        let sequence_num = self.push(message);
        self.flush_sinks();
        sequence_num
    }

    /// Records a message in memory and queues it for the sinks.
    ///
    /// Cheap enough to call under another lock; pair it with
    /// [`flush_sinks`](Self::flush_sinks) once that lock is released.
    pub(crate) fn push(&self, message: impl Into<String>) -> u64 {
        let mut entries = self.entries.lock();
        let sequence_num = entries.len() as u64 + 1;
        let entry = LogEntry::new(sequence_num, nanos_since_epoch(), message);

        info!(sequence = sequence_num, "{}", entry.message);

        if !self.sinks.is_empty() {
            self.outbox.lock().push_back(entry.clone());
        }
        entries.push(entry);
        sequence_num
    }

    /// Hands every queued entry to the sinks, in sequence order.
    pub(crate) fn flush_sinks(&self) {
        if self.sinks.is_empty() {
            return;
        }

        let _turn = self.dispatch.lock();
        loop {
            let Some(entry) = self.outbox.lock().pop_front() else {
                break;
            };
            for sink in &self.sinks {
                if let Err(e) = sink.record(&entry) {
                    self.sink_failures.fetch_add(1, Ordering::Relaxed);
                    warn!(sequence = entry.sequence_num, error = %e, "log sink rejected entry");
                }
            }
        }
    }

    /// Returns a copy of every message, in append order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .map(|e| e.message.clone())
            .collect()
    }

    /// Returns a copy of every entry, in append order.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Returns the entries with `sequence_num >= from_sequence`.
    ///
    /// Lets a poller fetch only what it has not seen yet.
    #[must_use]
    pub fn read_from(&self, from_sequence: u64) -> Vec<LogEntry> {
        let entries = self.entries.lock();
        let start = from_sequence.saturating_sub(1).min(entries.len() as u64) as usize;
        entries[start..].to_vec()
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns `true` if nothing has been appended.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the sequence number of the last entry, or `None` if empty.
    #[must_use]
    pub fn last_sequence(&self) -> Option<u64> {
        self.entries.lock().last().map(|e| e.sequence_num)
    }

    /// Number of entries a sink failed to record.
    #[must_use]
    pub fn sink_failures(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLog")
            .field("len", &self.len())
            .field("sinks", &self.sinks.len())
            .field("sink_failures", &self.sink_failures())
            .finish()
    }
}

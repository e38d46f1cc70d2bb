/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Mirrors for the audit log.
//!
//! A [`LogSink`] receives every entry right after it is appended, in append
//! order. Sinks are the hook for durable storage (a log file, a socket);
//! the log itself stays purely in memory.

use super::entry::LogEntry;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Receiver of appended log entries.
///
/// Any `Fn(&LogEntry) -> io::Result<()>` closure is a sink.
pub trait LogSink: Send + Sync {
    /// Records one entry.
    ///
    /// # Errors
    ///
    /// Returns the I/O error of the underlying medium. The caller reports it
    /// and carries on.
    fn record(&self, entry: &LogEntry) -> io::Result<()>;
}

impl<F> LogSink for F
where
    F: Fn(&LogEntry) -> io::Result<()> + Send + Sync,
{
    fn record(&self, entry: &LogEntry) -> io::Result<()> {
        self(entry)
    }
}

/// Sink writing one `[seq] message` line per entry to any writer.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use ticketpool_rs::log::{EventLog, LogSink, WriterSink};
///
/// let sink = Arc::new(WriterSink::new(Vec::new()));
/// let sinks: Vec<Arc<dyn LogSink>> = vec![sink.clone()];
/// let log = EventLog::with_sinks(sinks);
/// log.append("Customer-2 stopped (all tickets sold)");
///
/// let bytes = sink.writer_snapshot();
/// assert_eq!(String::from_utf8(bytes).unwrap(), "[1] Customer-2 stopped (all tickets sold)\n");
/// ```
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wraps a writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Flushes the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns the writer's flush error.
    pub fn flush(&self) -> io::Result<()> {
        self.writer.lock().flush()
    }
}

impl<W: Write + Send + Clone> WriterSink<W> {
    /// Returns a copy of the underlying writer (useful for in-memory buffers).
    #[must_use]
    pub fn writer_snapshot(&self) -> W {
        self.writer.lock().clone()
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn record(&self, entry: &LogEntry) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writeln!(writer, "{entry}")
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Log entry type.

use serde::{Deserialize, Serialize};

/// One line of the audit log.
///
/// Contains the sequence number, the append timestamp and the message.
/// Entries are produced in sequence order and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use ticketpool_rs::log::LogEntry;
///
/// let entry = LogEntry::new(1, 1_234_567_890, "Vendor-1 stopped (supply exhausted)");
/// assert_eq!(entry.sequence_num, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Monotonically increasing sequence number, starting at 1.
    pub sequence_num: u64,

    /// Nanosecond timestamp taken when the entry was appended.
    pub timestamp_ns: u64,

    /// Human-readable status message.
    pub message: String,
}

impl LogEntry {
    /// Creates a new log entry.
    #[must_use]
    pub fn new(sequence_num: u64, timestamp_ns: u64, message: impl Into<String>) -> Self {
        Self {
            sequence_num,
            timestamp_ns,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.sequence_num, self.message)
    }
}

/// Returns the current time in nanoseconds since the Unix epoch.
#[inline]
pub(crate) fn nanos_since_epoch() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

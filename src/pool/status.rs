/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Point-in-time view of a pool.

use serde::{Deserialize, Serialize};

/// Counters of a [`TicketPool`] read under a single lock acquisition.
///
/// The `Display` form is the short status line shown to operators.
///
/// # Examples
///
/// ```
/// use ticketpool_rs::PoolStatus;
///
/// let status = PoolStatus {
///     remaining_in_pool: 4,
///     released: 10,
///     sold: 6,
///     total_supply: 20,
///     capacity: 5,
///     sold_out: false,
/// };
/// assert_eq!(status.to_string(), "Tickets Remaining: 4");
/// ```
///
/// [`TicketPool`]: super::TicketPool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStatus {
    /// Tickets currently resident in the pool.
    pub remaining_in_pool: usize,

    /// Tickets ever released into the pool.
    pub released: usize,

    /// Tickets removed by customers.
    pub sold: usize,

    /// Lifetime release ceiling.
    pub total_supply: usize,

    /// Resident ticket ceiling.
    pub capacity: usize,

    /// Whether the pool reached its terminal state.
    pub sold_out: bool,
}

impl std::fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tickets Remaining: {}", self.remaining_in_pool)
    }
}

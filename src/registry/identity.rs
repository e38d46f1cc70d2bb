/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Worker identity assignment.

use crate::worker::WorkerKind;

/// Hands out `Vendor-<n>` / `Customer-<n>` identities, counting from 1 per
/// kind.
///
/// # Examples
///
/// ```
/// use ticketpool_rs::registry::IdentityGenerator;
/// use ticketpool_rs::worker::WorkerKind;
///
/// let mut ids = IdentityGenerator::new();
/// assert_eq!(ids.next(WorkerKind::Vendor), (1, "Vendor-1".to_string()));
/// assert_eq!(ids.next(WorkerKind::Customer), (1, "Customer-1".to_string()));
/// assert_eq!(ids.next(WorkerKind::Vendor), (2, "Vendor-2".to_string()));
/// ```
#[derive(Debug, Default, Clone)]
pub struct IdentityGenerator {
    vendors: u64,
    customers: u64,
}

impl IdentityGenerator {
    /// Creates a generator starting at 1 for both kinds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next ordinal and its label for `kind`.
    pub fn next(&mut self, kind: WorkerKind) -> (u64, String) {
        let counter = match kind {
            WorkerKind::Vendor => &mut self.vendors,
            WorkerKind::Customer => &mut self.customers,
        };
        *counter += 1;
        (*counter, format!("{}-{}", kind.label(), counter))
    }

    /// Number of identities issued so far for `kind`.
    #[must_use]
    pub fn issued(&self, kind: WorkerKind) -> u64 {
        match kind {
            WorkerKind::Vendor => self.vendors,
            WorkerKind::Customer => self.customers,
        }
    }
}

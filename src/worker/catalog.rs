/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Built-in event catalog for spawned vendors.
//!
//! Vendors started by the registry are not given explicit metadata; each
//! one picks an event, price and category from fixed tables by its ordinal.
//! The ordinal is the vendor's number within the run (`Vendor-3` is
//! ordinal 3), not its position inside one start request.

use crate::ticket::EventListing;

const EVENT_NAMES: [&str; 5] = [
    "Music Concert",
    "Sports Event",
    "Theater Play",
    "Tech Expo",
    "Art Show",
];
const CATEGORIES: [&str; 3] = ["VIP", "Regular", "Balcony"];
const PRICES: [f64; 5] = [100.0, 150.0, 200.0, 250.0, 300.0];

/// Returns the listing for the vendor with the given 1-based ordinal.
///
/// # Examples
///
/// ```
/// use ticketpool_rs::worker::catalog_listing;
///
/// let listing = catalog_listing(6);
/// assert_eq!(listing.event_id(), "Event-1");
/// assert_eq!(listing.category(), "Balcony");
/// ```
#[must_use]
pub fn catalog_listing(ordinal: u64) -> EventListing {
    let index = ordinal.saturating_sub(1) as usize;
    let event = index % EVENT_NAMES.len();
    EventListing::from_catalog(
        format!("Event-{}", event + 1),
        EVENT_NAMES[event],
        PRICES[index % PRICES.len()],
        CATEGORIES[index % CATEGORIES.len()],
    )
}

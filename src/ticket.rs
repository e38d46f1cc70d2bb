/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Ticket records and the event listing vendors stamp on them.

use crate::error::MarketError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Descriptive metadata for the event a vendor sells tickets for.
///
/// # Examples
///
/// ```
/// use ticketpool_rs::EventListing;
///
/// let listing = EventListing::new("Event-1", "Music Concert", 100.0, "VIP").unwrap();
/// assert_eq!(listing.event_name(), "Music Concert");
/// assert!(EventListing::new("Event-1", "Music Concert", -1.0, "VIP").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventListing {
    event_id: String,
    event_name: String,
    price: f64,
    category: String,
}

impl EventListing {
    /// Creates a listing, rejecting negative or non-finite prices.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidParameter`] if `price` is negative, NaN
    /// or infinite.
    pub fn new(
        event_id: impl Into<String>,
        event_name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Result<Self, MarketError> {
        if !price.is_finite() || price < 0.0 {
            return Err(MarketError::invalid(
                "price",
                format!("must be a non-negative finite amount, got {price}"),
            ));
        }
        Ok(Self {
            event_id: event_id.into(),
            event_name: event_name.into(),
            price,
            category: category.into(),
        })
    }

    /// Builds a listing from the built-in catalog, whose prices are known valid.
    pub(crate) fn from_catalog(
        event_id: String,
        event_name: &str,
        price: f64,
        category: &str,
    ) -> Self {
        debug_assert!(price.is_finite() && price >= 0.0);
        Self {
            event_id,
            event_name: event_name.to_owned(),
            price,
            category: category.to_owned(),
        }
    }

    /// Event identifier.
    #[must_use]
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    /// Event display name.
    #[must_use]
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// Ticket price.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Seating or access category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }
}

/// One sellable unit resident in a [`TicketPool`].
///
/// Tickets are immutable once released. `serial` is the 1-based release
/// ordinal within the pool that admitted the ticket, so two tickets from the
/// same pool compare in release order by serial.
///
/// [`TicketPool`]: crate::pool::TicketPool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    id: Uuid,
    serial: u64,
    vendor_id: String,
    event_id: String,
    event_name: String,
    price: f64,
    category: String,
}

impl Ticket {
    pub(crate) fn release(serial: u64, vendor_id: &str, listing: &EventListing) -> Self {
        Self {
            id: Uuid::new_v4(),
            serial,
            vendor_id: vendor_id.to_owned(),
            event_id: listing.event_id.clone(),
            event_name: listing.event_name.clone(),
            price: listing.price,
            category: listing.category.clone(),
        }
    }

    /// Unique ticket identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Release ordinal within the issuing pool, starting at 1.
    #[must_use]
    pub fn serial(&self) -> u64 {
        self.serial
    }

    /// Vendor that released the ticket.
    #[must_use]
    pub fn vendor_id(&self) -> &str {
        &self.vendor_id
    }

    /// Event identifier.
    #[must_use]
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    /// Event display name.
    #[must_use]
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// Ticket price.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Seating or access category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }
}

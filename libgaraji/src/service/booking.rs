//! Booking service for reserving listed spaces
//!
//! This module handles creating bookings against catalog listings, including
//! availability checks, price quoting, and event emission.

use std::sync::Arc;
use tracing::info;

use super::events::{Event, EventBus};
use crate::booking::{new_booking, OrderQuote};
use crate::error::BookingError;
use crate::{Booking, Catalog, Config, Listing, Result};

/// Booking service
///
/// Handles booking creation and price quoting. Bookings are held in memory by
/// the caller; the service itself is stateless apart from its shared catalog
/// and configuration.
#[derive(Clone)]
pub struct BookingService {
    catalog: Arc<Catalog>,
    config: Arc<Config>,
    event_bus: EventBus,
}

impl BookingService {
    /// Create a new booking service
    pub fn new(catalog: Arc<Catalog>, config: Arc<Config>, event_bus: EventBus) -> Self {
        Self {
            catalog,
            config,
            event_bus,
        }
    }

    /// Create a booking for the given listing
    ///
    /// Books the configured default duration starting now, generating a fresh
    /// booking id and access code.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing does not exist or is not currently
    /// available.
    pub fn create(&self, listing_id: &str) -> Result<Booking> {
        let listing = self
            .catalog
            .get(listing_id)
            .ok_or_else(|| BookingError::UnknownListing(listing_id.to_string()))?;

        if !listing.available {
            return Err(BookingError::ListingUnavailable(listing.name.clone()).into());
        }

        let booking = new_booking(listing, self.config.booking.duration_hours);

        info!(
            booking_id = %booking.id,
            listing_id = %listing.id,
            listing_name = %listing.name,
            "Booking created"
        );

        self.event_bus.emit(Event::BookingCreated {
            booking_id: booking.id.clone(),
            listing_id: listing.id.clone(),
        });

        Ok(booking)
    }

    /// Quote the order total for booking the given listing
    ///
    /// Uses the configured default duration and service fee. Quoting does not
    /// check availability; it is used to render a review before confirming.
    pub fn quote(&self, listing: &Listing) -> OrderQuote {
        OrderQuote::new(listing.price_per_hour, &self.config.booking)
    }
}

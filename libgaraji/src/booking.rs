//! Booking creation
//!
//! Pure factory for booking records plus the order pricing shown on the
//! payment screen. Randomness (booking id, access code) is the only
//! non-determinism; the clock is injectable for tests.

use chrono::{DateTime, Local, Timelike};
use rand::Rng;

use crate::config::BookingConfig;
use crate::types::{Booking, BookingStatus, Listing};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LENGTH: usize = 9;

const ACCESS_CODE_MIN: u32 = 1000;
const ACCESS_CODE_MAX: u32 = 9999;

/// Create a booking for `listing` starting now
pub fn new_booking(listing: &Listing, duration_hours: u32) -> Booking {
    new_booking_at(listing, Local::now(), duration_hours)
}

/// Create a booking for `listing` with an explicit clock value
///
/// The booking starts at the current hour on the hour and runs for
/// `duration_hours`. The end label is the start hour plus the duration,
/// taken past 23 rather than wrapped. Every new booking is active
/// immediately.
pub fn new_booking_at(listing: &Listing, now: DateTime<Local>, duration_hours: u32) -> Booking {
    let hour = now.hour();

    Booking {
        id: generate_booking_id(),
        listing_id: listing.id.clone(),
        listing_name: listing.name.clone(),
        listing_image: listing.image.clone(),
        date: now.format("%b %-d, %Y").to_string(),
        start_time: format!("{}:00", hour),
        end_time: format!("{}:00", hour + duration_hours),
        access_code: generate_access_code(),
        status: BookingStatus::Active,
        created_at: now.timestamp(),
    }
}

/// Pricing breakdown for the payment screen
#[derive(Debug, Clone, PartialEq)]
pub struct OrderQuote {
    pub rental: f64,
    pub service_fee: f64,
    pub total: f64,
    pub duration_hours: u32,
}

impl OrderQuote {
    /// Quote for renting at `price_per_hour` under the given booking config
    pub fn new(price_per_hour: f64, config: &BookingConfig) -> Self {
        let rental = price_per_hour * f64::from(config.duration_hours);
        let service_fee = config.service_fee;

        Self {
            rental,
            service_fee,
            total: rental + service_fee,
            duration_hours: config.duration_hours,
        }
    }
}

/// Random base-36 identifier, 9 characters
fn generate_booking_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Random 4-digit access code in [1000, 9999]
fn generate_access_code() -> String {
    rand::thread_rng()
        .gen_range(ACCESS_CODE_MIN..=ACCESS_CODE_MAX)
        .to_string()
}

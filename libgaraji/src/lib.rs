//! Garaji - garage and parking space rentals in the terminal
//!
//! This library provides the domain model and services behind the Garaji
//! terminal UI: the listing catalog, booking creation, and simulated
//! access key generation.

pub mod booking;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use catalog::Catalog;
pub use config::Config;
pub use error::{GarajiError, Result};
pub use types::{Booking, BookingStatus, Category, CategoryFilter, Listing};

//! Service layer for Garaji
//!
//! This module provides a clean, testable API for business logic that can be
//! consumed by multiple interfaces (TUI today, others later) without code
//! duplication.
//!
//! # Architecture
//!
//! The service layer follows a facade pattern with `GarajiService` as the
//! main entry point, coordinating specialized sub-services:
//!
//! - `BookingService`: Reserve listings and quote order totals
//! - `AccessService`: Gate access codes and run key generation
//! - `EventBus`: Progress event distribution
//!
//! # Example
//!
//! ```no_run
//! use libgaraji::service::GarajiService;
//!
//! # fn example() -> libgaraji::Result<()> {
//! let service = GarajiService::new()?;
//!
//! let listing_id = service.catalog().all()[0].id.clone();
//! let booking = service.booking().create(&listing_id)?;
//! println!("Booked {} ({})", booking.listing_name, booking.id);
//! # Ok(())
//! # }
//! ```

pub mod access;
pub mod booking;
pub mod events;

use self::access::AccessService;
use self::booking::BookingService;
use self::events::EventBus;
use crate::{Catalog, Config, Result};
use std::sync::Arc;

/// Main service facade that coordinates all sub-services
///
/// `GarajiService` provides a single entry point for all service operations,
/// managing shared resources (Catalog, Config) and providing access to
/// specialized sub-services.
///
/// # Shared State
///
/// All sub-services share the same `Arc<Catalog>` and `Arc<Config>` instances,
/// enabling efficient concurrent access without duplication.
///
/// # Example
///
/// ```no_run
/// use libgaraji::service::GarajiService;
///
/// # fn example() -> libgaraji::Result<()> {
/// let service = GarajiService::new()?;
///
/// // Access sub-services
/// let booking = service.booking();
/// let access = service.access();
///
/// // Subscribe to events
/// let mut events = service.subscribe();
/// # Ok(())
/// # }
/// ```
pub struct GarajiService {
    catalog: Arc<Catalog>,
    config: Arc<Config>,
    booking: BookingService,
    access: AccessService,
    event_bus: EventBus,
}

impl GarajiService {
    /// Create a new service with default configuration
    ///
    /// Loads configuration from the default location, falling back to
    /// defaults when no config file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn new() -> Result<Self> {
        let config = Config::load_or_default()?;
        Ok(Self::from_config(config))
    }

    /// Create a service with custom configuration
    ///
    /// This allows providing a pre-configured `Config` instance, useful for
    /// testing or custom setups.
    pub fn from_config(config: Config) -> Self {
        let catalog = Arc::new(Catalog::new());
        let config = Arc::new(config);
        let event_bus = EventBus::new(100);

        // Create sub-services with shared state
        let booking = BookingService::new(
            Arc::clone(&catalog),
            Arc::clone(&config),
            event_bus.clone(),
        );
        let access = AccessService::new(Arc::clone(&config), event_bus.clone());

        Self {
            catalog,
            config,
            booking,
            access,
            event_bus,
        }
    }

    /// Access the listing catalog
    ///
    /// The catalog holds every listed space, seeded at startup.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Access the loaded configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the booking service
    ///
    /// The booking service handles reserving listings and quoting order
    /// totals.
    pub fn booking(&self) -> &BookingService {
        &self.booking
    }

    /// Access the access-key service
    ///
    /// The access service gates access codes and runs key generation.
    pub fn access(&self) -> &AccessService {
        &self.access
    }

    /// Subscribe to service events
    ///
    /// Returns a receiver that will receive progress events from service
    /// operations. Multiple subscribers are supported.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use libgaraji::service::GarajiService;
    ///
    /// # fn example() -> libgaraji::Result<()> {
    /// let service = GarajiService::new()?;
    /// let mut events = service.subscribe();
    ///
    /// // In a separate task, listen for events
    /// tokio::spawn(async move {
    ///     while let Ok(event) = events.recv().await {
    ///         println!("Event: {:?}", event);
    ///     }
    /// });
    /// # Ok(())
    /// # }
    /// ```
    pub fn subscribe(&self) -> events::EventReceiver {
        self.event_bus.subscribe()
    }
}

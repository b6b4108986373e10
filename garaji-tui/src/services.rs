//! Service layer adapter for TUI
//!
//! This module provides an adapter between the async GarajiService
//! and the synchronous TUI event loop, following functional programming principles.
//!
//! # Architecture
//!
//! - `ServiceHandle`: Wraps GarajiService and manages tokio runtime
//! - Booking: Synchronous wrapper around BookingService
//! - Timers: Spawn async tasks, provide crossbeam channels for completions
//! - Events: Bridges tokio broadcast channel to crossbeam for sync event loop
//!
//! The event loop never blocks on a task; it reconciles running tasks against
//! the intent recorded in state each iteration and drains completion channels
//! with `try_recv`.
//!
//! # Example
//!
//! ```no_run
//! use garaji_tui::services::ServiceHandle;
//!
//! # fn example() -> garaji_tui::error::Result<()> {
//! let services = ServiceHandle::new()?;
//!
//! // Book a listing synchronously
//! let booking = services.create_booking("1");
//!
//! // Generate its key asynchronously with a progress channel
//! if let Ok(booking) = booking {
//!     let (generation, events_rx) = services.start_key_generation(booking.id);
//! }
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crossbeam_channel::{unbounded, Receiver};
use libgaraji::config::BookingConfig;
use libgaraji::service::events::Event;
use libgaraji::service::GarajiService;
use libgaraji::{Booking, Config, Listing};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Service handle for TUI operations
///
/// Wraps GarajiService and provides sync/async bridges for the TUI event loop.
/// Uses a tokio runtime to handle async operations without blocking the UI.
pub struct ServiceHandle {
    service: Arc<GarajiService>,
    runtime: tokio::runtime::Runtime,
}

/// Handle to a spawned one-shot timer task
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Abort the timer; its completion will never be delivered
    pub fn abort(&self) {
        self.task.abort();
    }

    /// Whether the timer has fired (or been aborted)
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Handle to an in-flight key generation
///
/// Holds the worker task so the generation can be aborted when the user
/// navigates away before it finishes.
pub struct KeyGeneration {
    /// Booking the key is being generated for
    pub booking_id: String,
    worker: JoinHandle<()>,
}

impl KeyGeneration {
    /// Whether the worker has finished (completed or aborted)
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }
}

impl ServiceHandle {
    /// Create a new service handle
    ///
    /// Initializes GarajiService with default configuration and creates
    /// a tokio runtime for async operations.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - GarajiService initialization fails
    /// - Tokio runtime cannot be created
    pub fn new() -> Result<Self> {
        let service = GarajiService::new()?;
        Self::with_service(service)
    }

    /// Create a service handle with custom configuration
    ///
    /// Useful for tests that need short timer delays.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn from_config(config: Config) -> Result<Self> {
        Self::with_service(GarajiService::from_config(config))
    }

    fn with_service(service: GarajiService) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        Ok(Self {
            service: Arc::new(service),
            runtime,
        })
    }

    /// Snapshot of every listed space
    pub fn listings(&self) -> Vec<Listing> {
        self.service.catalog().all().to_vec()
    }

    /// Pricing configuration used to render order totals
    pub fn booking_config(&self) -> BookingConfig {
        self.service.config().booking.clone()
    }

    /// Subscribe to service events
    ///
    /// Returns a receiver that will receive all service events.
    /// This bridges the tokio broadcast channel to a crossbeam channel for sync use.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use garaji_tui::services::ServiceHandle;
    /// # fn example() -> garaji_tui::error::Result<()> {
    /// let services = ServiceHandle::new()?;
    /// let event_rx = services.subscribe();
    ///
    /// // In event loop, check for events
    /// if let Ok(event) = event_rx.try_recv() {
    ///     // Handle event
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn subscribe(&self) -> Receiver<Event> {
        let (tx, rx) = unbounded();

        // Spawn task to bridge tokio broadcast -> crossbeam channel
        let mut event_rx = self.service.subscribe();
        self.runtime.spawn(async move {
            loop {
                match event_rx.recv().await {
                    Ok(event) => {
                        // Forward event to crossbeam channel
                        if tx.send(event).is_err() {
                            // Receiver dropped, stop forwarding
                            break;
                        }
                    }
                    Err(e) => match e {
                        tokio::sync::broadcast::error::RecvError::Lagged(skipped) => {
                            // Warn about lagging but continue
                            tracing::warn!("Event receiver lagged, skipped {} events", skipped);
                        }
                        tokio::sync::broadcast::error::RecvError::Closed => {
                            // Channel closed, stop
                            break;
                        }
                    },
                }
            }
        });

        rx
    }

    /// Create a booking for the given listing
    ///
    /// Booking creation has no I/O, so this is a direct synchronous call.
    /// Failures (unknown or unavailable listing) are returned for the caller
    /// to surface.
    pub fn create_booking(&self, listing_id: &str) -> libgaraji::Result<Booking> {
        self.service.booking().create(listing_id)
    }

    /// Start the splash timer
    ///
    /// Spawns a task that sleeps for the configured splash duration, then
    /// sends a single completion. The returned handle can abort the timer.
    pub fn start_splash(&self) -> (TimerHandle, Receiver<()>) {
        let (tx, rx) = unbounded();
        let duration = Duration::from_millis(self.service.config().timing.splash_ms);

        let task = self.runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = tx.send(());
        });

        (TimerHandle { task }, rx)
    }

    /// Start key generation for a booking
    ///
    /// Spawns the generation worker and returns immediately with:
    /// - A handle for aborting the worker
    /// - A receiver for this generation's events
    ///
    /// The final event on the channel will be either `KeyGenerationCompleted`
    /// or (after `cancel_key_generation`) `KeyGenerationCancelled`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use garaji_tui::services::ServiceHandle;
    /// # fn example() -> garaji_tui::error::Result<()> {
    /// let services = ServiceHandle::new()?;
    ///
    /// let (generation, events_rx) = services.start_key_generation("k3x9m2p1q".to_string());
    ///
    /// // In event loop, check for progress
    /// if let Ok(event) = events_rx.try_recv() {
    ///     // Handle event
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn start_key_generation(&self, booking_id: String) -> (KeyGeneration, Receiver<Event>) {
        let (tx, rx) = unbounded();

        // Subscribe before spawning the worker so no event is missed
        let mut event_rx = self.service.subscribe();
        let id_for_filter = booking_id.clone();
        self.runtime.spawn(async move {
            while let Ok(event) = event_rx.recv().await {
                // Only forward events related to this generation
                let (matches, terminal) = match &event {
                    Event::KeyGenerationStarted { booking_id } => {
                        (booking_id == &id_for_filter, false)
                    }
                    Event::KeyGenerationCompleted { booking_id } => {
                        (booking_id == &id_for_filter, true)
                    }
                    Event::KeyGenerationCancelled { booking_id } => {
                        (booking_id == &id_for_filter, true)
                    }
                    Event::BookingCreated { .. } => (false, false),
                };

                if matches {
                    if tx.send(event).is_err() {
                        // Receiver dropped, stop
                        break;
                    }
                    if terminal {
                        break;
                    }
                }
            }
        });

        let service = Arc::clone(&self.service);
        let id_for_worker = booking_id.clone();
        let worker = self.runtime.spawn(async move {
            service.access().generate_key(id_for_worker).await;
        });

        (
            KeyGeneration {
                booking_id,
                worker,
            },
            rx,
        )
    }

    /// Cancel an in-flight key generation
    ///
    /// Aborts the worker so it never completes, then reports the
    /// cancellation; subscribers (including the generation's own channel)
    /// receive `KeyGenerationCancelled` as the terminal event.
    pub fn cancel_key_generation(&self, generation: KeyGeneration) {
        generation.worker.abort();
        self.service.access().cancel(&generation.booking_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_handle() -> ServiceHandle {
        let mut config = Config::default();
        config.timing.splash_ms = 10;
        config.timing.key_generation_ms = 10;
        ServiceHandle::from_config(config).unwrap()
    }

    #[test]
    fn test_service_handle_creation() {
        // Default config path may or may not exist; either way the handle
        // construction path must not panic
        let result = ServiceHandle::new();
        assert!(result.is_ok() || result.is_err());
    }

    #[test]
    fn test_listings_snapshot() {
        let services = fast_handle();
        let listings = services.listings();
        assert_eq!(listings.len(), 4);
    }

    #[test]
    fn test_create_booking() {
        let services = fast_handle();
        let booking = services.create_booking("1").unwrap();
        assert_eq!(booking.listing_id, "1");
    }

    #[test]
    fn test_create_booking_unavailable() {
        let services = fast_handle();
        assert!(services.create_booking("3").is_err());
    }

    #[test]
    fn test_splash_timer_fires() {
        let services = fast_handle();
        let (_timer, rx) = services.start_splash();

        rx.recv_timeout(Duration::from_secs(1)).unwrap();
    }

    #[test]
    fn test_aborted_splash_never_fires() {
        let mut config = Config::default();
        config.timing.splash_ms = 5_000;
        let services = ServiceHandle::from_config(config).unwrap();

        let (timer, rx) = services.start_splash();
        timer.abort();

        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn test_key_generation_completes() {
        let services = fast_handle();
        let (generation, rx) = services.start_key_generation("bk1".to_string());

        match rx.recv_timeout(Duration::from_secs(1)).unwrap() {
            Event::KeyGenerationStarted { booking_id } => assert_eq!(booking_id, "bk1"),
            other => panic!("Unexpected event: {:?}", other),
        }
        match rx.recv_timeout(Duration::from_secs(1)).unwrap() {
            Event::KeyGenerationCompleted { booking_id } => assert_eq!(booking_id, "bk1"),
            other => panic!("Unexpected event: {:?}", other),
        }

        // Worker wraps up once its events are out
        while !generation.is_finished() {
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_cancelled_generation_reports_cancellation() {
        let mut config = Config::default();
        config.timing.key_generation_ms = 5_000;
        let services = ServiceHandle::from_config(config).unwrap();

        let (generation, rx) = services.start_key_generation("bk2".to_string());

        match rx.recv_timeout(Duration::from_secs(1)).unwrap() {
            Event::KeyGenerationStarted { booking_id } => assert_eq!(booking_id, "bk2"),
            other => panic!("Unexpected event: {:?}", other),
        }

        services.cancel_key_generation(generation);

        match rx.recv_timeout(Duration::from_secs(1)).unwrap() {
            Event::KeyGenerationCancelled { booking_id } => assert_eq!(booking_id, "bk2"),
            other => panic!("Unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_generation_channel_filters_other_bookings() {
        let services = fast_handle();
        let (_generation, rx) = services.start_key_generation("bk3".to_string());

        // A booking created mid-generation must not leak into this channel
        let _ = services.create_booking("1").unwrap();

        match rx.recv_timeout(Duration::from_secs(1)).unwrap() {
            Event::KeyGenerationStarted { booking_id } => assert_eq!(booking_id, "bk3"),
            other => panic!("Unexpected event: {:?}", other),
        }
        match rx.recv_timeout(Duration::from_secs(1)).unwrap() {
            Event::KeyGenerationCompleted { booking_id } => assert_eq!(booking_id, "bk3"),
            other => panic!("Unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_subscribe_sees_booking_events() {
        let services = fast_handle();
        let rx = services.subscribe();

        let booking = services.create_booking("2").unwrap();

        match rx.recv_timeout(Duration::from_secs(1)).unwrap() {
            Event::BookingCreated { booking_id, .. } => assert_eq!(booking_id, booking.id),
            other => panic!("Unexpected event: {:?}", other),
        }
    }
}

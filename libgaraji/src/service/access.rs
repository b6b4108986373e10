//! Access service for dynamic entry keys
//!
//! This module decides when a booking's access code may be shown and runs the
//! simulated secure key generation that precedes revealing it.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

use super::events::{Event, EventBus};
use crate::{Booking, BookingStatus, Config};

/// Access service
///
/// Gates access-code visibility by booking status and performs key
/// generation. Generation is a timed simulation; the code itself is minted
/// when the booking is created.
#[derive(Clone)]
pub struct AccessService {
    config: Arc<Config>,
    event_bus: EventBus,
}

impl AccessService {
    /// Create a new access service
    pub fn new(config: Arc<Config>, event_bus: EventBus) -> Self {
        Self { config, event_bus }
    }

    /// Whether the booking's access code may be generated and shown
    ///
    /// Only active rentals are accessible. Upcoming bookings stay locked
    /// until their session starts; completed ones stay locked for good.
    pub fn is_accessible(&self, booking: &Booking) -> bool {
        booking.status == BookingStatus::Active
    }

    /// Generate the access key for a booking
    ///
    /// Emits `KeyGenerationStarted`, waits the configured generation delay,
    /// then emits `KeyGenerationCompleted`. Callers run this on a task so the
    /// wait can be aborted; an aborted run emits no completion event.
    pub async fn generate_key(&self, booking_id: String) {
        info!(booking_id = %booking_id, "Key generation started");
        self.event_bus.emit(Event::KeyGenerationStarted {
            booking_id: booking_id.clone(),
        });

        sleep(Duration::from_millis(self.config.timing.key_generation_ms)).await;

        info!(booking_id = %booking_id, "Key generation completed");
        self.event_bus
            .emit(Event::KeyGenerationCompleted { booking_id });
    }

    /// Report that an in-flight key generation was cancelled
    ///
    /// Called after aborting the generation task, so subscribers see a
    /// terminal event for the operation.
    pub fn cancel(&self, booking_id: &str) {
        debug!(booking_id = %booking_id, "Key generation cancelled");
        self.event_bus.emit(Event::KeyGenerationCancelled {
            booking_id: booking_id.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::new_booking;
    use crate::Catalog;

    fn fast_config() -> Arc<Config> {
        let mut config = Config::default();
        config.timing.key_generation_ms = 10;
        Arc::new(config)
    }

    fn sample_booking() -> Booking {
        let catalog = Catalog::new();
        new_booking(catalog.get("1").unwrap(), 2)
    }

    #[test]
    fn test_active_booking_is_accessible() {
        let service = AccessService::new(fast_config(), EventBus::new(10));
        let booking = sample_booking();

        assert_eq!(booking.status, BookingStatus::Active);
        assert!(service.is_accessible(&booking));
    }

    #[test]
    fn test_upcoming_booking_is_locked() {
        let service = AccessService::new(fast_config(), EventBus::new(10));
        let mut booking = sample_booking();
        booking.status = BookingStatus::Upcoming;

        assert!(!service.is_accessible(&booking));
    }

    #[test]
    fn test_completed_booking_is_locked() {
        let service = AccessService::new(fast_config(), EventBus::new(10));
        let mut booking = sample_booking();
        booking.status = BookingStatus::Completed;

        assert!(!service.is_accessible(&booking));
    }

    #[tokio::test]
    async fn test_generate_key_emits_started_then_completed() {
        let event_bus = EventBus::new(10);
        let mut rx = event_bus.subscribe();
        let service = AccessService::new(fast_config(), event_bus);

        service.generate_key("bk123".to_string()).await;

        match rx.recv().await.unwrap() {
            Event::KeyGenerationStarted { booking_id } => assert_eq!(booking_id, "bk123"),
            other => panic!("Unexpected event: {:?}", other),
        }
        match rx.recv().await.unwrap() {
            Event::KeyGenerationCompleted { booking_id } => assert_eq!(booking_id, "bk123"),
            other => panic!("Unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_aborted_generation_never_completes() {
        let mut config = Config::default();
        config.timing.key_generation_ms = 5_000;
        let event_bus = EventBus::new(10);
        let mut rx = event_bus.subscribe();
        let service = AccessService::new(Arc::new(config), event_bus);

        let task = tokio::spawn({
            let service = service.clone();
            async move { service.generate_key("bk456".to_string()).await }
        });

        // Let the task emit its start event, then abort mid-wait
        match rx.recv().await.unwrap() {
            Event::KeyGenerationStarted { booking_id } => assert_eq!(booking_id, "bk456"),
            other => panic!("Unexpected event: {:?}", other),
        }
        task.abort();
        assert!(task.await.unwrap_err().is_cancelled());

        service.cancel("bk456");
        match rx.recv().await.unwrap() {
            Event::KeyGenerationCancelled { booking_id } => assert_eq!(booking_id, "bk456"),
            other => panic!("Unexpected event: {:?}", other),
        }
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_cancel_emits_cancelled() {
        let event_bus = EventBus::new(10);
        let mut rx = event_bus.subscribe();
        let service = AccessService::new(fast_config(), event_bus);

        service.cancel("bk789");

        match rx.recv().await.unwrap() {
            Event::KeyGenerationCancelled { booking_id } => assert_eq!(booking_id, "bk789"),
            other => panic!("Unexpected event: {:?}", other),
        }
    }
}

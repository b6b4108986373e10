//! Event system for progress tracking
//!
//! This module provides an in-process event bus for distributing progress
//! events to subscribers without blocking operations.
//!
//! # Architecture
//!
//! The event bus uses `tokio::sync::broadcast` for multi-subscriber support.
//! Events are emitted by services during operations and can be consumed by
//! any number of subscribers (TUI updates, log sinks, etc.).
//!
//! # Non-Blocking Behavior
//!
//! If no subscribers exist, events are dropped immediately without allocation
//! or blocking. Subscribers can lag without blocking emitters.
//!
//! # Example
//!
//! ```no_run
//! use libgaraji::service::events::{EventBus, Event};
//!
//! # async fn example() {
//! let event_bus = EventBus::new(100);
//!
//! // Subscribe to events
//! let mut receiver = event_bus.subscribe();
//!
//! // Emit events (non-blocking)
//! event_bus.emit(Event::KeyGenerationStarted {
//!     booking_id: "k3x9m2p1q".to_string(),
//! });
//!
//! // Receive events
//! if let Ok(event) = receiver.recv().await {
//!     println!("Received: {:?}", event);
//! }
//! # }
//! ```

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Event receiver type alias
pub type EventReceiver = broadcast::Receiver<Event>;

/// Event bus for distributing progress events
///
/// The event bus uses a broadcast channel to distribute events to multiple
/// subscribers. Events are dropped if no subscribers exist, ensuring
/// non-blocking behavior.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    /// Create a new event bus with the specified capacity
    ///
    /// The capacity determines how many events can be buffered per subscriber
    /// before older events are dropped (if the subscriber is lagging).
    ///
    /// # Arguments
    ///
    /// * `capacity` - Buffer capacity per subscriber (recommended: 100)
    ///
    /// # Example
    ///
    /// ```
    /// use libgaraji::service::events::EventBus;
    ///
    /// let event_bus = EventBus::new(100);
    /// ```
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events
    ///
    /// Returns a receiver that will receive all events emitted after
    /// subscription. Multiple subscribers are supported.
    ///
    /// # Example
    ///
    /// ```
    /// use libgaraji::service::events::EventBus;
    ///
    /// let event_bus = EventBus::new(100);
    /// let mut receiver1 = event_bus.subscribe();
    /// let mut receiver2 = event_bus.subscribe();
    /// ```
    pub fn subscribe(&self) -> EventReceiver {
        self.sender.subscribe()
    }

    /// Emit an event to all subscribers
    ///
    /// This is a non-blocking operation. If no subscribers exist, the event
    /// is dropped immediately. If subscribers are lagging, they may miss
    /// events (oldest events are dropped first).
    ///
    /// # Arguments
    ///
    /// * `event` - The event to emit
    ///
    /// # Example
    ///
    /// ```
    /// use libgaraji::service::events::{EventBus, Event};
    ///
    /// let event_bus = EventBus::new(100);
    /// event_bus.emit(Event::KeyGenerationStarted {
    ///     booking_id: "k3x9m2p1q".to_string(),
    /// });
    /// ```
    pub fn emit(&self, event: Event) {
        // send() returns Err if no receivers exist, which is fine
        // We don't want to block or fail if nobody is listening
        let _ = self.sender.send(event);
    }

    /// Get the number of active subscribers
    ///
    /// This is useful for debugging or metrics, but should not be used
    /// for control flow decisions.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Events emitted by services during operations
///
/// All events are cloneable and serializable for flexibility in how
/// they're consumed (logging, UI updates, etc.).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A booking was created from a listing
    BookingCreated {
        /// Unique identifier for the booking
        booking_id: String,
        /// Listing the booking was made against
        listing_id: String,
    },

    /// Access key generation started for a booking
    KeyGenerationStarted {
        /// Unique identifier for the booking
        booking_id: String,
    },

    /// Access key generation completed; the code can be revealed
    KeyGenerationCompleted {
        /// Unique identifier for the booking
        booking_id: String,
    },

    /// Access key generation was cancelled before completion
    KeyGenerationCancelled {
        /// Unique identifier for the booking
        booking_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_emission_and_subscription() {
        let event_bus = EventBus::new(10);
        let mut receiver = event_bus.subscribe();

        let event = Event::BookingCreated {
            booking_id: "test123".to_string(),
            listing_id: "1".to_string(),
        };

        event_bus.emit(event.clone());

        let received = receiver.recv().await.unwrap();
        match received {
            Event::BookingCreated {
                booking_id,
                listing_id,
            } => {
                assert_eq!(booking_id, "test123");
                assert_eq!(listing_id, "1");
            }
            _ => panic!("Wrong event type received"),
        }
    }

    #[tokio::test]
    async fn test_multiple_subscribers() {
        let event_bus = EventBus::new(10);
        let mut receiver1 = event_bus.subscribe();
        let mut receiver2 = event_bus.subscribe();

        let event = Event::KeyGenerationStarted {
            booking_id: "test456".to_string(),
        };

        event_bus.emit(event.clone());

        // Both receivers should get the event
        let received1 = receiver1.recv().await.unwrap();
        let received2 = receiver2.recv().await.unwrap();

        match (received1, received2) {
            (
                Event::KeyGenerationStarted { booking_id: id1 },
                Event::KeyGenerationStarted { booking_id: id2 },
            ) => {
                assert_eq!(id1, "test456");
                assert_eq!(id2, "test456");
            }
            _ => panic!("Wrong event types received"),
        }
    }

    #[tokio::test]
    async fn test_no_subscribers() {
        let event_bus = EventBus::new(10);

        // Emit event with no subscribers - should not panic or block
        event_bus.emit(Event::KeyGenerationCompleted {
            booking_id: "test789".to_string(),
        });

        // Verify subscriber count is 0
        assert_eq!(event_bus.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_event_serialization() {
        let event = Event::KeyGenerationCancelled {
            booking_id: "serial_test".to_string(),
        };

        // Serialize to JSON
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("key_generation_cancelled"));
        assert!(json.contains("serial_test"));

        // Deserialize back
        let deserialized: Event = serde_json::from_str(&json).unwrap();
        match deserialized {
            Event::KeyGenerationCancelled { booking_id } => {
                assert_eq!(booking_id, "serial_test");
            }
            _ => panic!("Deserialization failed"),
        }
    }

    #[tokio::test]
    async fn test_subscriber_count() {
        let event_bus = EventBus::new(10);
        assert_eq!(event_bus.subscriber_count(), 0);

        let _receiver1 = event_bus.subscribe();
        assert_eq!(event_bus.subscriber_count(), 1);

        let _receiver2 = event_bus.subscribe();
        assert_eq!(event_bus.subscriber_count(), 2);

        drop(_receiver1);
        // Note: subscriber count may not update immediately after drop
        // This is a limitation of broadcast channels
    }

    #[tokio::test]
    async fn test_all_event_variants() {
        let event_bus = EventBus::new(10);
        let mut receiver = event_bus.subscribe();

        // Test BookingCreated
        event_bus.emit(Event::BookingCreated {
            booking_id: "1".to_string(),
            listing_id: "1".to_string(),
        });
        assert!(matches!(
            receiver.recv().await.unwrap(),
            Event::BookingCreated { .. }
        ));

        // Test KeyGenerationStarted
        event_bus.emit(Event::KeyGenerationStarted {
            booking_id: "2".to_string(),
        });
        assert!(matches!(
            receiver.recv().await.unwrap(),
            Event::KeyGenerationStarted { .. }
        ));

        // Test KeyGenerationCompleted
        event_bus.emit(Event::KeyGenerationCompleted {
            booking_id: "3".to_string(),
        });
        assert!(matches!(
            receiver.recv().await.unwrap(),
            Event::KeyGenerationCompleted { .. }
        ));

        // Test KeyGenerationCancelled
        event_bus.emit(Event::KeyGenerationCancelled {
            booking_id: "4".to_string(),
        });
        assert!(matches!(
            receiver.recv().await.unwrap(),
            Event::KeyGenerationCancelled { .. }
        ));
    }
}

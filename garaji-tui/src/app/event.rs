//! Event handling infrastructure
//!
//! Polls terminal events (keyboard, resize, tick). Service events arrive
//! through the crossbeam bridges owned by the event loop (see `services`).

use crate::app::Action;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;

/// TUI events that can be dispatched
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Keyboard input
    Key(KeyEvent),

    /// Terminal resize
    Resize(u16, u16),

    /// Periodic tick for animations/progress
    Tick,
}

impl From<TuiEvent> for Action {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Key(key) => Action::Key(key),
            TuiEvent::Resize(w, h) => Action::Resize(w, h),
            TuiEvent::Tick => Action::Tick,
        }
    }
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event, blocking up to tick_rate duration
    ///
    /// A timeout produces a Tick so animations keep moving.
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        // Poll for events with timeout
        if event::poll(self.tick_rate)? {
            match event::read()? {
                // Windows terminals report both press and release
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    Ok(TuiEvent::Key(key))
                }
                CrosstermEvent::Resize(w, h) => Ok(TuiEvent::Resize(w, h)),
                _ => Ok(TuiEvent::Tick), // Ignore other events
            }
        } else {
            // Timeout - generate tick
            Ok(TuiEvent::Tick)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_handler_creation() {
        let handler = EventHandler::new(100);
        assert_eq!(handler.tick_rate, Duration::from_millis(100));
    }

    #[test]
    fn test_custom_tick_rate() {
        let handler = EventHandler::new(250);
        assert_eq!(handler.tick_rate, Duration::from_millis(250));
    }

    #[test]
    fn test_key_event_maps_to_key_action() {
        use crossterm::event::{KeyCode, KeyModifiers};

        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let action: Action = TuiEvent::Key(key).into();
        assert!(matches!(action, Action::Key(_)));
    }

    #[test]
    fn test_tick_maps_to_tick_action() {
        let action: Action = TuiEvent::Tick.into();
        assert!(matches!(action, Action::Tick));
    }
}

//! garaji-tui - Terminal UI for Garaji
//!
//! Interactive terminal interface for renting garage and parking spaces.
//! Browse nearby listings, book a space, and generate access codes from
//! an SSH-friendly TUI.

use crossbeam_channel::Receiver;
use garaji_tui::{
    app::{event::EventHandler, reduce, Action, AppState},
    error::Result,
    services::{KeyGeneration, ServiceHandle},
    terminal::{install_panic_hook, restore_terminal, setup_terminal},
    ui,
};
use libgaraji::logging::{LogFormat, LoggingConfig};
use libgaraji::service::events::Event;

fn main() -> Result<()> {
    // Logs go to stderr; redirect to a file to keep the alternate screen clean
    init_logging();

    // Install panic hook to restore terminal on panic
    install_panic_hook();

    // Setup terminal
    let mut terminal = setup_terminal()?;

    // Run the application
    let result = run_app(&mut terminal);

    // Restore terminal
    restore_terminal(terminal)?;

    result
}

/// Quiet by default; `GARAJI_LOG_LEVEL`/`GARAJI_LOG_FORMAT` override
fn init_logging() {
    let format = std::env::var("GARAJI_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LogFormat::Text);
    let level = std::env::var("GARAJI_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

    LoggingConfig::new(format, level, false).init();
}

fn run_app(terminal: &mut garaji_tui::terminal::Tui) -> Result<()> {
    // Initialize application state
    let mut state = AppState::new();

    // Initialize service layer
    let services = ServiceHandle::new()?;

    // Seed state from the service layer
    state.listings = services.listings();
    state.pricing = services.booking_config();

    // Splash timer drives the transition to Home
    let (_splash_timer, splash_rx) = services.start_splash();

    // At most one key generation runs at a time
    let mut key_generation: Option<(KeyGeneration, Receiver<Event>)> = None;

    // Create event handler with tick rate from config
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    // Main event loop
    loop {
        // Render UI
        terminal.draw(|frame| {
            ui::render(frame, &state);
        })?;

        // Handle events
        let tui_event = event_handler.next()?;
        state = reduce(state, tui_event.into());

        // Splash completion
        while splash_rx.try_recv().is_ok() {
            state = reduce(state, Action::SplashElapsed);
        }

        // Key generation progress
        if let Some((_, ref rx)) = key_generation {
            let mut done = false;
            while let Ok(event) = rx.try_recv() {
                let action = match event {
                    Event::KeyGenerationStarted { .. } => {
                        // Already reflected in state when the generation began
                        continue;
                    }
                    Event::KeyGenerationCompleted { booking_id } => {
                        done = true;
                        Action::KeyGenerationCompleted { booking_id }
                    }
                    Event::KeyGenerationCancelled { booking_id } => {
                        done = true;
                        Action::KeyGenerationCancelled { booking_id }
                    }
                    Event::BookingCreated { .. } => continue,
                };

                state = reduce(state, action);
            }
            if done {
                key_generation = None;
            }
        }

        // Payment intent: booking creation is synchronous
        if state.payment.confirming {
            let action = match state.selected_listing().map(|l| l.id.clone()) {
                Some(listing_id) => match services.create_booking(&listing_id) {
                    Ok(booking) => Action::BookingCreated(booking),
                    Err(e) => Action::BookingFailed {
                        error: e.to_string(),
                    },
                },
                None => Action::BookingFailed {
                    error: "No listing selected".to_string(),
                },
            };

            state = reduce(state, action);
        }

        // Reconcile the running generation against the intent in state
        key_generation = match (state.access.generating.clone(), key_generation) {
            (Some(id), Some((generation, rx))) => {
                if generation.booking_id == id {
                    Some((generation, rx))
                } else {
                    // Intent moved to another booking
                    services.cancel_key_generation(generation);
                    Some(services.start_key_generation(id))
                }
            }
            (Some(id), None) => Some(services.start_key_generation(id)),
            (None, Some((generation, _rx))) => {
                // State no longer wants this generation; abort it
                services.cancel_key_generation(generation);
                None
            }
            (None, None) => None,
        };

        // Check if we should quit
        if state.should_quit {
            break;
        }
    }

    Ok(())
}

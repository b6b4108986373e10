//! Pure reducer function for state transitions
//!
//! Following functional programming principles, the reducer is a pure function:
//! `(State, Action) -> State`
//!
//! The reducer has NO side effects - it only computes new state values.
//! All business logic and I/O happens outside the reducer.

use super::actions::{Action, Screen};
use super::state::{AccessState, AppState, HomeState, PaymentState, StatusBarState};
use crossterm::event::{KeyCode, KeyModifiers};
use libgaraji::{BookingStatus, CategoryFilter};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
/// This function is completely pure - no I/O, no side effects.
///
/// # Purity Guarantees
///
/// - No timers or task spawns
/// - No file I/O
/// - No mutations (returns new state)
/// - Deterministic (same inputs -> same output)
///
/// Operations with side effects (booking creation, key generation) are
/// recorded as intent in state (`payment.confirming`, `access.generating`);
/// the event loop reconciles running tasks against that intent and feeds
/// outcomes back as actions.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),

        Action::Tick => AppState {
            tick_count: state.tick_count.wrapping_add(1),
            ..state
        },

        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Navigation ===
        Action::NavigateTo(screen) => navigate_to(state, screen),

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::SplashElapsed => {
            // The splash timer fires exactly once; if the user already left
            // the splash somehow, the elapsed signal must not yank them back
            if state.current_screen == Screen::Splash {
                navigate_to(state, Screen::Home)
            } else {
                state
            }
        }

        // === Home Actions ===
        Action::HomeNextListing => {
            let count = state.filtered_listings().len();
            let cursor = if count == 0 {
                0
            } else {
                (state.home.cursor + 1).min(count - 1)
            };
            AppState {
                home: HomeState {
                    cursor,
                    ..state.home
                },
                ..state
            }
        }

        Action::HomePrevListing => AppState {
            home: HomeState {
                cursor: state.home.cursor.saturating_sub(1),
                ..state.home
            },
            ..state
        },

        Action::HomeNextFilter => {
            let filter = cycle_filter(state.home.filter, 1);
            AppState {
                home: HomeState { filter, cursor: 0 },
                ..state
            }
        }

        Action::HomePrevFilter => {
            let filter = cycle_filter(state.home.filter, -1);
            AppState {
                home: HomeState { filter, cursor: 0 },
                ..state
            }
        }

        Action::HomeSelect => match state.cursor_listing() {
            Some(listing) => {
                let id = listing.id.clone();
                navigate_to(
                    AppState {
                        selected_listing_id: Some(id),
                        ..state
                    },
                    Screen::Details,
                )
            }
            None => state,
        },

        // === Booking Actions ===
        Action::BookRequested => {
            if state.can_book() {
                navigate_to(
                    AppState {
                        payment: PaymentState::default(),
                        ..state
                    },
                    Screen::Payment,
                )
            } else {
                state
            }
        }

        Action::PaymentConfirmed => {
            if !state.payment.confirming && state.selected_listing().is_some() {
                AppState {
                    payment: PaymentState { confirming: true },
                    ..state
                }
            } else {
                state
            }
        }

        Action::BookingCreated(booking) => {
            let mut bookings = state.bookings;
            bookings.insert(0, booking);
            let state = navigate_to(
                AppState {
                    bookings,
                    payment: PaymentState::default(),
                    access: AccessState {
                        cursor: 0,
                        ..state.access
                    },
                    ..state
                },
                Screen::Success,
            );
            AppState {
                status: StatusBarState {
                    message: Some("Booking confirmed!".to_string()),
                },
                ..state
            }
        }

        Action::BookingFailed { error } => AppState {
            payment: PaymentState::default(),
            error: Some(error),
            ..state
        },

        // === Access Actions ===
        Action::AccessNextBooking => {
            let count = state.bookings.len();
            let cursor = if count == 0 {
                0
            } else {
                (state.access.cursor + 1).min(count - 1)
            };
            AppState {
                access: AccessState {
                    cursor,
                    ..state.access
                },
                ..state
            }
        }

        Action::AccessPrevBooking => AppState {
            access: AccessState {
                cursor: state.access.cursor.saturating_sub(1),
                ..state.access
            },
            ..state
        },

        Action::GenerateKeyRequested => {
            // One generation at a time; already-revealed and locked bookings
            // are not regenerated
            if state.access.generating.is_some() {
                return state;
            }
            let request = state.cursor_booking().and_then(|b| {
                if b.status == BookingStatus::Active && !state.access.revealed.contains(&b.id) {
                    Some(b.id.clone())
                } else {
                    None
                }
            });
            match request {
                Some(id) => AppState {
                    access: AccessState {
                        generating: Some(id),
                        ..state.access
                    },
                    ..state
                },
                None => state,
            }
        }

        Action::KeyGenerationCompleted { booking_id } => {
            if state.access.generating.as_deref() == Some(booking_id.as_str()) {
                let mut revealed = state.access.revealed;
                revealed.insert(booking_id);
                AppState {
                    access: AccessState {
                        generating: None,
                        revealed,
                        ..state.access
                    },
                    ..state
                }
            } else {
                // Stale completion (generation was cancelled or superseded)
                state
            }
        }

        Action::KeyGenerationCancelled { booking_id } => {
            if state.access.generating.as_deref() == Some(booking_id.as_str()) {
                AppState {
                    access: AccessState {
                        generating: None,
                        ..state.access
                    },
                    ..state
                }
            } else {
                state
            }
        }

        // === Error Handling ===
        Action::ShowError(error) => AppState {
            error: Some(error),
            ..state
        },

        Action::DismissError => AppState {
            error: None,
            ..state
        },

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },
    }
}

/// Switch screens, tearing down transient state the screen owned
///
/// Leaving the access screen abandons any in-flight key generation; the
/// event loop aborts the matching task when it sees the cleared intent.
/// A lingering status message belongs to the screen that set it and is
/// dropped on the way out.
fn navigate_to(state: AppState, screen: Screen) -> AppState {
    let leaving_access = state.current_screen == Screen::Access && screen != Screen::Access;
    let access = if leaving_access && state.access.generating.is_some() {
        AccessState {
            generating: None,
            ..state.access
        }
    } else {
        state.access.clone()
    };
    AppState {
        current_screen: screen,
        access,
        status: StatusBarState { message: None },
        ..state
    }
}

/// Cycle the category filter by the given offset
fn cycle_filter(current: CategoryFilter, offset: isize) -> CategoryFilter {
    let filters = CategoryFilter::ALL;
    let len = filters.len() as isize;
    let index = filters
        .iter()
        .position(|f| *f == current)
        .unwrap_or(0) as isize;
    let next = (index + offset).rem_euclid(len) as usize;
    filters[next]
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) if !state.payment.confirming => {
            return reduce(state, Action::Quit);
        }

        // Help
        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }

        // Dismiss error
        (KeyCode::Esc, _) if state.error.is_some() => {
            return reduce(state, Action::DismissError);
        }

        // Hide help
        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }

        _ => {}
    }

    // Bottom navigation (only on screens that show the nav bar)
    if state.current_screen.has_nav_bar() {
        match key.code {
            KeyCode::F(2) => return reduce(state, Action::NavigateTo(Screen::Home)),
            KeyCode::F(3) => return reduce(state, Action::NavigateTo(Screen::Access)),
            KeyCode::F(4) => return reduce(state, Action::NavigateTo(Screen::Add)),
            KeyCode::F(5) => return reduce(state, Action::NavigateTo(Screen::Profile)),
            _ => {}
        }
    }

    // Overlays swallow everything else
    if state.help_visible || state.error.is_some() {
        return state;
    }

    // Screen-specific keybindings
    match state.current_screen {
        Screen::Splash => state,
        Screen::Home => handle_home_key(state, key),
        Screen::Details => handle_details_key(state, key),
        Screen::Payment => handle_payment_key(state, key),
        Screen::Success => handle_success_key(state, key),
        Screen::Access => handle_access_key(state, key),
        Screen::Add => handle_add_key(state, key),
        Screen::Profile | Screen::Booking | Screen::Messages => state,
    }
}

/// Handle home screen keys
fn handle_home_key(state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    match (key.code, key.modifiers) {
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            reduce(state, Action::HomeNextListing)
        }
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            reduce(state, Action::HomePrevListing)
        }
        (KeyCode::Right, _) | (KeyCode::Tab, _) => reduce(state, Action::HomeNextFilter),
        (KeyCode::Left, _) | (KeyCode::BackTab, _) => reduce(state, Action::HomePrevFilter),
        (KeyCode::Enter, _) => reduce(state, Action::HomeSelect),
        _ => state,
    }
}

/// Handle details screen keys
fn handle_details_key(state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => reduce(state, Action::NavigateTo(Screen::Home)),
        (KeyCode::Char('b'), KeyModifiers::NONE) => reduce(state, Action::BookRequested),
        _ => state,
    }
}

/// Handle payment screen keys
fn handle_payment_key(state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) if !state.payment.confirming => {
            reduce(state, Action::NavigateTo(Screen::Details))
        }
        (KeyCode::Enter, _) => reduce(state, Action::PaymentConfirmed),
        _ => state,
    }
}

/// Handle success screen keys
fn handle_success_key(state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    match (key.code, key.modifiers) {
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            reduce(state, Action::NavigateTo(Screen::Access))
        }
        (KeyCode::Esc, _) | (KeyCode::Char('h'), KeyModifiers::NONE) => {
            reduce(state, Action::NavigateTo(Screen::Home))
        }
        _ => state,
    }
}

/// Handle access screen keys
fn handle_access_key(state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    if state.bookings.is_empty() {
        // Empty state only offers "Find a Space"
        return match key.code {
            KeyCode::Enter => reduce(state, Action::NavigateTo(Screen::Home)),
            _ => state,
        };
    }

    match (key.code, key.modifiers) {
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            reduce(state, Action::AccessNextBooking)
        }
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            reduce(state, Action::AccessPrevBooking)
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) => reduce(state, Action::GenerateKeyRequested),
        _ => state,
    }
}

/// Handle list-your-space sheet keys
fn handle_add_key(state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    match key.code {
        KeyCode::Esc => reduce(state, Action::NavigateTo(Screen::Home)),
        _ => state,
    }
}

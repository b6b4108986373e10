//! End-to-end tests for the booking flow
//!
//! Drives the reducer through the browse, book, and pay sequence and
//! feeds service results back as actions the way the event loop does.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use garaji_tui::app::{reduce, Action, AppState, Screen};
use garaji_tui::services::ServiceHandle;
use libgaraji::Config;

fn key(state: AppState, code: KeyCode) -> AppState {
    reduce(state, Action::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn fast_services() -> ServiceHandle {
    let mut config = Config::default();
    config.timing.splash_ms = 10;
    config.timing.key_generation_ms = 10;
    ServiceHandle::from_config(config).unwrap()
}

#[test]
fn test_browse_book_pay_reaches_success() {
    let services = fast_services();

    let mut state = AppState::new();
    state = reduce(state, Action::SplashElapsed);
    assert_eq!(state.current_screen, Screen::Home);

    // Open the first listing and start booking
    state = key(state, KeyCode::Enter);
    assert_eq!(state.current_screen, Screen::Details);
    state = key(state, KeyCode::Char('b'));
    assert_eq!(state.current_screen, Screen::Payment);

    // Confirm and replay the loop's side effect
    state = key(state, KeyCode::Enter);
    assert!(state.payment.confirming);

    let listing_id = state.selected_listing_id.clone().unwrap();
    let booking = services.create_booking(&listing_id).unwrap();
    state = reduce(state, Action::BookingCreated(booking));

    assert_eq!(state.current_screen, Screen::Success);
    assert!(!state.payment.confirming);
    assert_eq!(state.bookings.len(), 1);
    assert_eq!(state.bookings[0].listing_id, listing_id);
    assert_eq!(state.status.message.as_deref(), Some("Booking confirmed!"));
}

#[test]
fn test_esc_backs_out_before_paying() {
    let mut state = AppState::new();
    state = reduce(state, Action::SplashElapsed);
    state = key(state, KeyCode::Enter);
    state = key(state, KeyCode::Char('b'));
    assert_eq!(state.current_screen, Screen::Payment);

    state = key(state, KeyCode::Esc);

    assert_eq!(state.current_screen, Screen::Details);
    assert!(!state.payment.confirming);
    assert!(state.bookings.is_empty());
}

#[test]
fn test_unavailable_listing_cannot_be_booked() {
    let mut state = AppState::new();
    state = reduce(state, Action::SplashElapsed);

    // Move the cursor to the seeded booked-out listing
    state = key(state, KeyCode::Down);
    state = key(state, KeyCode::Down);
    state = key(state, KeyCode::Enter);
    assert_eq!(state.current_screen, Screen::Details);
    assert_eq!(state.selected_listing_id.as_deref(), Some("3"));
    assert!(!state.can_book());

    state = key(state, KeyCode::Char('b'));
    assert_eq!(state.current_screen, Screen::Details);
}

#[test]
fn test_unavailable_listing_fails_at_the_service() {
    let services = fast_services();

    let err = services.create_booking("3").unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("The Bike Vault"));
}

#[test]
fn test_booking_failure_surfaces_error_overlay() {
    let services = fast_services();

    let mut state = AppState::new();
    state = reduce(state, Action::SplashElapsed);
    state.current_screen = Screen::Payment;
    state.selected_listing_id = Some("3".to_string());
    state.payment.confirming = true;

    // Replay the loop's side effect against the unavailable listing
    let err = services.create_booking("3").unwrap_err();
    state = reduce(
        state,
        Action::BookingFailed {
            error: err.to_string(),
        },
    );

    assert!(!state.payment.confirming);
    assert!(state.error.is_some());
    assert!(state.bookings.is_empty());

    // Esc clears the overlay
    state = key(state, KeyCode::Esc);
    assert!(state.error.is_none());
}

#[test]
fn test_repeat_bookings_stack_newest_first() {
    let services = fast_services();

    let mut state = AppState::new();
    state = reduce(state, Action::SplashElapsed);

    let first = services.create_booking("1").unwrap();
    let second = services.create_booking("2").unwrap();
    let second_id = second.id.clone();

    state = reduce(state, Action::BookingCreated(first));
    state = key(state, KeyCode::Char('h')); // back home from success
    state = reduce(state, Action::BookingCreated(second));

    assert_eq!(state.bookings.len(), 2);
    assert_eq!(state.bookings[0].id, second_id);
    assert_eq!(state.bookings[0].listing_id, "2");
}

#[test]
fn test_success_screen_offers_access_shortcut() {
    let services = fast_services();

    let mut state = AppState::new();
    state = reduce(state, Action::SplashElapsed);

    let booking = services.create_booking("1").unwrap();
    state = reduce(state, Action::BookingCreated(booking));
    assert_eq!(state.current_screen, Screen::Success);

    state = key(state, KeyCode::Char('g'));
    assert_eq!(state.current_screen, Screen::Access);
    assert_eq!(state.access.cursor, 0);
}

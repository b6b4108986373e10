//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! all possible actions that can modify application state.

use crossterm::event::KeyEvent;
use libgaraji::Booking;

/// Actions that trigger state transitions
///
/// Following functional programming principles, actions are immutable
/// data structures that describe what should happen. The reducer
/// (see `reducer.rs`) is responsible for applying actions to state.
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick for animations/progress updates
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Navigate to a different screen
    NavigateTo(Screen),

    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    /// Splash timer elapsed
    SplashElapsed,

    // === Home Actions ===
    /// Move the listing cursor down
    HomeNextListing,

    /// Move the listing cursor up
    HomePrevListing,

    /// Cycle to the next category filter
    HomeNextFilter,

    /// Cycle to the previous category filter
    HomePrevFilter,

    /// Open the details screen for the listing under the cursor
    HomeSelect,

    // === Booking Actions ===
    /// User requested to book the selected listing
    BookRequested,

    /// User confirmed payment for the selected listing
    PaymentConfirmed,

    /// Booking was created by the service
    BookingCreated(Booking),

    /// Booking creation failed
    BookingFailed {
        error: String,
    },

    // === Access Actions ===
    /// Move the booking cursor down
    AccessNextBooking,

    /// Move the booking cursor up
    AccessPrevBooking,

    /// User requested key generation for the booking under the cursor
    GenerateKeyRequested,

    /// Key generation finished; the code may be revealed
    KeyGenerationCompleted {
        booking_id: String,
    },

    /// Key generation was cancelled before finishing
    KeyGenerationCancelled {
        booking_id: String,
    },

    // === Error Handling ===
    /// Show error overlay
    ShowError(String),

    /// Dismiss error overlay
    DismissError,

    // === Status Bar ===
    /// Update status message
    SetStatus(String),

    /// Clear status message
    ClearStatus,
}

/// Screen/View identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Boot splash with the wordmark
    Splash,

    /// Listing browser with category filter
    Home,

    /// Full listing details
    Details,

    /// Booking management (declared, not yet reachable)
    Booking,

    /// Review and confirm a booking
    Payment,

    /// Booking confirmation
    Success,

    /// Access codes for booked spaces
    Access,

    /// Owner messaging (declared, not yet reachable)
    Messages,

    /// User profile and account menu
    Profile,

    /// List-your-space sheet
    Add,
}

impl Screen {
    /// Whether the bottom navigation bar is shown on this screen
    pub fn has_nav_bar(&self) -> bool {
        matches!(self, Screen::Home | Screen::Access | Screen::Profile)
    }
}

//! Application state
//!
//! Immutable state structure following functional programming principles.
//! All state transitions happen through the reducer (see `reducer.rs`).

use super::actions::Screen;
use libgaraji::config::BookingConfig;
use libgaraji::{Booking, Catalog, CategoryFilter, Listing};
use std::collections::HashSet;

/// Root application state
///
/// This is the single source of truth for the entire application.
/// State transitions are pure functions that return new state values.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Current active screen
    pub current_screen: Screen,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Every listed space, seeded at startup
    pub listings: Vec<Listing>,

    /// Home screen state
    pub home: HomeState,

    /// Listing opened on the details/payment screens
    pub selected_listing_id: Option<String>,

    /// Bookings made this session, newest first
    pub bookings: Vec<Booking>,

    /// Payment screen state
    pub payment: PaymentState,

    /// Access screen state
    pub access: AccessState,

    /// Status bar state
    pub status: StatusBarState,

    /// Error overlay state
    pub error: Option<String>,

    /// Ticks since boot, drives spinner animation
    pub tick_count: u64,

    /// Pricing used to render order totals
    pub pricing: BookingConfig,

    /// UI configuration
    pub config: UiConfig,
}

/// Home screen state
#[derive(Debug, Clone)]
pub struct HomeState {
    /// Active category filter
    pub filter: CategoryFilter,

    /// Cursor position within the filtered listing list
    pub cursor: usize,
}

/// Payment screen state
#[derive(Debug, Clone)]
pub struct PaymentState {
    /// Booking confirmation requested, creation pending
    pub confirming: bool,
}

/// Access screen state
#[derive(Debug, Clone)]
pub struct AccessState {
    /// Cursor position within the booking list
    pub cursor: usize,

    /// Booking id with a key generation in flight
    pub generating: Option<String>,

    /// Booking ids whose access codes have been revealed
    pub revealed: HashSet<String>,
}

/// Status bar state
#[derive(Debug, Clone)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            current_screen: Screen::Splash,
            help_visible: false,
            listings: Catalog::new().all().to_vec(),
            home: HomeState::default(),
            selected_listing_id: None,
            bookings: Vec::new(),
            payment: PaymentState::default(),
            access: AccessState::default(),
            status: StatusBarState::default(),
            error: None,
            tick_count: 0,
            pricing: BookingConfig::default(),
            config: UiConfig::default(),
        }
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            filter: CategoryFilter::All,
            cursor: 0,
        }
    }
}

impl Default for PaymentState {
    fn default() -> Self {
        Self { confirming: false }
    }
}

impl Default for AccessState {
    fn default() -> Self {
        Self {
            cursor: 0,
            generating: None,
            revealed: HashSet::new(),
        }
    }
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self { message: None }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        // Detect environment for sensible defaults
        let colors_enabled =
            std::env::var("NO_COLOR").is_err() && std::env::var("GARAJI_NO_COLOR").is_err();

        let unicode_enabled = colors_enabled; // Same heuristic for now

        let tick_rate_ms = std::env::var("GARAJI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            colors_enabled,
            unicode_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Listings matching the active category filter, catalog order
    pub fn filtered_listings(&self) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|l| self.home.filter.matches(l.category))
            .collect()
    }

    /// Listing under the home cursor, if any
    pub fn cursor_listing(&self) -> Option<&Listing> {
        self.filtered_listings().get(self.home.cursor).copied()
    }

    /// Listing opened on the details/payment screens
    pub fn selected_listing(&self) -> Option<&Listing> {
        let id = self.selected_listing_id.as_deref()?;
        self.listings.iter().find(|l| l.id == id)
    }

    /// Booking under the access cursor, if any
    pub fn cursor_booking(&self) -> Option<&Booking> {
        self.bookings.get(self.access.cursor)
    }

    /// Most recent booking (shown on the success screen)
    pub fn last_booking(&self) -> Option<&Booking> {
        self.bookings.first()
    }

    /// Check if booking is allowed (listing selected, available, not mid-payment)
    pub fn can_book(&self) -> bool {
        self.selected_listing()
            .map(|l| l.available)
            .unwrap_or(false)
            && !self.payment.confirming
    }
}

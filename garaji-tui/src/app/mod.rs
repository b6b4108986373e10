//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State
//!
//! This follows functional programming principles with immutable state
//! and pure functions for state transitions.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, Screen};
pub use reducer::reduce;
pub use state::{AccessState, AppState, HomeState, PaymentState, StatusBarState, UiConfig};

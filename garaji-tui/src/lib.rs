//! Garaji TUI - terminal user interface for garage and parking rentals
//!
//! Built on the Elm architecture: a single state tree, a pure reducer,
//! and rendering as a function of state. Side effects live in the event
//! loop, which reconciles running service tasks against the intent the
//! reducer records in state.

pub mod app;
pub mod error;
pub mod services;
pub mod terminal;
pub mod ui;

pub use app::{reduce, Action, AppState, Screen};
pub use error::{Result, TuiError};

//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! Following FP principles: render functions have no side effects.
//!
//! One module per screen; this module owns the frame chrome (nav bar,
//! status line, overlays) and the shared palette.

mod access;
mod add;
mod details;
mod home;
mod payment;
mod profile;
mod splash;
mod success;

use crate::app::{AppState, Screen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

// Brand palette
pub(crate) const PRIMARY: Color = Color::Rgb(0xFF, 0x6B, 0x4A);
pub(crate) const SECONDARY: Color = Color::Rgb(0x3A, 0x6E, 0xA5);
pub(crate) const MINT: Color = Color::Rgb(0x2E, 0xD3, 0xB7);
pub(crate) const STAR: Color = Color::Rgb(0xF5, 0xB9, 0x42);
pub(crate) const DANGER: Color = Color::Rgb(0xEF, 0x44, 0x44);

/// Render the application UI
///
/// Pure function: Takes state, returns nothing, but draws to frame.
/// This is the main rendering entry point.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.size();

    if state.current_screen.has_nav_bar() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Screen content
                Constraint::Length(3), // Nav bar
                Constraint::Length(1), // Status line
            ])
            .split(area);

        render_screen(frame, chunks[0], state);
        render_nav_bar(frame, chunks[1], state);
        render_status_line(frame, chunks[2], state);
    } else if state.current_screen == Screen::Splash {
        // The splash is full-bleed; no chrome while booting
        render_screen(frame, area, state);
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Screen content
                Constraint::Length(1), // Status line
            ])
            .split(area);

        render_screen(frame, chunks[0], state);
        render_status_line(frame, chunks[1], state);
    }

    // Render help overlay if visible
    if state.help_visible {
        render_help_overlay(frame, area, state);
    }

    // Render error overlay if present
    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error, state);
    }
}

/// Dispatch to the active screen's renderer
fn render_screen(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.current_screen {
        Screen::Splash => splash::render(frame, area, state),
        Screen::Home => home::render(frame, area, state),
        Screen::Details => details::render(frame, area, state),
        Screen::Payment => payment::render(frame, area, state),
        Screen::Success => success::render(frame, area, state),
        Screen::Access => access::render(frame, area, state),
        Screen::Profile => profile::render(frame, area, state),
        Screen::Add => add::render(frame, area, state),
        Screen::Booking => render_placeholder(frame, area, "Bookings", "Coming soon"),
        Screen::Messages => render_placeholder(frame, area, "Messages", "Coming soon"),
    }
}

/// Render the bottom navigation bar
fn render_nav_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let entries = [
        (Screen::Home, "F2", "Home"),
        (Screen::Access, "F3", "Access"),
        (Screen::Add, "F4", "+"),
        (Screen::Profile, "F5", "Profile"),
    ];

    let mut spans = Vec::new();
    for (i, (screen, key, label)) in entries.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let style = if state.current_screen == *screen {
            tint(state, PRIMARY).add_modifier(Modifier::BOLD)
        } else {
            dim(state)
        };
        spans.push(Span::styled(format!("{} {}", key, label), style));
    }

    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    frame.render_widget(bar, area);
}

/// Render the one-line status/hint bar
fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = if let Some(ref message) = state.status.message {
        Line::from(Span::styled(
            format!(" {}", message),
            tint(state, MINT).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(format!(" {}", hints(state)), dim(state)))
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Contextual key hints for the active screen
fn hints(state: &AppState) -> &'static str {
    match state.current_screen {
        Screen::Splash => "",
        Screen::Home => "Up/Down: Browse | Left/Right: Filter | Enter: Details | F1: Help | q: Quit",
        Screen::Details => {
            if state.can_book() {
                "b: Book Space | Esc: Back"
            } else {
                "Esc: Back"
            }
        }
        Screen::Payment => {
            if state.payment.confirming {
                "Processing..."
            } else {
                "Enter: Pay & Confirm | Esc: Back"
            }
        }
        Screen::Success => "g: Go to Access Keys | h/Esc: Back to Home",
        Screen::Access => {
            if state.bookings.is_empty() {
                "Enter: Find a Space | F1: Help | q: Quit"
            } else {
                "Up/Down: Select | g: Generate Access Code | F1: Help | q: Quit"
            }
        }
        Screen::Profile => "F2: Home | F1: Help | q: Quit",
        Screen::Add => "Esc: Close",
        Screen::Booking | Screen::Messages => "F1: Help | q: Quit",
    }
}

/// Render placeholder screen for unimplemented features
fn render_placeholder(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL);

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::Yellow))),
        Line::from(""),
        Line::from("Press F1 for help, q to quit"),
    ])
    .block(block)
    .alignment(Alignment::Center);

    frame.render_widget(text, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    // Center the help box
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q         - Quit"),
        Line::from("  F1        - Toggle help"),
        Line::from("  F2-F5     - Nav bar: Home / Access / + / Profile"),
        Line::from(""),
        Line::from("Home:"),
        Line::from("  Up/Down   - Browse listings"),
        Line::from("  Left/Right- Cycle category filter"),
        Line::from("  Enter     - Open details"),
        Line::from(""),
        Line::from("Details:    b - Book Space, Esc - Back"),
        Line::from("Payment:    Enter - Pay & Confirm, Esc - Back"),
        Line::from("Success:    g - Access Keys, h/Esc - Home"),
        Line::from("Access:     Up/Down - Select, g - Generate code"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(tint(state, SECONDARY)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area); // Clear background
    frame.render_widget(help, popup_area);
}

/// Render error overlay
fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str, state: &AppState) {
    let popup_area = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled(
            "Error",
            tint(state, DANGER).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(tint(state, DANGER)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Foreground style in the given brand color, plain when colors are off
pub(crate) fn tint(state: &AppState, color: Color) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

/// Muted style for secondary text
pub(crate) fn dim(state: &AppState) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    }
}

/// Pick a glyph, falling back to ASCII when unicode is off
pub(crate) fn glyph<'a>(state: &AppState, unicode: &'a str, ascii: &'a str) -> &'a str {
    if state.config.unicode_enabled {
        unicode
    } else {
        ascii
    }
}

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
const SPINNER_FRAMES_UNICODE: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

/// Current spinner frame, advanced by the tick counter
pub(crate) fn spinner_frame(state: &AppState) -> &'static str {
    let idx = (state.tick_count % 4) as usize;
    if state.config.unicode_enabled {
        SPINNER_FRAMES_UNICODE[idx]
    } else {
        SPINNER_FRAMES[idx]
    }
}

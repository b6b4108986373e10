//! Profile screen

use super::{dim, glyph, tint, DANGER, STAR};
use crate::app::AppState;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the profile screen
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let star = glyph(state, "★", "*");
    let lines = vec![
        Line::from(Span::styled(
            "John Doe",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("GARAJI Explorer • Since 2024", dim(state))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Rentals  ", dim(state)),
            Span::raw(state.bookings.len().to_string()),
            Span::styled("    Trust Rating  ", dim(state)),
            Span::styled(format!("{} 4.9", star), tint(state, STAR)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Account Settings",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  Payment Methods"),
        Line::from("  Security & Verification"),
        Line::from("  Support Center"),
        Line::from(Span::styled("  Log Out", tint(state, DANGER))),
    ];

    let body = Paragraph::new(lines)
        .block(Block::default().title(" Profile ").borders(Borders::ALL));
    frame.render_widget(body, area);
}

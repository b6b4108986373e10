//! Booking confirmation screen

use super::{dim, glyph, tint, MINT};
use crate::app::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the post-payment confirmation screen
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(10),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            glyph(state, "✔", "+"),
            tint(state, MINT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Booking Confirmed!",
            tint(state, MINT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Your space is reserved. You can generate your"),
        Line::from("access code on the Access screen when your session starts."),
    ];

    if let Some(booking) = state.last_booking() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                booking.listing_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} • {} - {}", booking.date, booking.start_time, booking.end_time),
                dim(state),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[ g: Go to Access Keys ]   [ h: Back to Home ]",
        dim(state),
    )));

    let body = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(body, chunks[1]);
}

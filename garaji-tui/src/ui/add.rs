//! Add-listing teaser screen

use super::{dim, tint, PRIMARY};
use crate::app::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the owner-onboarding teaser
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(7),
            Constraint::Percentage(30),
        ])
        .split(area);

    let lines = vec![
        Line::from(Span::styled("+", tint(state, PRIMARY).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(
            "List Your Space",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Register your garage and start earning today."),
        Line::from(""),
        Line::from(Span::styled("[ Get Started ]", tint(state, PRIMARY))),
        Line::from(""),
        Line::from(Span::styled("Esc to close", dim(state))),
    ];

    let body = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(body, chunks[1]);
}

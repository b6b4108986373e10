//! Boot splash screen

use super::{dim, spinner_frame, tint, PRIMARY};
use crate::app::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the splash screen: wordmark, tagline, spinner
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(5),
            Constraint::Percentage(40),
        ])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            "G A R A J I",
            tint(state, PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("STORE. PARK. ACCESS.", dim(state))),
        Line::from(""),
        Line::from(Span::styled(spinner_frame(state), dim(state))),
    ];

    let splash = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(splash, chunks[1]);
}

//! Access keys screen: bookings and their access codes

use super::{dim, glyph, spinner_frame, tint, MINT, PRIMARY};
use crate::app::AppState;
use libgaraji::{Booking, BookingStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CARD_HEIGHT: u16 = 8;

/// Render the access screen: one card per booking, newest first
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(1),    // Booking cards
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            " Access & Keys",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Generate your codes when you arrive.",
            dim(state),
        )),
    ]);
    frame.render_widget(header, chunks[0]);

    if state.bookings.is_empty() {
        render_empty(frame, chunks[1], state);
        return;
    }

    // Keep the cursor's card visible when more cards exist than fit
    let visible = (chunks[1].height / CARD_HEIGHT).max(1) as usize;
    let start = if state.access.cursor >= visible {
        state.access.cursor + 1 - visible
    } else {
        0
    };
    let shown = &state.bookings[start..state.bookings.len().min(start + visible)];

    let mut constraints: Vec<Constraint> =
        shown.iter().map(|_| Constraint::Length(CARD_HEIGHT)).collect();
    constraints.push(Constraint::Min(0));
    let cards = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(chunks[1]);

    for (offset, booking) in shown.iter().enumerate() {
        let selected = start + offset == state.access.cursor;
        render_card(frame, cards[offset], state, booking, selected);
    }

    let footer = Paragraph::new(Span::styled(" View Directions | Need Help?", dim(state)));
    frame.render_widget(footer, chunks[2]);
}

fn render_empty(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(5),
            Constraint::Percentage(35),
        ])
        .split(area);

    let body = Paragraph::new(vec![
        Line::from(Span::styled(glyph(state, "🔒", "[=]"), dim(state))),
        Line::from(""),
        Line::from("You have no active or upcoming rentals."),
        Line::from(""),
        Line::from(Span::styled("[ Enter: Find a Space ]", dim(state))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(body, chunks[1]);
}

fn render_card(frame: &mut Frame, area: Rect, state: &AppState, booking: &Booking, selected: bool) {
    let accessible = booking.status == BookingStatus::Active;

    let border_style = if selected {
        tint(state, PRIMARY)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title(format!(" {} ", booking.listing_name))
        .borders(Borders::ALL)
        .border_style(border_style);

    let badge = if accessible {
        Span::styled("Accessible Now", tint(state, MINT).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("Upcoming", dim(state))
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "{} • {} - {}",
                booking.date, booking.start_time, booking.end_time
            ),
            dim(state),
        )),
        Line::from(badge),
        Line::from(""),
    ];

    if state.access.revealed.contains(&booking.id) {
        let spaced: String = booking
            .access_code
            .chars()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(Span::styled("Your Dynamic Key", dim(state))));
        lines.push(Line::from(Span::styled(
            spaced,
            tint(state, MINT).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled("Expires in 1:45:02", dim(state))));
    } else if state.access.generating.as_deref() == Some(booking.id.as_str()) {
        lines.push(Line::from(format!(
            "{} Generating Secure Key...",
            spinner_frame(state)
        )));
    } else if accessible {
        lines.push(Line::from("[ g: Generate Access Code ]"));
        lines.push(Line::from(Span::styled(
            "Only visible while you have access",
            dim(state),
        )));
    } else {
        lines.push(Line::from(Span::styled("Locked", dim(state))));
        lines.push(Line::from(Span::styled(
            format!("Available at {}", booking.start_time),
            dim(state),
        )));
    }

    let card = Paragraph::new(lines).block(block);
    frame.render_widget(card, area);
}

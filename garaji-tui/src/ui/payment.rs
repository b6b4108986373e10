//! Payment review screen

use super::{dim, glyph, render_placeholder, tint, MINT, PRIMARY};
use crate::app::AppState;
use libgaraji::booking::OrderQuote;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the payment review screen for the selected listing
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let listing = match state.selected_listing() {
        Some(listing) => listing,
        None => {
            render_placeholder(frame, area, "Review Booking", "No listing selected");
            return;
        }
    };

    let quote = OrderQuote::new(listing.price_per_hour, &state.pricing);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Summary and totals
            Constraint::Length(3), // Confirm control
        ])
        .split(area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled(listing.name.clone(), bold)),
        Line::from(Span::styled(listing.category.label(), dim(state))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Date      ", dim(state)),
            Span::raw("Today"),
        ]),
        Line::from(vec![
            Span::styled("Duration  ", dim(state)),
            Span::raw(format!("{} Hours (Immediate)", quote.duration_hours)),
        ]),
        Line::from(""),
        Line::from(Span::styled("Order Total", bold)),
        Line::from(vec![
            Span::styled("  Garage Rental  ", dim(state)),
            Span::raw(format!("${:.2}", quote.rental)),
        ]),
        Line::from(vec![
            Span::styled("  Service Fee    ", dim(state)),
            Span::raw(format!("${:.2}", quote.service_fee)),
        ]),
        Line::from(vec![
            Span::styled("  Total to Pay   ", dim(state)),
            Span::styled(format!("${:.2}", quote.total), bold),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("VISA  ", bold),
            Span::raw(glyph(state, "•••• •••• •••• 4242", "**** **** **** 4242")),
            Span::styled("  Selected", tint(state, MINT)),
        ]),
    ];

    let summary = Paragraph::new(lines)
        .block(Block::default().title(" Review Booking ").borders(Borders::ALL));
    frame.render_widget(summary, chunks[0]);

    let confirm = if state.payment.confirming {
        Line::from(Span::styled("Processing...", dim(state)))
    } else {
        Line::from(Span::styled(
            " Enter: Pay & Confirm ",
            if state.config.colors_enabled {
                Style::default()
                    .fg(ratatui::style::Color::Black)
                    .bg(PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::REVERSED)
            },
        ))
    };

    let footer = Paragraph::new(confirm).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[1]);
}

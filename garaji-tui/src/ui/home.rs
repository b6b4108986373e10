//! Home screen: search hint, category chips, nearby listing browser

use super::{dim, glyph, tint, DANGER, MINT, PRIMARY};
use crate::app::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use libgaraji::CategoryFilter;

/// Render the home screen
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search hint
            Constraint::Length(1), // Category chips
            Constraint::Length(1), // Section header
            Constraint::Min(1),    // Listing list
        ])
        .split(area);

    render_search_hint(frame, chunks[0], state);
    render_filter_chips(frame, chunks[1], state);
    render_section_header(frame, chunks[2], state);
    render_listings(frame, chunks[3], state);
}

fn render_search_hint(frame: &mut Frame, area: Rect, state: &AppState) {
    let search = Paragraph::new(Line::from(Span::styled(
        format!("{} Find a garage near you", glyph(state, "🔍", ">")),
        dim(state),
    )))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(search, area);
}

fn render_filter_chips(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::raw(" ")];
    for filter in CategoryFilter::ALL {
        let style = if filter == state.home.filter {
            if state.config.colors_enabled {
                Style::default()
                    .fg(ratatui::style::Color::Black)
                    .bg(PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::REVERSED)
            }
        } else {
            dim(state)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_section_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let header = Line::from(vec![
        Span::styled(
            " Nearby Garages",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("See All", dim(state)),
    ]);

    frame.render_widget(Paragraph::new(header), area);
}

fn render_listings(frame: &mut Frame, area: Rect, state: &AppState) {
    let listings = state.filtered_listings();

    let mut lines = Vec::new();
    if listings.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  No spaces in this category yet.",
            dim(state),
        )));
    }

    for (i, listing) in listings.iter().enumerate() {
        let selected = i == state.home.cursor;
        let marker = if selected {
            glyph(state, "▸ ", "> ")
        } else {
            "  "
        };

        let name_style = if selected {
            tint(state, PRIMARY).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let badge = if listing.available {
            Span::styled("Available", tint(state, MINT))
        } else {
            Span::styled("BOOKED", tint(state, DANGER).add_modifier(Modifier::BOLD))
        };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(listing.name.clone(), name_style),
            Span::raw("  "),
            badge,
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(
                format!(
                    "{} {} • {} {:.1} ({}) • ${:.2}/hr",
                    glyph(state, "📍", "@"),
                    listing.distance,
                    glyph(state, "★", "*"),
                    listing.rating,
                    listing.reviews_count,
                    listing.price_per_hour
                ),
                dim(state),
            ),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

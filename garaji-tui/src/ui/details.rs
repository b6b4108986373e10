//! Listing details screen

use super::{dim, glyph, render_placeholder, tint, MINT, PRIMARY, SECONDARY, STAR};
use crate::app::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the details screen for the selected listing
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let listing = match state.selected_listing() {
        Some(listing) => listing,
        None => {
            // Unreachable through the keymap; the router guards selection
            render_placeholder(frame, area, "Details", "No listing selected");
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Listing details
            Constraint::Length(3), // Price + book control
        ])
        .split(area);

    let star = glyph(state, "★", "*");
    let mut lines = vec![
        Line::from(Span::styled(
            format!("[{}]", listing.category.label()),
            tint(state, SECONDARY),
        )),
        Line::from(Span::styled(
            listing.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!("{} {:.1}", star, listing.rating), tint(state, STAR)),
            Span::styled(
                format!(" ({} reviews)", listing.reviews_count),
                dim(state),
            ),
            Span::styled(
                format!("  22 Baker Street • {} away", listing.distance),
                dim(state),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                listing.owner.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Owner • Verified", dim(state)),
            Span::styled(
                format!("  {} {:.1}", star, listing.owner.rating),
                tint(state, STAR),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "About this space",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(listing.description.clone()),
        Line::from(""),
    ];

    let anchor = if listing.features.ground_anchor {
        "Yes"
    } else {
        "No"
    };
    for (label, value) in [
        ("Security", listing.features.security.label().to_string()),
        ("Size", listing.features.size.clone()),
        ("Height", listing.features.height.clone()),
        ("Ground", listing.features.ground_type.clone()),
        ("Anchor", anchor.to_string()),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", label), dim(state)),
            Span::raw(value),
        ]));
    }

    let details = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(details, chunks[0]);

    // Price footer with the book control
    let book_control = if listing.available {
        Span::styled(
            " b: Book Space ",
            if state.config.colors_enabled {
                Style::default()
                    .fg(ratatui::style::Color::Black)
                    .bg(PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::REVERSED)
            },
        )
    } else {
        Span::styled(" Unavailable ", dim(state))
    };

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Price per hour  ", dim(state)),
        Span::styled(
            format!("${:.2}", listing.price_per_hour),
            tint(state, MINT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        book_control,
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, chunks[1]);
}

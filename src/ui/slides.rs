//! Breed carousel strip.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::content::BreedRecord;
use crate::ui::carousel::CarouselState;
use crate::ui::theme::{ACCENT_PURPLE, BODY_TEXT, CARD_BORDER, GLOBAL_BORDER, MUTED_TEXT};

pub fn render_carousel(
    frame: &mut Frame<'_>,
    area: Rect,
    state: CarouselState,
    slide: Option<&BreedRecord>,
) {
    let rows = usize::from(area.height.saturating_sub(2));
    let lines = match slide {
        Some(breed) => {
            let full = slide_lines(state, breed);
            if full.len() <= rows {
                full
            } else {
                vec![compact_slide_line(state, breed)]
            }
        }
        None => vec![Line::from(Span::styled(
            "No breeds to show.",
            Style::default().fg(MUTED_TEXT),
        ))],
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(CARD_BORDER));
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(widget, area);
}

fn arrow(enabled: bool, glyph: &'static str) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(ACCENT_PURPLE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    };
    Span::styled(glyph, style)
}

fn name_row(state: CarouselState, breed: &BreedRecord) -> Vec<Span<'static>> {
    vec![
        arrow(state.can_go_previous(), "◀"),
        Span::raw("   "),
        Span::styled(
            breed.name,
            Style::default().fg(BODY_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        arrow(state.can_go_next(), "▶"),
    ]
}

fn position(state: CarouselState) -> Span<'static> {
    Span::styled(
        format!("{} / {}", state.index() + 1, state.len()),
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
    )
}

fn slide_lines(state: CarouselState, breed: &BreedRecord) -> Vec<Line<'static>> {
    vec![
        Line::from(name_row(state, breed)),
        Line::from(Span::styled(
            breed.image_ref,
            Style::default()
                .fg(MUTED_TEXT)
                .add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(""),
        Line::from(position(state)),
    ]
}

/// Name and position on one row; the image link is left out.
fn compact_slide_line(state: CarouselState, breed: &BreedRecord) -> Line<'static> {
    let mut spans = name_row(state, breed);
    spans.push(Span::raw("   "));
    spans.push(position(state));
    Line::from(spans)
}

//! Tab bar and the three tab bodies.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::content::{BreedRecord, ContentStore};
use crate::ui::facts::RotatorState;
use crate::ui::layout::wrapped_line_count;
use crate::ui::theme::{
    ACCENT_PURPLE, BODY_TEXT, CARD_BORDER, GLOBAL_BORDER, HEADING_PURPLE, HEART_RED, INFO_BLUE,
    MUTED_TEXT, PAW_PURPLE,
};
use crate::ui::view::ViewState;

pub fn render_tab_bar(frame: &mut Frame<'_>, area: Rect, active: ViewState) {
    let titles: Vec<Line> = ViewState::ALL
        .iter()
        .map(|view| Line::from(format!(" {}│{} ", view.index() + 1, view.tab_label())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .select(active.index())
        .style(Style::default().fg(MUTED_TEXT))
        .highlight_style(
            Style::default()
                .fg(ACCENT_PURPLE)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Render the active tab's content.
///
/// Breeds and care tips fall back to one unwrapped row per entry when the
/// full layout would not fit, so every entry stays on screen.
pub fn render_tab_body(
    frame: &mut Frame<'_>,
    area: Rect,
    view: ViewState,
    content: &ContentStore,
    rotator: RotatorState,
) {
    let inner_width = area.width.saturating_sub(2);
    let inner_height = usize::from(area.height.saturating_sub(2));

    let (lines, wrap) = match view {
        ViewState::Breeds => {
            let full = breed_lines(content);
            if wrapped_height(&full, inner_width) <= inner_height {
                (full, true)
            } else {
                (compact_breed_lines(content), false)
            }
        }
        ViewState::Care => {
            let lines = care_lines(content);
            let fits = wrapped_height(&lines, inner_width) <= inner_height;
            (lines, fits)
        }
        ViewState::Facts => (fact_lines(content, rotator), true),
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", view.heading()),
            Style::default()
                .fg(HEADING_PURPLE)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(CARD_BORDER));

    let mut widget = Paragraph::new(lines).block(block);
    if wrap {
        widget = widget.wrap(Wrap { trim: false });
    }
    frame.render_widget(widget, area);
}

fn wrapped_height(lines: &[Line<'_>], width: u16) -> usize {
    lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            usize::from(wrapped_line_count(&text, width).max(1))
        })
        .sum()
}

fn breed_lines(content: &ContentStore) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(content.breeds().len() * 3);
    for (idx, breed) in content.breeds().iter().enumerate() {
        if idx > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![paw(), breed_name(breed)]));
        lines.push(Line::from(Span::styled(
            format!("   {}", breed.description),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    lines
}

fn compact_breed_lines(content: &ContentStore) -> Vec<Line<'static>> {
    content
        .breeds()
        .iter()
        .map(|breed| {
            Line::from(vec![
                paw(),
                breed_name(breed),
                Span::styled(
                    format!("  {}", breed.description),
                    Style::default().fg(MUTED_TEXT),
                ),
            ])
        })
        .collect()
}

fn paw() -> Span<'static> {
    Span::styled("🐾 ", Style::default().fg(PAW_PURPLE))
}

fn breed_name(breed: &BreedRecord) -> Span<'static> {
    Span::styled(
        breed.name,
        Style::default().fg(BODY_TEXT).add_modifier(Modifier::BOLD),
    )
}

fn care_lines(content: &ContentStore) -> Vec<Line<'static>> {
    content
        .care_tips()
        .iter()
        .map(|tip| {
            Line::from(vec![
                Span::styled("♥ ", Style::default().fg(HEART_RED)),
                Span::styled(*tip, Style::default().fg(BODY_TEXT)),
            ])
        })
        .collect()
}

fn fact_lines(content: &ContentStore, rotator: RotatorState) -> Vec<Line<'static>> {
    let Some(fact) = content.fact(rotator.current_index()) else {
        return vec![Line::from(Span::styled(
            "No facts available.",
            Style::default().fg(MUTED_TEXT),
        ))];
    };

    vec![
        Line::from(vec![
            Span::styled("ⓘ ", Style::default().fg(INFO_BLUE)),
            Span::styled(fact.to_string(), Style::default().fg(BODY_TEXT)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Fact {} of {}",
                rotator.current_index() + 1,
                rotator.fact_count()
            ),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn breed_lines_list_every_breed() {
        let content = ContentStore::embedded();
        let rendered = text(&breed_lines(&content)).join("\n");
        for breed in content.breeds() {
            assert!(rendered.contains(breed.name));
            assert!(rendered.contains(breed.description));
        }
    }

    #[test]
    fn compact_breed_lines_one_row_per_breed() {
        let content = ContentStore::embedded();
        let rendered = text(&compact_breed_lines(&content));
        assert_eq!(rendered.len(), content.breeds().len());
        assert!(rendered[0].contains("Siamese"));
        assert!(rendered[0].contains(content.breeds()[0].description));
    }

    #[test]
    fn full_breed_list_needs_more_rows_when_narrow() {
        let content = ContentStore::embedded();
        let lines = breed_lines(&content);
        assert_eq!(wrapped_height(&lines, 98), 14);
        assert!(wrapped_height(&lines, 60) > 14);
    }

    #[test]
    fn care_lines_one_per_tip() {
        let content = ContentStore::embedded();
        assert_eq!(care_lines(&content).len(), content.care_tips().len());
    }

    #[test]
    fn fact_lines_show_position() {
        let content = ContentStore::embedded();
        let rendered = text(&fact_lines(&content, RotatorState::new(5)));
        assert!(rendered[0].contains("Cats sleep for about 70% of their lives"));
        assert_eq!(rendered[2], "Fact 1 of 5");
    }

    #[test]
    fn fact_lines_handle_empty_list() {
        let content = ContentStore::with_facts(Vec::new());
        let rendered = text(&fact_lines(&content, RotatorState::new(0)));
        assert_eq!(rendered, vec!["No facts available.".to_string()]);
    }
}

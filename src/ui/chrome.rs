//! Title bar and key-hint bar framing the page.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::theme::{GLOBAL_BORDER, MUTED_TEXT, TITLE_PURPLE};

const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

const HINTS: &str = "1/2/3: Tabs │ Tab: Next tab │ ←/→: Carousel │ Space: Like │ q: Quit";
const SHORT_HINTS: &str = "1-3 Tabs │ ←/→ │ Space Like │ q Quit";

pub fn render_header(frame: &mut Frame<'_>, area: Rect, title: &str) {
    let widget = Paragraph::new(Span::styled(
        title.to_string(),
        Style::default()
            .fg(TITLE_PURPLE)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}

/// Key hints on the left, version on the right. The version is dropped
/// before the hints are shortened.
pub fn render_footer(frame: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text_style = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM);
    let hints = hints_for(inner.width);
    let version_width = VERSION.chars().count() as u16;
    let show_version = hints.chars().count() as u16 + 1 + version_width <= inner.width;

    let [hints_area, version_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(if show_version { version_width } else { 0 }),
    ])
    .areas(inner);

    frame.render_widget(Paragraph::new(Span::styled(hints, text_style)), hints_area);
    if show_version {
        frame.render_widget(
            Paragraph::new(Span::styled(VERSION, text_style)).alignment(Alignment::Right),
            version_area,
        );
    }
}

fn hints_for(width: u16) -> &'static str {
    if HINTS.chars().count() <= usize::from(width) {
        HINTS
    } else {
        SHORT_HINTS
    }
}

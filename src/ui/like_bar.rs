use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::likes::LikeCount;
use crate::ui::theme::{BADGE_BG, BODY_TEXT, BUTTON_BG, BUTTON_TEXT, GLOBAL_BORDER};

/// Badge text shown beside the like button.
pub fn like_badge(count: LikeCount) -> String {
    format!("{} Likes", count.get())
}

/// Intro paragraph under a separator rule.
pub fn render_intro(frame: &mut Frame<'_>, area: Rect, intro: &str) {
    let widget = Paragraph::new(Line::from(Span::styled(
        intro.to_string(),
        Style::default().fg(BODY_TEXT),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}

/// The like button and its badge on a single row.
pub fn render_like_button(frame: &mut Frame<'_>, area: Rect, likes: LikeCount) {
    let button = Span::styled(
        " ♥ Like Cats ",
        Style::default()
            .fg(BUTTON_TEXT)
            .bg(BUTTON_BG)
            .add_modifier(Modifier::BOLD),
    );
    let badge = Span::styled(
        format!(" {} ", like_badge(likes)),
        Style::default().fg(BODY_TEXT).bg(BADGE_BG),
    );

    let widget = Paragraph::new(Line::from(vec![button, Span::raw("  "), badge]))
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

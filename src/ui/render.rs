use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::chrome::{render_footer, render_header};
use crate::ui::layout::layout_regions;
use crate::ui::like_bar::{render_intro, render_like_button};
use crate::ui::panels::{render_tab_bar, render_tab_body};
use crate::ui::slides::render_carousel;

/// Project the whole session state onto the frame.
///
/// Reads `app` only; identical state always yields an identical buffer.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let content = app.content();
    let regions = layout_regions(frame.area(), content.intro());

    if !regions.header.is_empty() {
        render_header(frame, regions.header, content.title());
    }
    if !regions.carousel.is_empty() {
        render_carousel(frame, regions.carousel, app.carousel(), app.current_slide());
    }
    render_tab_bar(frame, regions.tabs, app.view());
    frame.render_widget(Clear, regions.body);
    render_tab_body(frame, regions.body, app.view(), content, app.rotator());
    if !regions.intro.is_empty() {
        render_intro(frame, regions.intro, content.intro());
    }
    render_like_button(frame, regions.like_button, app.likes());
    if !regions.footer.is_empty() {
        render_footer(frame, regions.footer);
    }
}

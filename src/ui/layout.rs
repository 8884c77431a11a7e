use ratatui::layout::{Constraint, Layout, Rect};

const HEADER_HEIGHT: u16 = 3;
const CAROUSEL_HEIGHT: u16 = 6;
const CAROUSEL_COMPACT_HEIGHT: u16 = 3;
const TABS_HEIGHT: u16 = 3;
const LIKE_BUTTON_HEIGHT: u16 = 1;
const FOOTER_HEIGHT: u16 = 3;

/// Rows the tab body always gets before any decorative region is placed.
/// Enough for every panel in its compact form.
pub const BODY_MIN_HEIGHT: u16 = 8;
/// Body height at which the breed list fits without compaction.
const BODY_COMFORTABLE_HEIGHT: u16 = 16;

/// Screen regions, top to bottom. Optional regions have zero height when
/// the terminal is too short for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub carousel: Rect,
    pub tabs: Rect,
    pub body: Rect,
    pub intro: Rect,
    pub like_button: Rect,
    pub footer: Rect,
}

/// Rows left over once the essential regions are placed.
struct Budget {
    spare: u16,
}

impl Budget {
    /// All of `want` or nothing.
    fn take(&mut self, want: u16) -> u16 {
        if want <= self.spare {
            self.spare -= want;
            want
        } else {
            0
        }
    }

    fn take_up_to(&mut self, want: u16) -> u16 {
        let granted = want.min(self.spare);
        self.spare -= granted;
        granted
    }
}

/// Split the frame.
///
/// The tab bar, the body (at least [`BODY_MIN_HEIGHT`]) and the like button
/// row are placed first. Leftover rows go, in order, to the header, a
/// compact carousel, the footer, the intro paragraph, the body up to its
/// comfortable height and finally the full carousel. Anything left grows
/// the body.
pub fn layout_regions(area: Rect, intro: &str) -> Regions {
    let mut budget = Budget {
        spare: area
            .height
            .saturating_sub(TABS_HEIGHT + BODY_MIN_HEIGHT + LIKE_BUTTON_HEIGHT),
    };

    let header = budget.take(HEADER_HEIGHT);
    let mut carousel = budget.take(CAROUSEL_COMPACT_HEIGHT);
    let footer = budget.take(FOOTER_HEIGHT);
    let intro_height = match wrapped_line_count(intro, area.width) {
        0 => 0,
        // One extra row for the separator border.
        lines => budget.take(lines.saturating_add(1)),
    };
    budget.take_up_to(BODY_COMFORTABLE_HEIGHT - BODY_MIN_HEIGHT);
    if carousel > 0 {
        carousel += budget.take(CAROUSEL_HEIGHT - CAROUSEL_COMPACT_HEIGHT);
    }

    let [header, carousel, tabs, body, intro, like_button, footer] = Layout::vertical([
        Constraint::Length(header),
        Constraint::Length(carousel),
        Constraint::Length(TABS_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(intro_height),
        Constraint::Length(LIKE_BUTTON_HEIGHT),
        Constraint::Length(footer),
    ])
    .areas(area);

    Regions {
        header,
        carousel,
        tabs,
        body,
        intro,
        like_button,
        footer,
    }
}

/// Rows `text` occupies when word-wrapped greedily at `width` columns.
///
/// Leading indentation counts towards the first word. Words longer than
/// the width are broken across rows.
pub fn wrapped_line_count(text: &str, width: u16) -> u16 {
    let width = usize::from(width);
    if width == 0 {
        return 0;
    }

    let indent = text.len() - text.trim_start().len();
    let mut lines = 0usize;
    let mut current = 0usize;
    for (idx, word) in text.split_whitespace().enumerate() {
        let mut len = word.chars().count();
        if idx == 0 {
            len += indent;
        }
        if current == 0 {
            lines += 1;
            current = len;
        } else if current + 1 + len <= width {
            current += 1 + len;
        } else {
            lines += 1;
            current = len;
        }
        while current > width {
            lines += 1;
            current -= width;
        }
    }
    u16::try_from(lines).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTRO: &str = "one two three four five six seven eight nine ten";

    #[test]
    fn regions_stack_without_gaps() {
        let area = Rect::new(0, 0, 100, 50);
        let r = layout_regions(area, INTRO);
        assert_eq!(r.header.y, 0);
        assert_eq!(r.carousel.y, r.header.bottom());
        assert_eq!(r.tabs.y, r.carousel.bottom());
        assert_eq!(r.body.y, r.tabs.bottom());
        assert_eq!(r.intro.y, r.body.bottom());
        assert_eq!(r.like_button.y, r.intro.bottom());
        assert_eq!(r.footer.y, r.like_button.bottom());
        assert_eq!(r.footer.bottom(), area.bottom());
    }

    #[test]
    fn tall_terminal_shows_every_region_in_full() {
        let r = layout_regions(Rect::new(0, 0, 100, 50), INTRO);
        assert_eq!(r.header.height, HEADER_HEIGHT);
        assert_eq!(r.carousel.height, CAROUSEL_HEIGHT);
        assert_eq!(r.intro.height, 2);
        assert_eq!(r.footer.height, FOOTER_HEIGHT);
        assert_eq!(r.body.height, 50 - 3 - 6 - 3 - 2 - 1 - 3);
        assert_eq!(r.body.width, 100);
    }

    #[test]
    fn standard_terminal_keeps_body_and_compacts_carousel() {
        let long_intro = "word ".repeat(60);
        let r = layout_regions(Rect::new(0, 0, 80, 24), &long_intro);
        assert!(r.body.height >= BODY_MIN_HEIGHT);
        assert_eq!(r.carousel.height, CAROUSEL_COMPACT_HEIGHT);
        assert_eq!(r.intro.height, 0);
        assert_eq!(r.like_button.height, LIKE_BUTTON_HEIGHT);
        assert_eq!(r.footer.bottom(), 24);
    }

    #[test]
    fn short_terminal_drops_decorations_before_body() {
        let r = layout_regions(Rect::new(0, 0, 80, 14), INTRO);
        assert_eq!(r.body.height, BODY_MIN_HEIGHT);
        assert_eq!(r.carousel.height, 0);
        assert_eq!(r.footer.height, 0);
        assert_eq!(r.like_button.height, LIKE_BUTTON_HEIGHT);
    }

    #[test]
    fn wrapped_line_count_wraps_greedily() {
        assert_eq!(wrapped_line_count("", 10), 0);
        assert_eq!(wrapped_line_count("abc def", 7), 1);
        assert_eq!(wrapped_line_count("abc def", 6), 2);
        assert_eq!(wrapped_line_count("   abc def", 7), 2);
        assert_eq!(wrapped_line_count("abcdefghij", 4), 3);
        assert_eq!(wrapped_line_count("abc", 0), 0);
    }
}

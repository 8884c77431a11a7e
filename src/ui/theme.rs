use ratatui::style::Color;

pub const TITLE_PURPLE: Color = Color::Rgb(0x6b, 0x21, 0xa8);
pub const HEADING_PURPLE: Color = Color::Rgb(0x7e, 0x22, 0xce);
pub const ACCENT_PURPLE: Color = Color::Rgb(0xa8, 0x55, 0xf7);
pub const PAW_PURPLE: Color = Color::Rgb(0xa8, 0x55, 0xf7);
pub const HEART_RED: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const INFO_BLUE: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const BODY_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const CARD_BORDER: Color = Color::Rgb(0xf9, 0xa8, 0xd4);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const BADGE_BG: Color = Color::Rgb(0x37, 0x41, 0x51);
pub const BUTTON_BG: Color = Color::Rgb(0xa8, 0x55, 0xf7);
pub const BUTTON_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);

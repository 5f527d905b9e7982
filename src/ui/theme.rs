use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x01, 0xb4, 0xe4);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const DIM_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const FAVOURITE_MARK: Color = Color::Rgb(0xf4, 0x3f, 0x5e);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xff, 0x99, 0x00);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const PRIMARY_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const DIM_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_WARN: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const MAP_LAND: Color = Color::Rgb(0x3f, 0x6f, 0x42);

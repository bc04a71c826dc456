use ratatui::style::Color;

/// Upper end of the normalized range shared by the marker and current positions.
pub const SCALE_MAX: u32 = 10_000;

/// Raw level that normalizes to [`SCALE_MAX`] unless configured otherwise.
pub const DEFAULT_MAXIMUM_LEVEL: u32 = 32_767;

pub const BACKGROUND_COLOR: Color = Color::Rgb(0x00, 0x00, 0x00);
pub const ACTIVE_COLOR: Color = Color::Rgb(0x19, 0x7B, 0x30);
pub const INACTIVE_COLOR: Color = Color::Rgb(0xC0, 0xC0, 0xC0);
pub const OUTLINE_COLOR: Color = Color::Black;

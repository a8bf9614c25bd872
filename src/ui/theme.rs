use ratatui::style::Color;

// The original site's zinc-and-fuchsia palette.
pub const SIGIL_ACCENT: Color = Color::Rgb(0xd9, 0x46, 0xef);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x3f, 0x3f, 0x46);
pub const HEADER_TEXT: Color = Color::Rgb(0xf4, 0xf4, 0xf5);
pub const BODY_TEXT: Color = Color::Rgb(0xd4, 0xd4, 0xd8);
pub const MUTED_TEXT: Color = Color::Rgb(0xa1, 0xa1, 0xaa);
pub const POPUP_BORDER: Color = Color::Rgb(0xe4, 0xe4, 0xe7);
pub const STATUS_OK: Color = Color::Rgb(0x34, 0xd3, 0x99);
pub const STATUS_ERROR: Color = Color::Rgb(0xfb, 0x71, 0x85);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x27, 0x27, 0x2a);

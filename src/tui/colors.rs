use ratatui::style::Color;

pub const BG_DARK: Color = Color::Rgb(24, 24, 32);
pub const BORDER_COLOR: Color = Color::Rgb(88, 91, 112);
pub const BORDER_FOCUSED: Color = Color::Rgb(0, 120, 215);

pub const TEXT_PRIMARY: Color = Color::Rgb(220, 223, 228);
pub const TEXT_SECONDARY: Color = Color::Rgb(140, 145, 160);

/// Errors and placeholders
pub const ACCENT_PRIMARY: Color = Color::Rgb(235, 111, 146);
/// Directories
pub const ACCENT_SECONDARY: Color = Color::Rgb(156, 207, 216);
pub const ACCENT_HIGHLIGHT: Color = Color::Rgb(246, 193, 119);

/// Background of the active tab
pub const ACTIVE_TAB_BG: Color = Color::Rgb(0, 120, 215);
pub const ACTIVE_TAB_FG: Color = Color::White;
pub const SELECTION_BG: Color = Color::Rgb(54, 58, 79);

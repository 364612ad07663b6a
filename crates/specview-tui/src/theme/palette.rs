//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);
pub const CODE_BG: Color = Color::Rgb(22, 27, 34);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;

// --- Tree values ---
pub const VALUE_STRING: Color = Color::Green;
pub const VALUE_NUMBER: Color = Color::LightBlue;
pub const VALUE_KEYWORD: Color = Color::Magenta;
pub const VALUE_EMPTY: Color = Color::DarkGray;

// --- Reference badges ---
pub const BADGE_REQUIRED: Color = Color::LightRed;
pub const BADGE_KIND: Color = Color::Yellow;

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 6, 8);

// --- Listing gutter ---
pub const LINE_NUMBER: Color = Color::DarkGray;

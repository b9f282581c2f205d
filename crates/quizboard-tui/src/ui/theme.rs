// Centralized theme constants - edit this file to change the look

use ratatui::style::Color;

/// Primary text - off-white for readability
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

/// Secondary/muted text
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Dimmed text for hints and placeholders
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

/// Primary accent - muted blue (active selections, the session user's row)
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);

/// Success/positive - muted green (scores)
pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);

/// Error - muted red
pub const ACCENT_ERROR: Color = Color::Rgb(205, 92, 92);

// Podium colors for the profiles view's top three
pub const RANK_GOLD: Color = Color::Rgb(212, 175, 55);
pub const RANK_SILVER: Color = Color::Rgb(170, 170, 180);
pub const RANK_BRONZE: Color = Color::Rgb(176, 122, 72);

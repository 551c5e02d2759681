//! Color theme constants for the TinyURL UI.
//!
//! Dark palette loosely following the web frontend's indigo accent.

use ratatui::style::Color;

/// Primary border color.
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Dim text for less important info.
pub const COLOR_DIM: Color = Color::DarkGray;

/// Accent color for the active tab, links, and highlights.
pub const COLOR_ACCENT: Color = Color::Rgb(129, 140, 248); // indigo

/// Success state - result card, confirmation marks.
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Error banners.
pub const COLOR_ERROR: Color = Color::Red;

/// Collision warnings.
pub const COLOR_WARNING: Color = Color::Yellow;

/// Background for the URL input line.
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Leaderboard rank colors: gold, silver, bronze.
pub const COLOR_RANK_1: Color = Color::Rgb(250, 204, 21);
pub const COLOR_RANK_2: Color = Color::Gray;
pub const COLOR_RANK_3: Color = Color::Rgb(251, 146, 60);

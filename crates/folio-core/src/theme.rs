//! Accent color used for headings, the banner and the active nav item.

use ratatui::style::Color;
use serde::Deserialize;

/// Accent color theme for the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Green,
    Cyan,
    Magenta,
    Yellow,
    Blue,
    White,
}

impl AccentColor {
    /// Cycle to the next accent color.
    pub fn next(self) -> Self {
        match self {
            AccentColor::Green => AccentColor::Cyan,
            AccentColor::Cyan => AccentColor::Magenta,
            AccentColor::Magenta => AccentColor::Yellow,
            AccentColor::Yellow => AccentColor::Blue,
            AccentColor::Blue => AccentColor::White,
            AccentColor::White => AccentColor::Green,
        }
    }

    /// Convert to a ratatui color.
    pub fn color(self) -> Color {
        match self {
            AccentColor::Green => Color::Rgb(74, 222, 128),
            AccentColor::Cyan => Color::Cyan,
            AccentColor::Magenta => Color::Magenta,
            AccentColor::Yellow => Color::Yellow,
            AccentColor::Blue => Color::Blue,
            AccentColor::White => Color::White,
        }
    }
}

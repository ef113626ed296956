//! Color themes for the page and its background.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color theme for the page display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Green,
    Emerald,
    Lime,
    Teal,
    Cyan,
    White,
}

impl ColorTheme {
    /// Cycle to the next color theme.
    pub fn next(&self) -> Self {
        match self {
            ColorTheme::Green => ColorTheme::Emerald,
            ColorTheme::Emerald => ColorTheme::Lime,
            ColorTheme::Lime => ColorTheme::Teal,
            ColorTheme::Teal => ColorTheme::Cyan,
            ColorTheme::Cyan => ColorTheme::White,
            ColorTheme::White => ColorTheme::Green,
        }
    }

    /// Hue, saturation and lightness of the theme's base tint.
    ///
    /// These are the 500 shades of the matching Tailwind palette.
    pub fn hsl(self) -> (f32, f32, f32) {
        match self {
            ColorTheme::Green => (142.1, 0.71, 0.45),
            ColorTheme::Emerald => (160.1, 0.84, 0.39),
            ColorTheme::Lime => (83.7, 0.81, 0.44),
            ColorTheme::Teal => (173.4, 0.80, 0.40),
            ColorTheme::Cyan => (188.7, 0.94, 0.43),
            ColorTheme::White => (0.0, 0.0, 0.90),
        }
    }

    /// Accent color for headings and highlights.
    pub fn accent(self) -> Color {
        match self {
            ColorTheme::Green => Color::Rgb(74, 222, 128),
            ColorTheme::Emerald => Color::Rgb(52, 211, 153),
            ColorTheme::Lime => Color::Rgb(163, 230, 53),
            ColorTheme::Teal => Color::Rgb(45, 212, 191),
            ColorTheme::Cyan => Color::Rgb(34, 211, 238),
            ColorTheme::White => Color::White,
        }
    }

    /// Muted color for body text.
    pub fn body(self) -> Color {
        match self {
            ColorTheme::Green => Color::Rgb(220, 252, 231),
            ColorTheme::Emerald => Color::Rgb(209, 250, 229),
            ColorTheme::Lime => Color::Rgb(236, 252, 203),
            ColorTheme::Teal => Color::Rgb(204, 251, 241),
            ColorTheme::Cyan => Color::Rgb(207, 250, 254),
            ColorTheme::White => Color::Gray,
        }
    }

    /// Border color for cards and form fields.
    pub fn border(self) -> Color {
        match self {
            ColorTheme::Green => Color::Rgb(22, 101, 52),
            ColorTheme::Emerald => Color::Rgb(6, 95, 70),
            ColorTheme::Lime => Color::Rgb(63, 98, 18),
            ColorTheme::Teal => Color::Rgb(17, 94, 89),
            ColorTheme::Cyan => Color::Rgb(21, 94, 117),
            ColorTheme::White => Color::DarkGray,
        }
    }
}

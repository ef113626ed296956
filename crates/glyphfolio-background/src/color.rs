//! Color utility functions for the glyph background.

use glyphfolio_core::ColorTheme;
use ratatui::style::Color;

/// Color of a glyph drawn at the given opacity over a black background.
///
/// Opacity scales the theme's lightness, so a glyph at 0 vanishes into the
/// background and a glyph at the keyframe peak shows a dim tint.
pub fn glyph_color(theme: ColorTheme, opacity: f32) -> Color {
    let (hue, saturation, lightness) = theme.hsl();
    hsl_to_rgb(hue, saturation, lightness * opacity.clamp(0.0, 1.0))
}

/// Convert HSL to RGB color.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_opacity_is_black() {
        assert_eq!(glyph_color(ColorTheme::Green, 0.0), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_green_theme_is_green_dominant() {
        let Color::Rgb(r, g, b) = glyph_color(ColorTheme::Green, 0.5) else {
            panic!("expected an rgb color");
        };
        assert!(g > r && g > b);
    }

    #[test]
    fn test_grayscale() {
        assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), Color::Rgb(255, 255, 255));
    }
}

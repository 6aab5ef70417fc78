//! Stroke colouring. Cosmetic only: nothing here affects geometry.

use crate::error::{LSystemError, Result};
use csscolorparser::Color;

/// Two stroke colours blended over the course of a render, plus a background.
///
/// Stroke `k` of `n` (zero-based) is drawn with [`Palette::at`]`(k / (n - 1))`,
/// so the first stroke is `primary` and the last is exactly `secondary`.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::from_rgba8(0x4d, 0xfe, 0x44, 0xff),
            secondary: Color::from_rgba8(0x44, 0x8a, 0xfe, 0xff),
            background: Color::from_rgba8(0, 0, 0, 0xff),
        }
    }
}

impl Palette {
    /// Parses two CSS colours (`"#4dfe44"`, `"teal"`, `"rgb(...)"`, ...).
    pub fn parse(primary: &str, secondary: &str) -> Result<Self> {
        Ok(Self {
            primary: parse_color(primary)?,
            secondary: parse_color(secondary)?,
            ..Self::default()
        })
    }

    /// Replaces the background colour with a parsed CSS colour.
    pub fn with_background(mut self, background: &str) -> Result<Self> {
        self.background = parse_color(background)?;
        Ok(self)
    }

    /// Linear blend from `primary` (0.0) to `secondary` (1.0) in RGBA8 space.
    pub fn at(&self, fraction: f64) -> Color {
        let t = fraction.clamp(0.0, 1.0);
        let a = self.primary.to_rgba8();
        let b = self.secondary.to_rgba8();
        let mix = |i: usize| (a[i] as f64 + (b[i] as f64 - a[i] as f64) * t).round() as u8;
        Color::from_rgba8(mix(0), mix(1), mix(2), mix(3))
    }
}

pub fn parse_color(s: &str) -> Result<Color> {
    csscolorparser::parse(s).map_err(|e| LSystemError::InvalidColor(format!("`{s}`: {e}")))
}

/// `#rrggbb` form used by the SVG canvas.
pub fn hex(color: &Color) -> String {
    let [r, g, b, _] = color.to_rgba8();
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        let palette = Palette::parse("#000000", "#ff8000").unwrap();
        assert_eq!(palette.at(0.0).to_rgba8(), [0, 0, 0, 255]);
        assert_eq!(palette.at(1.0).to_rgba8(), [255, 128, 0, 255]);
        assert_eq!(palette.at(0.5).to_rgba8(), [128, 64, 0, 255]);
        assert_eq!(palette.at(7.0), palette.at(1.0));
    }

    #[test]
    fn test_parse() {
        let palette = Palette::parse("red", "#00ff00")
            .unwrap()
            .with_background("white")
            .unwrap();
        assert_eq!(hex(&palette.primary), "#ff0000");
        assert_eq!(hex(&palette.background), "#ffffff");
        assert!(matches!(
            Palette::parse("not-a-colour", "red"),
            Err(LSystemError::InvalidColor(_))
        ));
    }
}

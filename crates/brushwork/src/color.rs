//! Solid fill colors for brush stamps
//!
//! Colors are stored as 8-bit RGBA so they can key the stamp cache
//! ([`Eq`] + [`Hash`]), and converted to `[f32; 4]` for compositing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("unsupported color length {0} (expected #rgb, #rrggbb or #rrggbbaa)")]
    BadLength(usize),
    #[error("invalid hex digit in color: {0:?}")]
    InvalidDigit(String),
}

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
    /// Default palette pink.
    pub const PINK: Color = Color::rgb(0xec, 0x48, 0x99);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to straight-alpha `[r, g, b, a]` in 0.0..=1.0.
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::PINK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if !hex.is_ascii() {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }

        let digit = |range: &str| {
            u8::from_str_radix(range, 16).map_err(|_| ColorParseError::InvalidDigit(s.to_string()))
        };

        match hex.len() {
            // #rgb shorthand: each digit doubled
            3 => {
                let r = digit(&hex[0..1])?;
                let g = digit(&hex[1..2])?;
                let b = digit(&hex[2..3])?;
                Ok(Color::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => Ok(Color::rgb(
                digit(&hex[0..2])?,
                digit(&hex[2..4])?,
                digit(&hex[4..6])?,
            )),
            8 => Ok(Color::new(
                digit(&hex[0..2])?,
                digit(&hex[2..4])?,
                digit(&hex[4..6])?,
                digit(&hex[6..8])?,
            )),
            n => Err(ColorParseError::BadLength(n)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rrggbb() {
        let color: Color = "#ec4899".parse().unwrap();
        assert_eq!(color, Color::rgb(0xec, 0x48, 0x99));
        assert_eq!(color, Color::PINK);
    }

    #[test]
    fn test_parse_shorthand() {
        let color: Color = "#f0a".parse().unwrap();
        assert_eq!(color, Color::rgb(0xff, 0x00, 0xaa));
    }

    #[test]
    fn test_parse_with_alpha() {
        let color: Color = "#11223344".parse().unwrap();
        assert_eq!(color, Color::new(0x11, 0x22, 0x33, 0x44));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "ec4899".parse::<Color>(),
            Err(ColorParseError::MissingHash("ec4899".to_string()))
        );
        assert_eq!("#ec48".parse::<Color>(), Err(ColorParseError::BadLength(4)));
        assert!(matches!(
            "#zzzzzz".parse::<Color>(),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            "#ééé".parse::<Color>(),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        let color = Color::rgb(0xec, 0x48, 0x99);
        assert_eq!(color.to_string(), "#ec4899");
        assert_eq!(color.to_string().parse::<Color>().unwrap(), color);

        let translucent = Color::new(0x11, 0x22, 0x33, 0x80);
        assert_eq!(translucent.to_string(), "#11223380");
    }

    #[test]
    fn test_to_rgba_f32() {
        let rgba = Color::rgb(255, 0, 127).to_rgba_f32();
        assert_eq!(rgba[0], 1.0);
        assert_eq!(rgba[1], 0.0);
        assert!((rgba[2] - 127.0 / 255.0).abs() < 1e-6);
        assert_eq!(rgba[3], 1.0);
    }

    #[test]
    fn test_serde() {
        let color = Color::PINK;
        let json = serde_json::to_string(&color).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }
}

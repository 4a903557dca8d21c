//! Colour type, hex parsing and compositing.

use std::fmt;
use std::str::FromStr;

use palette::blend::Compose;
use palette::{LinSrgba, Srgba};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ArtError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Mid grey, used for flag poles.
    pub const GREY: Self = Self::rgb(0x80, 0x80, 0x80);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 | 4 => {
                // Short form: each digit is doubled
                let digits = hex
                    .chars()
                    .map(parse_hex_digit)
                    .collect::<Result<Vec<u8>>>()?;
                let wide: Vec<u8> = digits.iter().map(|d| d << 4 | d).collect();
                let a = wide.get(3).copied().unwrap_or(255);
                Ok(Self::new(wide[0], wide[1], wide[2], a))
            }
            6 | 8 => {
                let bytes = (0..hex.len())
                    .step_by(2)
                    .map(|i| parse_hex_byte(&hex[i..i + 2]))
                    .collect::<Result<Vec<u8>>>()?;
                let a = bytes.get(3).copied().unwrap_or(255);
                Ok(Self::new(bytes[0], bytes[1], bytes[2], a))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Composite `self` over `dst` with an extra opacity factor.
    ///
    /// `opacity` combines shape alpha and pixel coverage and is clamped to
    /// `0.0..=1.0`. Blending happens in linear light.
    pub fn over(self, dst: Colour, opacity: f32) -> Colour {
        let opacity = opacity.clamp(0.0, 1.0);
        if opacity <= 0.0 || self.is_transparent() {
            return dst;
        }

        let mut src = to_linear(self);
        src.alpha *= opacity;
        let out = src.over(to_linear(dst));

        let srgb: Srgba<f32> = Srgba::from_linear(out);
        let bytes: Srgba<u8> = srgb.into_format();
        Colour::new(bytes.red, bytes.green, bytes.blue, bytes.alpha)
    }
}

fn to_linear(colour: Colour) -> LinSrgba<f32> {
    let srgb: Srgba<f32> = Srgba::new(colour.r, colour.g, colour.b, colour.a).into_format();
    srgb.into_linear()
}

impl FromStr for Colour {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Colour::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

fn invalid_hex(s: &str) -> ArtError {
    ArtError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| ArtError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| ArtError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#EF0107").unwrap();
        assert_eq!(c, Colour::rgb(0xEF, 0x01, 0x07));

        let c = Colour::from_hex("#00366e").unwrap();
        assert_eq!(c, Colour::rgb(0x00, 0x36, 0x6E));
    }

    #[test]
    fn test_from_hex_short_forms() {
        assert_eq!(Colour::from_hex("#F00").unwrap(), Colour::rgb(255, 0, 0));
        assert_eq!(
            Colour::from_hex("#F008").unwrap(),
            Colour::new(255, 0, 0, 0x88)
        );
    }

    #[test]
    fn test_from_hex_8digit() {
        let c = Colour::from_hex("#FF000080").unwrap();
        assert_eq!(c, Colour::new(255, 0, 0, 128));
    }

    #[test]
    fn test_from_hex_no_hash() {
        let c = Colour::from_hex("FFFFFF").unwrap();
        assert_eq!(c, Colour::WHITE);
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("").is_err());
        assert!(Colour::from_hex("#ÉÉÉ").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(0xEF, 0x01, 0x07)), "#EF0107");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 128)), "#FF000080");
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Colour::rgb(0, 0x36, 0x6E)).unwrap();
        assert_eq!(json, "\"#00366E\"");

        let back: Colour = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Colour::rgb(0, 0x36, 0x6E));
    }

    #[test]
    fn test_over_opaque_replaces() {
        let out = Colour::rgb(200, 10, 10).over(Colour::WHITE, 1.0);
        assert_eq!(out, Colour::rgb(200, 10, 10));
    }

    #[test]
    fn test_over_zero_opacity_keeps_destination() {
        let out = Colour::BLACK.over(Colour::WHITE, 0.0);
        assert_eq!(out, Colour::WHITE);
    }

    #[test]
    fn test_over_half_lands_between() {
        let out = Colour::BLACK.over(Colour::WHITE, 0.5);
        assert!(out.r > 0 && out.r < 255);
        assert_eq!(out.r, out.g);
        assert_eq!(out.a, 255);
    }
}

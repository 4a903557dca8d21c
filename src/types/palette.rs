//! Three-role team palette.

use serde::Serialize;

use crate::error::{ArtError, Result};

use super::Colour;

/// A team palette: exactly a primary, secondary and tertiary colour.
///
/// The roles drive the drawing recipes: primary paints silhouettes,
/// secondary paints pattern layers and tertiary is used for backgrounds
/// and accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: Colour,
    pub secondary: Colour,
    pub tertiary: Colour,
}

impl Palette {
    pub const fn new(primary: Colour, secondary: Colour, tertiary: Colour) -> Self {
        Self {
            primary,
            secondary,
            tertiary,
        }
    }

    /// Build a palette from a colour slice, which must hold exactly three
    /// colours in role order.
    pub fn from_colours(colours: &[Colour]) -> Result<Self> {
        match colours {
            [primary, secondary, tertiary] => Ok(Self::new(*primary, *secondary, *tertiary)),
            _ => Err(ArtError::InvalidPalette {
                count: colours.len(),
            }),
        }
    }

    /// Parse a palette from hex strings (`#RRGGBB` etc.).
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Result<Self> {
        // Count is checked first so a wrong-length list reports as a palette
        // error even when an entry is also malformed.
        if hex.len() != 3 {
            return Err(ArtError::InvalidPalette { count: hex.len() });
        }
        let colours = hex
            .iter()
            .map(|s| Colour::from_hex(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::from_colours(&colours)
    }

    /// All three colours in role order.
    pub fn colours(&self) -> [Colour; 3] {
        [self.primary, self.secondary, self.tertiary]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_arsenal() {
        let palette = Palette::from_hex(&["#EF0107", "#00366E", "#FFFFFF"]).unwrap();
        assert_eq!(palette.primary, Colour::rgb(0xEF, 0x01, 0x07));
        assert_eq!(palette.secondary, Colour::rgb(0x00, 0x36, 0x6E));
        assert_eq!(palette.tertiary, Colour::WHITE);
    }

    #[test]
    fn test_two_colours_rejected() {
        let err = Palette::from_hex(&["#EF0107", "#00366E"]).unwrap_err();
        assert!(matches!(err, ArtError::InvalidPalette { count: 2 }));
    }

    #[test]
    fn test_four_colours_rejected() {
        let colours = [Colour::BLACK; 4];
        let err = Palette::from_colours(&colours).unwrap_err();
        assert!(matches!(err, ArtError::InvalidPalette { count: 4 }));
    }

    #[test]
    fn test_bad_hex_is_parse_error() {
        let err = Palette::from_hex(&["#EF0107", "nope", "#FFFFFF"]).unwrap_err();
        assert!(matches!(err, ArtError::Parse { .. }));
    }

    #[test]
    fn test_colours_role_order() {
        let p = Palette::new(Colour::BLACK, Colour::WHITE, Colour::GREY);
        assert_eq!(p.colours(), [Colour::BLACK, Colour::WHITE, Colour::GREY]);
    }
}

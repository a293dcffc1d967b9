//! Opaque RGB colors used by the icon.

use std::fmt;
use std::str::FromStr;

use image::Rgb;
use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::IconError;

/// An opaque 8-bit sRGB color.
///
/// Serializes as a lowercase hex string (`"#10b981"`) so style profiles stay
/// readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub Srgb<u8>);

impl Color {
    /// Brand emerald used for the background and every cutout.
    pub const EMERALD: Color = Color(Srgb::new(0x10, 0xb9, 0x81));

    /// Foreground color of the building.
    pub const WHITE: Color = Color(Srgb::new(0xff, 0xff, 0xff));

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    /// Parses `#rrggbb`, `rrggbb` or the short `#rgb` form.
    pub fn from_hex(hex: &str) -> Result<Self, IconError> {
        Srgb::<u8>::from_str(hex.trim())
            .map(Self)
            .map_err(|_| IconError::InvalidColor(hex.to_string()))
    }

    /// Formats the color as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0.red, self.0.green, self.0.blue)
    }

    /// The color as an `image` pixel.
    pub fn to_pixel(self) -> Rgb<u8> {
        Rgb([self.0.red, self.0.green, self.0.blue])
    }

    pub fn from_pixel(pixel: Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self::new(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = IconError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_brand_colors() {
        assert_eq!(Color::from_hex("#10b981").unwrap(), Color::EMERALD);
        assert_eq!(Color::from_hex("ffffff").unwrap(), Color::WHITE);
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
    }

    #[test]
    fn rejects_garbage() {
        let err = Color::from_hex("emerald").unwrap_err();
        assert!(matches!(err, IconError::InvalidColor(ref s) if s == "emerald"));
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Color::EMERALD.to_hex(), "#10b981");
        assert_eq!(Color::new(0, 10, 255).to_string(), "#000aff");
    }

    #[test]
    fn pixel_conversion() {
        let pixel = Color::EMERALD.to_pixel();
        assert_eq!(pixel.0, [0x10, 0xb9, 0x81]);
        assert_eq!(Color::from_pixel(pixel), Color::EMERALD);
    }
}

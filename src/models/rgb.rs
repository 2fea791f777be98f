//! RGB color value used for category identity colors.

use std::fmt;

/// RGB color with red, green, and blue channels (0-255 each).
///
/// Displays as an uppercase hex string ("#RRGGBB").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_uppercase_hex() {
        assert_eq!(RgbColor::new(255, 193, 7).to_string(), "#FFC107");
        assert_eq!(RgbColor::new(0, 0, 0).to_string(), "#000000");
        assert_eq!(RgbColor::new(156, 39, 176).to_string(), "#9C27B0");
    }
}

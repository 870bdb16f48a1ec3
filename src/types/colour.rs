//! Colour type.

use std::fmt;

use image::Rgba;

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

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Brand blue (#1E40AF), used for the disc and the text lines.
    pub const BRAND_BLUE: Self = Self::rgb(30, 64, 175);

    /// Shield green (#10B981).
    pub const SHIELD_GREEN: Self = Self::rgb(16, 185, 129);

    /// Signature purple (#6366F1).
    pub const SIGNATURE_PURPLE: Self = Self::rgb(99, 102, 241);

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(colour: Colour) -> Self {
        Rgba(colour.to_rgba())
    }
}

impl From<Rgba<u8>> for Colour {
    fn from(pixel: Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Self::new(r, g, b, a)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::BRAND_BLUE), "#1E40AF");
        assert_eq!(format!("{}", Colour::SHIELD_GREEN), "#10B981");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 128)), "#FF000080");
    }

    #[test]
    fn test_rgba_conversion() {
        let pixel: Rgba<u8> = Colour::SIGNATURE_PURPLE.into();
        assert_eq!(pixel.0, [99, 102, 241, 255]);
        assert_eq!(Colour::from(pixel), Colour::SIGNATURE_PURPLE);
    }

    #[test]
    fn test_constants() {
        assert!(Colour::TRANSPARENT.is_transparent());
        assert!(!Colour::WHITE.is_transparent());
        assert_eq!(Colour::WHITE, Colour::rgb(255, 255, 255));
    }
}

//! RegionColor - display colors for region templates
//!
//! Each template carries one opaque base color. Overlays are drawn with
//! two alpha-blended variants of it: a faint one for idle regions and a
//! stronger one for the region under the cursor.
//!
//! Packed 32-bit values use `0xRRGGBBAA` (red in MSB, alpha in LSB).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Alpha of the idle overlay variant
pub const ALPHA_STANDARD: u8 = 80;
/// Alpha of the selected overlay variant
pub const ALPHA_ACTIVE: u8 = 150;

const RED_SHIFT: u32 = 24;
const GREEN_SHIFT: u32 = 16;
const BLUE_SHIFT: u32 = 8;

/// RGBA color value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    /// Create a new RGBA color
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create an opaque RGB color (alpha = 255)
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 255)
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self::new(self.red, self.green, self.blue, alpha)
    }

    /// Pack into a 32-bit `0xRRGGBBAA` value.
    #[inline]
    pub fn to_u32(self) -> u32 {
        ((self.red as u32) << RED_SHIFT)
            | ((self.green as u32) << GREEN_SHIFT)
            | ((self.blue as u32) << BLUE_SHIFT)
            | self.alpha as u32
    }

    /// Unpack a 32-bit `0xRRGGBBAA` value.
    #[inline]
    pub fn from_u32(pixel: u32) -> Self {
        Self::new(
            ((pixel >> RED_SHIFT) & 0xff) as u8,
            ((pixel >> GREEN_SHIFT) & 0xff) as u8,
            ((pixel >> BLUE_SHIFT) & 0xff) as u8,
            (pixel & 0xff) as u8,
        )
    }
}

/// Named palette offered to template editors
const PALETTE: [(&str, Rgba); 12] = [
    ("red", Rgba::rgb(255, 0, 0)),
    ("green", Rgba::rgb(0, 255, 0)),
    ("blue", Rgba::rgb(0, 0, 255)),
    ("cyan", Rgba::rgb(0, 255, 255)),
    ("magenta", Rgba::rgb(255, 0, 255)),
    ("yellow", Rgba::rgb(255, 255, 0)),
    ("orange", Rgba::rgb(255, 200, 0)),
    ("pink", Rgba::rgb(255, 175, 175)),
    ("gray", Rgba::rgb(128, 128, 128)),
    ("dark_gray", Rgba::rgb(64, 64, 64)),
    ("light_gray", Rgba::rgb(192, 192, 192)),
    ("black", Rgba::rgb(0, 0, 0)),
];

/// Base color of a region template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionColor {
    name: Option<&'static str>,
    base: Rgba,
}

impl RegionColor {
    /// An unnamed color; alpha of `rgb` is ignored.
    pub fn custom(rgb: Rgba) -> Self {
        Self {
            name: None,
            base: rgb.with_alpha(255),
        }
    }

    /// Look up a palette color by name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownColor`] for names outside the palette.
    pub fn by_name(name: &str) -> Result<Self> {
        PALETTE
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(n, base)| Self {
                name: Some(n),
                base,
            })
            .ok_or_else(|| Error::UnknownColor(name.to_string()))
    }

    /// All palette colors in palette order.
    pub fn palette() -> impl Iterator<Item = RegionColor> {
        PALETTE.iter().map(|&(n, base)| Self {
            name: Some(n),
            base,
        })
    }

    /// Palette name, if this is a palette color
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Opaque base color
    pub fn base(&self) -> Rgba {
        self.base
    }

    /// Overlay variant for idle regions
    pub fn standard(&self) -> Rgba {
        self.base.with_alpha(ALPHA_STANDARD)
    }

    /// Overlay variant for the selected region
    pub fn active(&self) -> Rgba {
        self.base.with_alpha(ALPHA_ACTIVE)
    }
}

impl Default for RegionColor {
    fn default() -> Self {
        Self {
            name: Some("gray"),
            base: Rgba::rgb(128, 128, 128),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_roundtrip() {
        let c = Rgba::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.to_u32(), 0x12345678);
        assert_eq!(Rgba::from_u32(0x12345678), c);
    }

    #[test]
    fn test_by_name() {
        let c = RegionColor::by_name("Magenta").unwrap();
        assert_eq!(c.name(), Some("magenta"));
        assert_eq!(c.base(), Rgba::rgb(255, 0, 255));
        assert!(matches!(
            RegionColor::by_name("chartreuse"),
            Err(Error::UnknownColor(_))
        ));
    }

    #[test]
    fn test_variants() {
        for color in RegionColor::palette() {
            let standard = color.standard();
            let active = color.active();
            assert!(active.alpha > standard.alpha);
            assert_eq!(standard.with_alpha(255), color.base());
            assert_eq!(active.with_alpha(255), color.base());
        }
    }

    #[test]
    fn test_custom_is_opaque() {
        let c = RegionColor::custom(Rgba::new(1, 2, 3, 4));
        assert_eq!(c.name(), None);
        assert_eq!(c.base().alpha, 255);
    }
}

//! Display colors for flows and their glow shading.

use crate::{CoreError, CoreResult};

/// Fixed color of reverse (recycling) flows.
pub const RECYCLING_COLOR: Color = Color::rgb(0x8E, 0xE8, 0x9E);

/// Fallback for landfills missing from the color table.
pub const FALLBACK_COLOR: Color = Color::rgb(0xFF, 0xFF, 0xFF);

/// An opaque sRGB color.  Alpha is a drawing-surface state, not a color
/// channel (trail and head share a color but differ in alpha).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string (leading `#` optional).
    pub fn from_hex(hex: &str) -> CoreResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidColor(hex.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| CoreError::InvalidColor(hex.to_string()))?;
        Ok(Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        })
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

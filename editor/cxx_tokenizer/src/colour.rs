//! Packed ARGB colour value used by the default colour table.

use std::fmt;

/// A 32-bit `0xAARRGGBB` colour.
///
/// Only carries the value; mapping categories to theme colours is the
/// editor's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Colour(u32);

impl Colour {
    /// Opaque black, the fallback for unknown token types.
    pub const BLACK: Colour = Colour(0xff00_0000);

    /// Create a colour from a packed `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Colour(argb)
    }

    /// Create an opaque colour from red, green and blue components.
    #[inline]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Colour(u32::from_be_bytes([0xff, red, green, blue]))
    }

    /// The packed `0xAARRGGBB` value.
    #[inline]
    pub const fn argb(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    #[inline]
    pub const fn red(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    #[inline]
    pub const fn green(self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0.to_be_bytes()[3]
    }
}

impl fmt::Display for Colour {
    /// Formats as `#aarrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

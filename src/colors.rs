//! Fixed widget colors.
//!
//! All values are `palette::Srgb` (0.0-1.0 components) for direct use with
//! [`Canvas`](crate::geometry::Canvas) implementations.

use palette::Srgb;

/// Surface background, `#BDBDBD`.
pub const BACKGROUND: Srgb = Srgb::new(189.0 / 255.0, 189.0 / 255.0, 189.0 / 255.0);

/// Bar fill, `#4527A0`.
pub const BAR: Srgb = Srgb::new(69.0 / 255.0, 39.0 / 255.0, 160.0 / 255.0);

/// Creates an RGB color from a packed `0xRRGGBB` value.
#[inline]
pub fn from_hex(rgb: u32) -> Srgb {
    Srgb::<u8>::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8).into_format()
}

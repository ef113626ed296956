//! Glyph sampling for the falling-symbol background.

use rand::Rng;

/// First code point a glyph may take (`!`).
pub const GLYPH_FIRST: u8 = 33;

/// One past the sampling range. Glyphs are drawn as `floor(r * (126 - 33)) + 33`,
/// so the largest code point produced is 125 (`}`).
pub const GLYPH_END: u8 = 126;

/// Draw one printable, non-space ASCII glyph uniformly at random.
pub fn random_glyph<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(GLYPH_FIRST + rng.random_range(0..GLYPH_END - GLYPH_FIRST))
}

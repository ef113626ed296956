//! Fixed-size batches of glyphs.

use rand::Rng;

use crate::chars::random_glyph;

/// Number of glyphs in every batch.
pub const BATCH_SIZE: usize = 200;

/// The full set of glyphs on screen, replaced wholesale on every tick.
///
/// Positions carry no identity from one batch to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolBatch {
    glyphs: Box<[char; BATCH_SIZE]>,
}

impl SymbolBatch {
    /// Draw a fresh batch, every glyph sampled independently.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut glyphs = Box::new([' '; BATCH_SIZE]);
        for glyph in glyphs.iter_mut() {
            *glyph = random_glyph(rng);
        }
        Self { glyphs }
    }

    /// Number of glyphs, always [`BATCH_SIZE`].
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// A batch is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn as_slice(&self) -> &[char] {
        self.glyphs.as_slice()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_batch_has_fixed_length() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let batch = SymbolBatch::generate(&mut rng);
            assert_eq!(batch.len(), 200);
            assert_eq!(batch.iter().count(), 200);
        }
    }

    #[test]
    fn test_batch_contains_no_spaces() {
        let mut rng = StdRng::seed_from_u64(2);
        let batch = SymbolBatch::generate(&mut rng);
        assert!(batch.iter().all(|c| c.is_ascii_graphic()));
    }

    #[test]
    fn test_consecutive_batches_differ() {
        let mut rng = StdRng::seed_from_u64(3);
        let first = SymbolBatch::generate(&mut rng);
        let second = SymbolBatch::generate(&mut rng);
        assert_ne!(first, second);
    }
}

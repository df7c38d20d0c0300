//! Half-row glyph compression.
//!
//! A terminal cell is roughly twice as tall as it is wide, so one printed
//! character stands in for a vertical pair of pixels.

use crate::types::{Pixel, GLYPH_EMPTY, GLYPH_FULL, GLYPH_LOWER, GLYPH_UPPER};

/// Glyph table indexed `[top][bottom]`.
const GLYPHS: [[u8; 2]; 2] = [
    [GLYPH_EMPTY, GLYPH_LOWER],
    [GLYPH_UPPER, GLYPH_FULL],
];

#[inline(always)]
fn slot(p: Pixel) -> usize {
    match p {
        Pixel::Empty => 0,
        Pixel::Fill => 1,
    }
}

/// Glyph for a `(top, bottom)` pixel pair.
#[inline]
pub fn compress(top: Pixel, bottom: Pixel) -> u8 {
    GLYPHS[slot(top)][slot(bottom)]
}

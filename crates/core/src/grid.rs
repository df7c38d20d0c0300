//! Grid module - the binary pixel buffer for one animation frame
//!
//! Flat row-major storage (`row * width + col`), allocated once and mutated in
//! place every frame. Dimensions never change after construction.
//! Coordinates: (row, col) with row in `0..height` (top to bottom) and col in
//! `0..width` (left to right).

use std::ops::RangeInclusive;

use crate::types::{Pixel, Point};

/// Pixel buffer with a filled-disk rasterizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    /// Flat array of pixels, row-major order
    cells: Vec<Pixel>,
}

impl Grid {
    /// Create a grid with every pixel EMPTY
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![Pixel::Empty; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    /// Get pixel at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set pixel at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, pixel: Pixel) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = pixel;
                true
            }
            None => false,
        }
    }

    /// Borrow one row of pixels.
    pub fn row(&self, row: usize) -> Option<&[Pixel]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        (0..self.height).map(move |i| {
            let start = i * self.width;
            &self.cells[start..start + self.width]
        })
    }

    pub fn cells(&self) -> &[Pixel] {
        &self.cells
    }

    /// Number of FILL pixels.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|p| p.is_filled()).count()
    }

    /// Set every pixel to `value`.
    pub fn clear(&mut self, value: Pixel) {
        self.cells.fill(value);
    }

    /// Fill the disk `(row - c.x)² + (col - c.y)² <= radius²`.
    ///
    /// Only cells inside the grid are touched; the rest of the disk is
    /// clipped silently. A negative radius fills nothing.
    pub fn circle(&mut self, center: Point, radius: i32) {
        if radius < 0 {
            return;
        }

        let (cx, cy, r) = (i64::from(center.x), i64::from(center.y), i64::from(radius));
        let r2 = r * r;

        let Some(rows) = clip_span(cx - r, cx + r, self.height) else {
            return;
        };
        let Some(cols) = clip_span(cy - r, cy + r, self.width) else {
            return;
        };

        for i in rows {
            let dx = i as i64 - cx;
            let start = i * self.width;
            for j in cols.clone() {
                let dy = j as i64 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.cells[start + j] = Pixel::Fill;
                }
            }
        }
    }

    /// Build a grid from row strings, `#` for FILL and anything else EMPTY.
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut grid = Self::new(height, width);
        for (i, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), width);
            for (j, ch) in line.bytes().enumerate() {
                if ch == b'#' {
                    grid.set(i, j, Pixel::Fill);
                }
            }
        }
        grid
    }
}

/// Intersect the inclusive span `[lo, hi]` with `0..len`.
fn clip_span(lo: i64, hi: i64, len: usize) -> Option<RangeInclusive<usize>> {
    let lo = lo.max(0);
    let hi = hi.min(len as i64 - 1);
    if lo > hi {
        return None;
    }
    Some(lo as usize..=hi as usize)
}

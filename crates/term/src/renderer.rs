//! Renderer: flushes a pixel grid to a terminal as glyph rows.
//!
//! Every frame is a full redraw. After drawing, the cursor is moved back to
//! the top-left of the frame so the next draw overwrites it in place instead
//! of scrolling. This relies on the frame shape staying constant; a smaller
//! frame would leave stale glyphs from a larger one behind.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, QueueableCommand};

use crate::core::Grid;
use crate::glyph::compress;
use crate::types::LINE_RETURN;

pub struct Renderer<W: Write> {
    grid: Grid,
    sink: W,
    buf: Vec<u8>,
}

impl Renderer<io::Stdout> {
    pub fn stdout(grid: Grid) -> Self {
        Self::new(grid, io::stdout())
    }
}

impl<W: Write> Renderer<W> {
    pub fn new(grid: Grid, sink: W) -> Self {
        let capacity = (grid.width() + 1) * text_rows(&grid);
        Self {
            grid,
            sink,
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Hide the cursor for the duration of the animation.
    pub fn enter(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()
    }

    /// Park the cursor below the last frame and show it again.
    ///
    /// Expects to be called right after [`Renderer::rewind`].
    pub fn finish(&mut self) -> Result<()> {
        self.buf.clear();
        let rows = text_rows(&self.grid);
        if rows > 0 {
            self.buf.queue(cursor::MoveDown(saturate(rows)))?;
        }
        self.buf.queue(cursor::Show)?;
        self.flush_buf()
    }

    /// Write the grid as `height / 2` lines of `width` glyphs.
    pub fn show(&mut self) -> Result<()> {
        self.buf.clear();
        encode_rows_into(&self.grid, &mut self.buf);
        self.flush_buf()
    }

    /// Move the cursor back to the top-left corner of the drawn frame.
    pub fn rewind(&mut self) -> Result<()> {
        self.buf.clear();
        encode_rewind_into(&self.grid, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.sink.write_all(&self.buf)?;
        self.sink.flush()?;
        Ok(())
    }
}

/// Number of printed rows for a grid; a trailing unpaired pixel row is dropped.
pub fn text_rows(grid: &Grid) -> usize {
    grid.height() / 2
}

/// Append the glyph rows for `grid` to `out`.
pub fn encode_rows_into(grid: &Grid, out: &mut Vec<u8>) {
    let mut rows = grid.rows();
    while let (Some(top), Some(bottom)) = (rows.next(), rows.next()) {
        out.extend(top.iter().zip(bottom).map(|(&t, &b)| compress(t, b)));
        out.push(LINE_RETURN);
    }
}

/// Append the cursor-left then cursor-up sequences that undo one frame.
pub fn encode_rewind_into(grid: &Grid, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveLeft(saturate(grid.width())))?;
    out.queue(cursor::MoveUp(saturate(text_rows(grid))))?;
    Ok(())
}

fn saturate(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

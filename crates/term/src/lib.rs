//! Terminal rendering layer.
//!
//! Turns a [`Grid`](ascii_bounce_core::Grid) into printable glyph rows and
//! emits the cursor movement that lets successive frames overwrite each other.
//!
//! - Two pixel rows per text row (see [`glyph`])
//! - Full redraw every frame, encoded into a reusable byte buffer
//! - Any `std::io::Write` sink; stdout in the binary, `Vec<u8>` in tests

pub mod glyph;
pub mod renderer;

pub use ascii_bounce_core as core;
pub use ascii_bounce_types as types;

pub use glyph::compress;
pub use renderer::{encode_rewind_into, encode_rows_into, text_rows, Renderer};

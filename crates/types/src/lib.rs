//! Shared types and constants for the bouncing-ball renderer.
//!
//! Everything here is plain data with no dependencies, so the grid, the
//! terminal layer and the driver can all agree on the same vocabulary.
//!
//! # Simulation constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_HEIGHT` | 32 | Pixel rows (16 printed text rows) |
//! | `GRID_WIDTH` | 64 | Pixel columns (one glyph each) |
//! | `BALL_RADIUS` | 8 | `GRID_HEIGHT / 4` |
//! | `GRAVITY` | 250.0 | Downward acceleration, pixels/s² |
//! | `TIMESTEP` | 1/30 | Integration step, seconds |
//! | `BOUNCE_DAMPING` | 0.68 | Velocity retained (and reversed) on floor contact |
//! | `FRAME_MS` | 33 | Sleep between frames (`1000 / 30`) |
//!
//! # Glyphs
//!
//! Two vertically adjacent pixels share one printed character:
//!
//! | top | bottom | glyph |
//! |-----|--------|-------|
//! | EMPTY | EMPTY | `' '` |
//! | EMPTY | FILL | `'_'` |
//! | FILL | EMPTY | `'^'` |
//! | FILL | FILL | `'C'` |

/// Default grid dimensions.
pub const GRID_HEIGHT: usize = 32;
pub const GRID_WIDTH: usize = 64;

/// Ball radius in pixels.
pub const BALL_RADIUS: i32 = GRID_HEIGHT as i32 / 4;

/// Kinematics.
pub const GRAVITY: f32 = 250.0;
pub const TIMESTEP: f32 = 1.0 / 30.0;
pub const BOUNCE_DAMPING: f32 = 0.68;

/// Frame pacing (milliseconds).
pub const FRAME_MS: u64 = 1000 / 30;

/// Glyph bytes used by the half-row compression.
pub const GLYPH_EMPTY: u8 = b' ';
pub const GLYPH_LOWER: u8 = b'_';
pub const GLYPH_UPPER: u8 = b'^';
pub const GLYPH_FULL: u8 = b'C';

/// Line terminator written after every glyph row.
pub const LINE_RETURN: u8 = b'\n';

/// A single binary pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pixel {
    #[default]
    Empty,
    Fill,
}

impl Pixel {
    pub fn is_filled(self) -> bool {
        self == Pixel::Fill
    }
}

/// Integer position in grid coordinates.
///
/// `x` selects the row and `y` selects the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Tunables for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub height: usize,
    pub width: usize,
    pub radius: i32,
    pub gravity: f32,
    pub timestep: f32,
    pub damping: f32,
    pub frame_ms: u64,
}

impl SimConfig {
    /// Lowest row the ball center may occupy before it bounces.
    pub fn floor(&self) -> i32 {
        self.height as i32 - self.radius
    }

    /// Column past which the ball has fully left the grid.
    pub fn exit_column(&self) -> i32 {
        self.width as i32 + 2 * self.radius
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            height: GRID_HEIGHT,
            width: GRID_WIDTH,
            radius: BALL_RADIUS,
            gravity: GRAVITY,
            timestep: TIMESTEP,
            damping: BOUNCE_DAMPING,
            frame_ms: FRAME_MS,
        }
    }
}

//! Core simulation module - pure, deterministic, and testable
//!
//! This crate holds the pixel buffer and the ball that moves across it. It has
//! no dependencies on terminals or I/O:
//!
//! - **Deterministic**: identical inputs always rasterize to identical grids
//! - **Allocation-free per frame**: the grid is allocated once and reused
//!
//! # Module Structure
//!
//! - [`grid`]: binary pixel buffer with clear and filled-disk rasterization
//! - [`ball`]: gravity, floor bounce and horizontal drift for the driver
//!
//! # Example
//!
//! ```
//! use ascii_bounce_core::Grid;
//! use ascii_bounce_types::{Pixel, Point};
//!
//! let mut grid = Grid::new(4, 4);
//! grid.clear(Pixel::Empty);
//! grid.circle(Point::new(1, 1), 1);
//! assert_eq!(grid.filled_count(), 5);
//! ```

pub mod ball;
pub mod grid;

pub use ascii_bounce_types as types;

pub use ball::Ball;
pub use grid::Grid;

//! Ball kinematics driven once per frame.
//!
//! The ball falls under constant gravity, drifts one column per frame, and
//! bounces off the floor with a damping factor. Positions are integer grid
//! coordinates; the fractional part of each vertical displacement is
//! truncated toward zero.

use tracing::debug;

use crate::types::{Point, SimConfig};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Point,
    /// Vertical velocity in rows per second (positive is downward).
    pub velocity: f32,
}

impl Ball {
    /// Ball at rest in the top-left corner.
    pub fn new() -> Self {
        Self {
            pos: Point::new(0, 0),
            velocity: 0.0,
        }
    }

    /// Advance one timestep. Returns true when the ball hit the floor.
    pub fn step(&mut self, cfg: &SimConfig) -> bool {
        self.velocity += cfg.gravity * cfg.timestep;
        self.pos.x += (self.velocity * cfg.timestep) as i32;
        self.pos.y += 1;

        let floor = cfg.floor();
        if self.pos.x > floor {
            self.pos.x = floor;
            self.velocity *= -cfg.damping;
            debug!(
                column = self.pos.y,
                velocity = self.velocity,
                "ball bounced"
            );
            return true;
        }
        false
    }

    /// Whether any part of the ball can still be on screen.
    pub fn in_flight(&self, cfg: &SimConfig) -> bool {
        self.pos.y < cfg.exit_column()
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

//! Bouncing ball runner (default binary).
//!
//! Drops a ball from the top-left corner, lets it bounce along the floor and
//! stops once it has rolled off the right edge. Frames are drawn in place on
//! stdout; diagnostics go to stderr and are silent unless `RUST_LOG` is set.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::tty::IsTty;
use tracing::info;

use ascii_bounce::core::{Ball, Grid};
use ascii_bounce::term::Renderer;
use ascii_bounce::types::{Pixel, SimConfig};

fn main() -> Result<()> {
    init_tracing();

    let cfg = SimConfig::default();
    let interactive = std::io::stdout().is_tty();
    let mut renderer = Renderer::stdout(Grid::new(cfg.height, cfg.width));
    if interactive {
        renderer.enter()?;
    }

    let result = run(&mut renderer, &cfg);

    // Always try to restore the cursor.
    if interactive {
        let _ = renderer.finish();
    }
    result
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn run<W: std::io::Write>(renderer: &mut Renderer<W>, cfg: &SimConfig) -> Result<()> {
    info!(
        height = cfg.height,
        width = cfg.width,
        radius = cfg.radius,
        "starting simulation"
    );

    let frame = Duration::from_millis(cfg.frame_ms);
    let mut ball = Ball::new();
    let mut frames = 0u64;
    let mut bounces = 0u32;

    while ball.in_flight(cfg) {
        if ball.step(cfg) {
            bounces += 1;
        }

        let grid = renderer.grid_mut();
        grid.clear(Pixel::Empty);
        grid.circle(ball.pos, cfg.radius);
        renderer.show()?;
        renderer.rewind()?;
        frames += 1;

        thread::sleep(frame);
    }

    info!(frames, bounces, "ball left the screen");
    Ok(())
}

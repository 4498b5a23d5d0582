//! Brick Breaker - a single-screen brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (entities, collisions, game state)
//! - `renderer`: Draw-call emission through the `Canvas` collaborator
//! - `platform`: Clock and keyboard collaborators
//! - `runner`: Fixed-timestep main loop
//! - `settings`: Runtime behavior toggles

pub mod platform;
pub mod renderer;
pub mod runner;
pub mod settings;
pub mod sim;

pub use runner::{EndReason, FrameDriver, RunSummary};
pub use settings::{PaddleSteering, Settings, TopBandResponse};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    use crate::Color;

    /// Window dimensions (pixels)
    pub const WINDOW_WIDTH_PX: usize = 800;
    pub const WINDOW_HEIGHT_PX: usize = 480;
    pub const WINDOW_WIDTH: f32 = WINDOW_WIDTH_PX as f32;
    pub const WINDOW_HEIGHT: f32 = WINDOW_HEIGHT_PX as f32;
    pub const WINDOW_COLOR: Color = Color::BLACK;

    /// Fixed simulation interval (30 Hz, in ms)
    pub const FRAME_INTERVAL_MS: f32 = (1.0 / 30.0) * 1000.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_COLOR: Color = Color::rgb(255, 153, 51);
    /// Launch speeds (pixels/ms)
    pub const BALL_SPEED_X: f32 = BALL_RADIUS * 10.0 / 1000.0;
    pub const BALL_SPEED_Y: f32 = BALL_RADIUS * 8.5 / 1000.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_THICKNESS: f32 = 10.0;
    pub const PADDLE_COLOR: Color = Color::WHITE;
    /// Velocity increment per directional input (pixels/ms)
    pub const PADDLE_SPEED: f32 = PADDLE_WIDTH / 10.0 / 1000.0;

    /// Border defaults
    pub const WALL_THICKNESS: f32 = 15.0;
    pub const WALL_COLOR: Color = Color::rgb(255, 119, 0);

    /// Brick grid
    pub const BRICK_ROWS: usize = 8;
    pub const BRICK_COLUMNS: usize = 14;
    /// Column pitch uses integer division of the window width
    pub const BRICK_WIDTH: f32 = (WINDOW_WIDTH_PX / BRICK_COLUMNS) as f32;
    pub const BRICK_HEIGHT: f32 = PADDLE_THICKNESS * 2.0;
    pub const BRICKS_HEIGHT: f32 = BRICK_ROWS as f32 * BRICK_HEIGHT;
    pub const BRICKS_TOP: f32 = WINDOW_HEIGHT / 2.0 - BRICKS_HEIGHT * 0.75;
    pub const BRICKS_LEFT: f32 = WALL_THICKNESS;
    /// Top edge of row 0; rows are laid out bottom-up from here
    pub const FIRST_BRICK: f32 = BRICKS_TOP + (BRICK_ROWS - 1) as f32 * BRICK_HEIGHT;
}

/// An opaque RGB fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Convert a screen-space vector (y grows downward) into a heading in
/// degrees, clockwise from straight up, normalized to (0, 360].
///
/// Up = 360, right = 90, down = 180, left = 270.
#[inline]
pub fn screen_heading(v: Vec2) -> f32 {
    // Flip to y-up before measuring the angle
    let theta = (-v.y).atan2(v.x);
    let mut degrees = 90.0 - theta.to_degrees();
    if degrees <= 0.0 {
        degrees += 360.0;
    }
    degrees
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_heading_cardinals() {
        assert!((screen_heading(Vec2::new(0.0, -1.0)) - 360.0).abs() < 0.001);
        assert!((screen_heading(Vec2::new(1.0, 0.0)) - 90.0).abs() < 0.001);
        assert!((screen_heading(Vec2::new(0.0, 1.0)) - 180.0).abs() < 0.001);
        assert!((screen_heading(Vec2::new(-1.0, 0.0)) - 270.0).abs() < 0.001);
    }

    #[test]
    fn test_screen_heading_range() {
        for i in 0..360 {
            let a = (i as f32).to_radians();
            let h = screen_heading(Vec2::new(a.cos(), a.sin()));
            assert!(h > 0.0 && h <= 360.0, "heading {h} out of range");
        }
    }

    #[test]
    fn test_brick_layout_constants() {
        assert_eq!(consts::BRICK_WIDTH, 57.0);
        assert_eq!(consts::BRICKS_TOP, 120.0);
        assert_eq!(consts::FIRST_BRICK, 260.0);
    }
}

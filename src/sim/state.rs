//! Game state and core simulation types
//!
//! Every entity is created once by `GameState::new` and lives for the whole
//! run. Bricks are never removed; a latched `hit` flag retires them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Color;
use crate::consts::*;
use crate::settings::Settings;

/// The ball (a circle)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center position (window pixels)
    pub pos: Vec2,
    /// Velocity (pixels/ms)
    pub vel: Vec2,
    radius: f32,
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, color: Color) -> Self {
        debug_assert!(radius > 0.0, "ball radius must be positive");
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            color,
        }
    }

    /// Radius is fixed at creation
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Sit centered on top of the paddle (pre-launch)
    pub fn rest_on(&mut self, paddle: &MovingBlock) {
        self.pos = Vec2::new(
            paddle.block.left + paddle.block.width / 2.0,
            paddle.block.top - self.radius - 1.0,
        );
    }
}

/// An axis-aligned rectangle: walls, paddle body and bricks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl Block {
    pub fn new(left: f32, top: f32, width: f32, height: f32, color: Color) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "block must have a positive size");
        Self {
            left,
            top,
            width,
            height,
            color,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Closest point of the rectangle to `p` (p itself when inside)
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.left, self.right()),
            p.y.clamp(self.top, self.bottom()),
        )
    }
}

/// A block with its own velocity (the paddle)
///
/// `vel.y` stays 0: the paddle only moves horizontally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovingBlock {
    pub block: Block,
    pub vel: Vec2,
}

impl MovingBlock {
    pub fn new(block: Block) -> Self {
        Self {
            block,
            vel: Vec2::ZERO,
        }
    }
}

/// The four play-field walls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Borders {
    pub left: Block,
    pub top: Block,
    pub right: Block,
    pub bottom: Block,
}

impl Borders {
    /// Walls flush against the window edges
    pub fn around_window(width: f32, height: f32, thickness: f32, color: Color) -> Self {
        Self {
            left: Block::new(0.0, 0.0, thickness, height, color),
            top: Block::new(0.0, 0.0, width, thickness, color),
            right: Block::new(width - thickness, 0.0, thickness, height, color),
            bottom: Block::new(0.0, height - thickness, width, thickness, color),
        }
    }

    /// Walls in draw order: left, top, right, bottom
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        [&self.left, &self.top, &self.right, &self.bottom].into_iter()
    }
}

/// A destructible brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub block: Block,
    /// One-way: once set, the brick no longer collides or renders
    pub hit: bool,
    /// Reward for breaking the brick (informational)
    pub points: u32,
    /// Ball speed-up hook; carried per row, not applied on hit
    pub speed_adjust: f32,
}

/// Row-band properties, lightest/cheapest first
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowBand {
    pub color: Color,
    pub points: u32,
    pub speed_adjust: f32,
}

impl RowBand {
    pub fn for_row(row: usize) -> Self {
        match row {
            0..=1 => Self {
                color: Color::WHITE,
                points: 1,
                speed_adjust: 0.0,
            },
            2..=3 => Self {
                color: Color::rgb(112, 121, 121), // light grey
                points: 4,
                speed_adjust: 3.0,
            },
            4..=5 => Self {
                color: Color::rgb(70, 70, 80), // dark grey
                points: 8,
                speed_adjust: 4.0,
            },
            _ => Self {
                color: Color::rgb(255, 153, 51), // light orange
                points: 12,
                speed_adjust: 6.0,
            },
        }
    }
}

/// Fixed-size rows x columns brick grid, stored row-major
///
/// Indices stay stable for the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: usize,
    columns: usize,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Lay out the grid bottom-up from `first_top`, left to right per row, one
    /// `pitch` cell per brick, each brick inset by 1 pixel on every side.
    pub fn layout(rows: usize, columns: usize, left: f32, first_top: f32, pitch: Vec2) -> Self {
        let mut bricks = Vec::with_capacity(rows * columns);
        let mut top = first_top;
        for row in 0..rows {
            let band = RowBand::for_row(row);
            let mut x = left;
            for _ in 0..columns {
                bricks.push(Brick {
                    block: Block::new(
                        x + 1.0,
                        top + 1.0,
                        pitch.x - 2.0,
                        pitch.y - 2.0,
                        band.color,
                    ),
                    hit: false,
                    points: band.points,
                    speed_adjust: band.speed_adjust,
                });
                x += pitch.x;
            }
            top -= pitch.y;
        }
        Self {
            rows,
            columns,
            bricks,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Brick> {
        if row < self.rows && column < self.columns {
            self.bricks.get(row * self.columns + column)
        } else {
            None
        }
    }

    /// All bricks in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    /// Bricks still in play, row-major
    pub fn standing(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| !b.hit)
    }

    pub fn hit_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.hit).count()
    }

    /// Sum of points over retired bricks
    pub fn points_earned(&self) -> u32 {
        self.bricks.iter().filter(|b| b.hit).map(|b| b.points).sum()
    }

    pub fn is_cleared(&self) -> bool {
        self.bricks.iter().all(|b| b.hit)
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: MovingBlock,
    pub walls: Borders,
    pub bricks: BrickGrid,
    /// Ball has launched from its resting spot on the paddle
    pub started: bool,
    /// Behavior toggles applied by the step
    pub settings: Settings,
}

impl GameState {
    /// Place every entity at its starting position
    pub fn new(settings: Settings) -> Self {
        let paddle = MovingBlock::new(Block::new(
            (WINDOW_WIDTH - PADDLE_WIDTH) / 2.0,
            WINDOW_HEIGHT - 2.0 * PADDLE_THICKNESS,
            PADDLE_WIDTH,
            PADDLE_THICKNESS,
            PADDLE_COLOR,
        ));

        let walls = Borders::around_window(WINDOW_WIDTH, WINDOW_HEIGHT, WALL_THICKNESS, WALL_COLOR);

        let mut ball = Ball::new(Vec2::ZERO, BALL_RADIUS, BALL_COLOR);
        ball.rest_on(&paddle);

        let bricks = BrickGrid::layout(
            BRICK_ROWS,
            BRICK_COLUMNS,
            BRICKS_LEFT,
            FIRST_BRICK,
            Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
        );

        Self {
            ball,
            paddle,
            walls,
            bricks,
            started: false,
            settings,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

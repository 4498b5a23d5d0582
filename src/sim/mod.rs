//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Entities are created once and mutated in place
//! - Stable row-major brick iteration
//! - Time enters only as the `delta` handed to `tick`

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{DEGENERATE_HEADING, blocks_overlap, collision_check, collision_heading};
pub use state::{Ball, Block, Borders, Brick, BrickGrid, GameState, MovingBlock, RowBand};
pub use tick::{Command, tick};

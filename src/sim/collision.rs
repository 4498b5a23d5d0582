//! Collision detection and response for the ball against rectangles
//!
//! Face selection is by heading: the angle from the ball center to the
//! nearest point of the block picks one of four bands, and the band decides
//! which velocity component flips and where the ball is put back.

use glam::Vec2;

use super::state::{Ball, Block};
use crate::screen_heading;
use crate::settings::TopBandResponse;

/// Heading used when the ball is neither on a block nor moving
pub const DEGENERATE_HEADING: f32 = 180.0;

/// Heading (degrees, clockwise from up, in (0, 360]) from the ball center to
/// the nearest point on `block`, or `None` when the ball does not touch it.
///
/// When the center lies on or inside the block the difference vector is zero;
/// the heading is then taken from the ball's direction of travel.
pub fn collision_heading(ball: &Ball, block: &Block) -> Option<f32> {
    let nearest = block.nearest_point(ball.pos);
    let diff = nearest - ball.pos;
    let distance = diff.length();

    if distance > ball.radius() {
        return None;
    }

    if distance > 0.0 {
        Some(screen_heading(diff))
    } else if ball.vel != Vec2::ZERO {
        Some(screen_heading(ball.vel))
    } else {
        Some(DEGENERATE_HEADING)
    }
}

/// Check the ball against a block and, on contact, bounce it off the struck
/// face and move it just clear of the block.
///
/// Returns whether a collision occurred.
pub fn collision_check(ball: &mut Ball, block: &Block, top_band: TopBandResponse) -> bool {
    let Some(heading) = collision_heading(ball, block) else {
        return false;
    };
    let r = ball.radius();

    // horizontal bands
    if heading > 225.0 && heading < 315.0 {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = block.right() + r + 1.0;
    } else if heading > 45.0 && heading < 135.0 {
        match top_band {
            TopBandResponse::Horizontal => {
                ball.vel.x = -ball.vel.x;
                ball.pos.x = block.left - r - 1.0;
            }
            TopBandResponse::Vertical => {
                ball.vel.y = -ball.vel.y;
                ball.pos.x = block.left - r - 1.0;
            }
        }
    }

    // vertical bands
    if heading >= 315.0 || heading <= 45.0 {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = block.bottom() + r + 1.0;
    } else if (135.0..=225.0).contains(&heading) {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = block.top - r - 1.0;
    }

    true
}

/// Strict axis-aligned overlap of two rectangles
pub fn blocks_overlap(a: &Block, b: &Block) -> bool {
    a.left < b.right() && a.right() > b.left && a.top < b.bottom() && a.bottom() > b.top
}

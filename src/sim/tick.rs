//! Fixed timestep simulation step
//!
//! Applies one input command, integrates paddle and ball, then runs the
//! ordered collision pass.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{blocks_overlap, collision_check};
use super::state::GameState;
use crate::consts::*;
use crate::settings::PaddleSteering;

/// A single discretized input command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Command {
    #[default]
    None,
    Left,
    Up,
    Right,
    /// Stop the paddle
    Down,
    Exit,
    Start,
    Pause,
}

/// Advance the game by `delta` ms, consuming `input`.
///
/// `input` is reset to `Command::None` once applied. Pause and Exit belong to
/// the main loop and are ignored here.
///
/// Returns true when the ball struck the bottom wall (game over).
pub fn tick(state: &mut GameState, input: &mut Command, delta: f32) -> bool {
    apply_input(state, *input, delta);
    *input = Command::None;

    state.paddle.block.left += state.paddle.vel.x * delta;

    if state.started {
        state.ball.pos += state.ball.vel * delta;
    } else {
        state.ball.rest_on(&state.paddle);
    }

    run_collisions(state)
}

fn apply_input(state: &mut GameState, input: Command, delta: f32) {
    let steering = state.settings.steering;
    match input {
        Command::Left => match steering {
            PaddleSteering::Accumulate => state.paddle.vel.x -= PADDLE_SPEED,
            PaddleSteering::Direct => state.paddle.vel.x = -PADDLE_SPEED,
        },
        Command::Right => match steering {
            PaddleSteering::Accumulate => state.paddle.vel.x += PADDLE_SPEED,
            PaddleSteering::Direct => state.paddle.vel.x = PADDLE_SPEED,
        },
        Command::Down => state.paddle.vel.x = 0.0,
        Command::Start if !state.started => launch(state, delta),
        Command::Start | Command::Up | Command::Pause | Command::Exit | Command::None => {}
    }
}

/// Launch the ball up and away; the parity of the frame time picks the side
fn launch(state: &mut GameState, delta: f32) {
    let mut vel = Vec2::new(BALL_SPEED_X, -BALL_SPEED_Y);
    if (delta * 10.0) as i64 & 1 == 1 {
        vel.x = -vel.x;
    }
    state.ball.vel = vel;
    state.started = true;
    log::info!("Ball launched ({:+.3}, {:+.3}) px/ms", vel.x, vel.y);
}

/// Ordered collision pass. Returns true on a bottom-wall hit.
///
/// Order: paddle vs side walls, ball vs paddle / top / bottom (bottom only
/// when the first two miss), ball vs left / right (right only when left
/// misses), then every standing brick row-major.
fn run_collisions(state: &mut GameState) -> bool {
    let top_band = state.settings.top_band;
    let walls = &state.walls;
    let paddle = &mut state.paddle;
    let ball = &mut state.ball;

    // paddle vs walls, including a paddle that moved wholly past a wall
    if blocks_overlap(&paddle.block, &walls.left) || paddle.block.left < walls.left.right() {
        paddle.block.left = walls.left.right() + 1.0;
        paddle.vel.x = 0.0;
    } else if blocks_overlap(&paddle.block, &walls.right)
        || paddle.block.right() > walls.right.left
    {
        paddle.block.left = walls.right.left - paddle.block.width - 1.0;
        paddle.vel.x = 0.0;
    }
    if !state.started {
        ball.rest_on(paddle);
    }

    // vertical
    let mut game_over = false;
    if !collision_check(ball, &paddle.block, top_band)
        && !collision_check(ball, &walls.top, top_band)
    {
        game_over = collision_check(ball, &walls.bottom, top_band);
    }

    // horizontal
    if !collision_check(ball, &walls.left, top_band) {
        collision_check(ball, &walls.right, top_band);
    }

    let columns = state.bricks.columns();
    for (i, brick) in state.bricks.iter_mut().enumerate() {
        if !brick.hit && collision_check(ball, &brick.block, top_band) {
            brick.hit = true;
            log::debug!(
                "Brick hit at row {} column {} (+{} points)",
                i / columns,
                i % columns,
                brick.points
            );
        }
    }

    if game_over {
        log::info!("Ball lost past the paddle");
    }
    game_over
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Settings, TopBandResponse};
    use proptest::prelude::*;

    /// A launched state with every brick already retired
    fn open_field() -> GameState {
        let mut state = GameState::default();
        state.bricks.iter_mut().for_each(|b| b.hit = true);
        state.started = true;
        state
    }

    #[test]
    fn test_ball_moving_away_from_paddle() {
        let mut state = open_field();
        state.ball.pos = Vec2::new(400.0, 240.0);
        state.ball.vel = Vec2::new(0.0, -5.0);
        assert_eq!(state.paddle.block.left, 360.0);

        let mut input = Command::None;
        let game_over = tick(&mut state, &mut input, 1.0);

        assert!(!game_over);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 235.0));
        assert_eq!(state.ball.vel, Vec2::new(0.0, -5.0));
    }

    #[test]
    fn test_unlaunched_ball_rides_paddle() {
        let mut state = GameState::default();
        let mut input = Command::Right;
        tick(&mut state, &mut input, 100.0);

        let expected_left = 360.0 + PADDLE_SPEED * 100.0;
        assert!((state.paddle.block.left - expected_left).abs() < 0.001);
        assert!((state.ball.pos.x - (expected_left + PADDLE_WIDTH / 2.0)).abs() < 0.001);
        assert_eq!(state.ball.pos.y, state.paddle.block.top - BALL_RADIUS - 1.0);
        assert_eq!(state.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_input_consumed_once() {
        let mut state = GameState::default();
        let mut input = Command::Left;
        tick(&mut state, &mut input, 1.0);
        assert_eq!(input, Command::None);
    }

    #[test]
    fn test_directional_input_accumulates() {
        let mut state = GameState::default();
        for _ in 0..3 {
            let mut input = Command::Left;
            tick(&mut state, &mut input, 0.0);
        }
        assert!((state.paddle.vel.x + 3.0 * PADDLE_SPEED).abs() < 1e-6);

        let mut input = Command::Down;
        tick(&mut state, &mut input, 0.0);
        assert_eq!(state.paddle.vel.x, 0.0);
    }

    #[test]
    fn test_direct_steering_sets_velocity() {
        let mut state = GameState::new(Settings {
            steering: PaddleSteering::Direct,
            ..Settings::default()
        });
        for _ in 0..3 {
            let mut input = Command::Right;
            tick(&mut state, &mut input, 0.0);
        }
        assert_eq!(state.paddle.vel.x, PADDLE_SPEED);
    }

    #[test]
    fn test_start_launches_once() {
        let mut state = GameState::default();
        let mut input = Command::Start;
        // int(20.0 * 10) = 200, even: launch to the right
        tick(&mut state, &mut input, 20.0);
        assert!(state.started);
        assert_eq!(state.ball.vel, Vec2::new(BALL_SPEED_X, -BALL_SPEED_Y));

        state.ball.vel = Vec2::new(0.01, -0.02);
        let mut input = Command::Start;
        tick(&mut state, &mut input, 20.0);
        assert_eq!(state.ball.vel, Vec2::new(0.01, -0.02));
    }

    #[test]
    fn test_start_odd_parity_launches_left() {
        let mut state = GameState::default();
        let mut input = Command::Start;
        // int(3.35 * 10) = 33, odd
        tick(&mut state, &mut input, 3.35);
        assert_eq!(state.ball.vel, Vec2::new(-BALL_SPEED_X, -BALL_SPEED_Y));
    }

    #[test]
    fn test_up_and_pause_do_nothing() {
        let mut state = GameState::default();
        for cmd in [Command::Up, Command::Pause, Command::Exit] {
            let mut input = cmd;
            tick(&mut state, &mut input, 1.0);
        }
        assert_eq!(state.paddle.vel, Vec2::ZERO);
        assert!(!state.started);
    }

    #[test]
    fn test_paddle_clamped_at_walls() {
        let mut state = GameState::default();
        state.paddle.vel.x = -1.0;
        let mut input = Command::None;
        tick(&mut state, &mut input, 1000.0);
        assert_eq!(state.paddle.block.left, WALL_THICKNESS + 1.0);
        assert_eq!(state.paddle.vel.x, 0.0);

        state.paddle.vel.x = 1.0;
        tick(&mut state, &mut input, 1000.0);
        assert_eq!(
            state.paddle.block.left,
            WINDOW_WIDTH - WALL_THICKNESS - PADDLE_WIDTH - 1.0
        );
        assert_eq!(state.paddle.vel.x, 0.0);
    }

    #[test]
    fn test_resting_ball_follows_clamped_paddle() {
        let mut state = GameState::default();
        state.paddle.vel.x = -0.1;
        let mut input = Command::None;
        tick(&mut state, &mut input, 4000.0);

        assert_eq!(state.paddle.block.left, WALL_THICKNESS + 1.0);
        let on_paddle = Vec2::new(
            WALL_THICKNESS + 1.0 + PADDLE_WIDTH / 2.0,
            state.paddle.block.top - BALL_RADIUS - 1.0,
        );
        assert_eq!(state.ball.pos, on_paddle);

        // Launches upward from the paddle, not from above the window
        let mut input = Command::Start;
        tick(&mut state, &mut input, 20.0);
        for _ in 0..50 {
            let before = state.ball.pos.y;
            let mut input = Command::None;
            assert!(!tick(&mut state, &mut input, 20.0));
            assert!(state.ball.pos.y < before && state.ball.pos.y > WALL_THICKNESS);
        }
    }

    #[test]
    fn test_bottom_wall_is_game_over() {
        let mut state = open_field();
        state.bricks = GameState::default().bricks;
        state.ball.pos = Vec2::new(100.0, 460.0);
        state.ball.vel = Vec2::new(0.0, 0.1);

        let mut input = Command::None;
        assert!(tick(&mut state, &mut input, 1.0));
        assert!(state.ball.vel.y < 0.0);
        assert_eq!(state.bricks.hit_count(), 0);
    }

    #[test]
    fn test_paddle_blocks_bottom_check() {
        let mut state = open_field();
        // On the paddle and close enough to the bottom wall to touch it
        state.ball.pos = Vec2::new(400.0, 458.0);
        state.ball.vel = Vec2::new(0.0, 0.1);

        let mut input = Command::None;
        assert!(!tick(&mut state, &mut input, 0.0));
        assert_eq!(state.ball.vel.y, -0.1);
        assert_eq!(state.ball.pos.y, 460.0 - BALL_RADIUS - 1.0);
    }

    #[test]
    fn test_brick_hit_latches_and_is_skipped() {
        let mut state = GameState::default();
        state.started = true;
        let target = state.bricks.get(0, 5).unwrap().block;
        // Just below the brick, moving up
        state.ball.pos = Vec2::new(target.left + target.width / 2.0, target.bottom() + 5.0);
        state.ball.vel = Vec2::new(0.0, -0.1);

        let mut input = Command::None;
        tick(&mut state, &mut input, 0.0);
        assert!(state.bricks.get(0, 5).unwrap().hit);
        assert_eq!(state.bricks.hit_count(), 1);
        assert_eq!(state.ball.vel.y, 0.1);

        // Back into the same spot: the retired brick no longer bounces the ball
        state.ball.pos = Vec2::new(target.left + target.width / 2.0, target.bottom() + 5.0);
        state.ball.vel = Vec2::new(0.0, -0.1);
        tick(&mut state, &mut input, 0.0);
        assert!(state.bricks.get(0, 5).unwrap().hit);
        assert_eq!(state.ball.vel.y, -0.1);
    }

    #[test]
    fn test_left_wall_bounce_skips_right() {
        let mut state = open_field();
        state.ball.pos = Vec2::new(20.0, 300.0);
        state.ball.vel = Vec2::new(-0.1, 0.0);

        let mut input = Command::None;
        tick(&mut state, &mut input, 0.0);
        assert_eq!(state.ball.vel.x, 0.1);
        assert_eq!(state.ball.pos.x, WALL_THICKNESS + BALL_RADIUS + 1.0);
    }

    #[test]
    fn test_vertical_top_band_toggle_on_side_hit() {
        let settings = Settings {
            top_band: TopBandResponse::Vertical,
            ..Settings::default()
        };
        let mut state = GameState::new(settings);
        state.bricks.iter_mut().for_each(|b| b.hit = true);
        state.started = true;
        // Approaching the right wall from the left: heading 90
        state.ball.pos = Vec2::new(780.0, 300.0);
        state.ball.vel = Vec2::new(0.1, 0.05);

        let mut input = Command::None;
        tick(&mut state, &mut input, 0.0);
        assert_eq!(state.ball.vel, Vec2::new(0.1, -0.05));
        // Stays beside the wall, inside the field
        assert_eq!(
            state.ball.pos,
            Vec2::new(WINDOW_WIDTH - WALL_THICKNESS - BALL_RADIUS - 1.0, 300.0)
        );
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_between_walls(
            commands in proptest::collection::vec(0u8..4, 1..200),
            delta in 0.0f32..200.0,
        ) {
            let mut state = GameState::default();
            let min_left = state.walls.left.right();
            let max_left = state.walls.right.left - state.paddle.block.width;
            for c in commands {
                let mut input = match c {
                    0 => Command::Left,
                    1 => Command::Right,
                    2 => Command::Down,
                    _ => Command::None,
                };
                tick(&mut state, &mut input, delta);
                let left = state.paddle.block.left;
                prop_assert!(left >= min_left && left <= max_left, "paddle left {}", left);
            }
        }

        #[test]
        fn prop_hit_bricks_stay_hit(steps in 1usize..300) {
            let mut state = GameState::default();
            let mut input = Command::Start;
            tick(&mut state, &mut input, 33.0);
            let mut seen = state.bricks.hit_count();
            for _ in 0..steps {
                let before: Vec<bool> = state.bricks.iter().map(|b| b.hit).collect();
                let mut input = Command::None;
                tick(&mut state, &mut input, 33.0);
                for (was, brick) in before.iter().zip(state.bricks.iter()) {
                    prop_assert!(!*was || brick.hit);
                }
                prop_assert!(state.bricks.hit_count() >= seen);
                seen = state.bricks.hit_count();
            }
        }
    }
}

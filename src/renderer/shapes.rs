//! Shape generation for the frame draw list

use glam::Vec2;

use crate::Color;
use crate::sim::GameState;
use crate::sim::state::Block;

/// A filled 2D primitive in window pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rect {
        left: f32,
        top: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

impl Shape {
    pub fn rect(block: &Block) -> Self {
        Shape::Rect {
            left: block.left,
            top: block.top,
            width: block.width,
            height: block.height,
            color: block.color,
        }
    }

    pub fn color(&self) -> Color {
        match *self {
            Shape::Rect { color, .. } | Shape::Circle { color, .. } => color,
        }
    }

    /// Whether the shape touches the axis-aligned cell `[min, max]`
    pub fn touches(&self, min: Vec2, max: Vec2) -> bool {
        match *self {
            Shape::Rect {
                left,
                top,
                width,
                height,
                ..
            } => left < max.x && left + width > min.x && top < max.y && top + height > min.y,
            Shape::Circle { center, radius, .. } => {
                let nearest = center.clamp(min, max);
                nearest.distance_squared(center) < radius * radius
            }
        }
    }
}

/// Draw list for one frame: ball, paddle, walls, then standing bricks.
///
/// Ball and paddle are drawn `delta` ms along their velocity.
pub fn frame_shapes(state: &GameState, delta: f32) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(6 + state.bricks.rows() * state.bricks.columns());

    let ball = &state.ball;
    shapes.push(Shape::Circle {
        center: ball.pos + ball.vel * delta,
        radius: ball.radius(),
        color: ball.color,
    });

    let paddle = &state.paddle;
    let mut paddle_block = paddle.block;
    paddle_block.left += paddle.vel.x * delta;
    paddle_block.top += paddle.vel.y * delta;
    shapes.push(Shape::rect(&paddle_block));

    shapes.extend(state.walls.iter().map(Shape::rect));
    shapes.extend(state.bricks.standing().map(|brick| Shape::rect(&brick.block)));

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_full_grid_draw_list() {
        let state = GameState::default();
        let shapes = frame_shapes(&state, 0.0);
        assert_eq!(shapes.len(), 2 + 4 + BRICK_ROWS * BRICK_COLUMNS);
        assert!(matches!(shapes[0], Shape::Circle { .. }));
        assert_eq!(shapes[1].color(), PADDLE_COLOR);
        assert_eq!(shapes[2].color(), WALL_COLOR);
    }

    #[test]
    fn test_hit_bricks_not_drawn() {
        let mut state = GameState::default();
        state.bricks.iter_mut().step_by(2).for_each(|b| b.hit = true);
        let shapes = frame_shapes(&state, 0.0);
        assert_eq!(shapes.len(), 2 + 4 + BRICK_ROWS * BRICK_COLUMNS / 2);
    }

    #[test]
    fn test_interpolates_ball_and_paddle() {
        let mut state = GameState::default();
        state.ball.pos = Vec2::new(100.0, 100.0);
        state.ball.vel = Vec2::new(0.1, -0.2);
        state.paddle.vel.x = 0.5;

        let shapes = frame_shapes(&state, 10.0);
        match shapes[0] {
            Shape::Circle { center, radius, .. } => {
                assert!((center - Vec2::new(101.0, 98.0)).length() < 1e-4);
                assert_eq!(radius, BALL_RADIUS);
            }
            _ => panic!("ball should be a circle"),
        }
        match shapes[1] {
            Shape::Rect { left, top, .. } => {
                assert_eq!(left, 365.0);
                assert_eq!(top, 460.0);
            }
            _ => panic!("paddle should be a rect"),
        }
        // Simulation state itself is untouched
        assert_eq!(state.paddle.block.left, 360.0);
    }

    #[test]
    fn test_touches() {
        let rect = Shape::Rect {
            left: 10.0,
            top: 10.0,
            width: 10.0,
            height: 10.0,
            color: Color::WHITE,
        };
        assert!(rect.touches(Vec2::new(0.0, 0.0), Vec2::new(11.0, 11.0)));
        assert!(!rect.touches(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0)));

        let circle = Shape::Circle {
            center: Vec2::new(50.0, 50.0),
            radius: 5.0,
            color: Color::WHITE,
        };
        assert!(circle.touches(Vec2::new(52.0, 52.0), Vec2::new(60.0, 60.0)));
        assert!(!circle.touches(Vec2::new(56.0, 56.0), Vec2::new(60.0, 60.0)));
    }
}

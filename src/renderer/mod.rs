//! Rendering module
//!
//! The game emits a clear color, a list of filled shapes and a present call;
//! a `Canvas` turns those into pixels (or terminal cells).

pub mod shapes;
pub mod terminal;

pub use shapes::{Shape, frame_shapes};
pub use terminal::TerminalCanvas;

use crate::Color;
use crate::consts::WINDOW_COLOR;
use crate::sim::GameState;

/// Render collaborator
pub trait Canvas {
    /// Start a frame filled with `color`
    fn clear(&mut self, color: Color);
    /// Queue one filled shape; later shapes paint over earlier ones
    fn draw(&mut self, shape: &Shape);
    /// Show the frame
    fn present(&mut self) -> std::io::Result<()>;
}

/// Draw the game, interpolating moving entities `delta` ms ahead of the
/// last simulated state.
pub fn render<C: Canvas + ?Sized>(
    canvas: &mut C,
    state: &GameState,
    delta: f32,
) -> std::io::Result<()> {
    canvas.clear(WINDOW_COLOR);
    for shape in frame_shapes(state, delta) {
        canvas.draw(&shape);
    }
    canvas.present()
}

//! Terminal canvas
//!
//! Rasterizes the draw list onto the terminal cell grid: the window is scaled
//! to the current terminal size and each cell takes the color of the last
//! shape touching it.

use std::io::Write;
use std::time::{Duration, Instant};

use crossterm::style::{self, Print, ResetColor, SetBackgroundColor};
use crossterm::{cursor, queue, terminal};
use glam::Vec2;

use super::{Canvas, Shape};
use crate::Color;
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Minimum time between two presented frames (~60 Hz)
const MIN_PRESENT_INTERVAL: Duration = Duration::from_millis(16);

/// Fallback grid when the terminal size is unavailable
const DEFAULT_GRID: (u16, u16) = (80, 24);

/// Canvas drawing onto any `Write` terminal stream
pub struct TerminalCanvas<W: Write> {
    out: W,
    background: Color,
    shapes: Vec<Shape>,
    last_present: Option<Instant>,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            background: Color::BLACK,
            shapes: Vec::new(),
            last_present: None,
        }
    }

    /// Cell colors for a `cols` x `rows` grid, row-major
    pub fn rasterize(&self, cols: u16, rows: u16) -> Vec<Color> {
        let cell = Vec2::new(
            WINDOW_WIDTH / cols.max(1) as f32,
            WINDOW_HEIGHT / rows.max(1) as f32,
        );
        let mut cells = Vec::with_capacity(cols as usize * rows as usize);
        for row in 0..rows {
            for col in 0..cols {
                let min = Vec2::new(col as f32, row as f32) * cell;
                let max = min + cell;
                let color = self
                    .shapes
                    .iter()
                    .rev()
                    .find(|shape| shape.touches(min, max))
                    .map_or(self.background, Shape::color);
                cells.push(color);
            }
        }
        cells
    }

    fn write_frame(&mut self, cols: u16, rows: u16) -> std::io::Result<()> {
        let cells = self.rasterize(cols, rows);
        for (row, line) in cells.chunks(cols.max(1) as usize).enumerate() {
            queue!(self.out, cursor::MoveTo(0, row as u16))?;
            let mut current = None;
            for &color in line {
                if current != Some(color) {
                    queue!(self.out, SetBackgroundColor(term_color(color)))?;
                    current = Some(color);
                }
                queue!(self.out, Print(' '))?;
            }
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}

fn term_color(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn clear(&mut self, color: Color) {
        self.background = color;
        self.shapes.clear();
    }

    fn draw(&mut self, shape: &Shape) {
        self.shapes.push(*shape);
    }

    fn present(&mut self) -> std::io::Result<()> {
        let now = Instant::now();
        if let Some(last) = self.last_present {
            if now.duration_since(last) < MIN_PRESENT_INTERVAL {
                return Ok(());
            }
        }
        self.last_present = Some(now);

        let (cols, rows) = terminal::size().unwrap_or(DEFAULT_GRID);
        self.write_frame(cols, rows)
    }
}

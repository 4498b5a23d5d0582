//! Fixed-timestep main loop
//!
//! Elapsed time accumulates into `delta`. Once it reaches the frame interval
//! the simulation steps once with the accumulated time and `delta` is drained
//! by whole intervals; rendering happens every iteration using the leftover
//! `delta` for interpolation.

use std::time::Duration;

use crate::platform::{Clock, InputFrame, InputSource, command_for};
use crate::renderer::{Canvas, render};
use crate::sim::{Command, GameState, tick};

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Close signal or Exit input
    Quit,
    /// Ball hit the bottom wall
    GameOver,
}

/// What a finished run reports
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub elapsed: Duration,
    pub reason: EndReason,
    pub bricks_hit: usize,
    /// Informational only; nothing persists it
    pub points: u32,
}

/// Main loop state: the game plus the loop-owned timing and pause flags
#[derive(Debug)]
pub struct FrameDriver {
    state: GameState,
    /// Accumulated, not yet simulated time (ms)
    delta: f32,
    paused: bool,
    /// Pause was already down on the previous poll
    pause_held: bool,
    /// Latest command waiting for the next step
    pending: Command,
    elapsed_ms: f64,
    cleared_reported: bool,
}

impl FrameDriver {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            delta: 0.0,
            paused: false,
            pause_held: false,
            pending: Command::None,
            elapsed_ms: 0.0,
            cleared_reported: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Leftover time used for interpolation
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// One loop iteration. Returns the end reason once the loop must stop.
    pub fn frame<C: Canvas + ?Sized>(
        &mut self,
        elapsed_ms: f32,
        input: &InputFrame,
        canvas: &mut C,
    ) -> std::io::Result<Option<EndReason>> {
        self.delta += elapsed_ms;
        self.elapsed_ms += f64::from(elapsed_ms);

        let mut end = input.close.then_some(EndReason::Quit);

        let command = command_for(&input.keys);
        match command {
            Command::Exit => end = Some(EndReason::Quit),
            Command::Pause => {
                if !self.pause_held {
                    self.paused = !self.paused;
                    log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
                }
            }
            Command::None => {}
            other => self.pending = other,
        }
        self.pause_held = command == Command::Pause;

        let interval = self.state.settings.frame_interval_ms;
        if self.delta >= interval {
            let stepping = !self.paused && end.is_none();
            if stepping && tick(&mut self.state, &mut self.pending, self.delta) {
                end = Some(EndReason::GameOver);
            }
            self.delta %= interval;
            self.report_cleared();
        }

        render(canvas, &self.state, self.delta)?;
        Ok(end)
    }

    /// Drive the loop until quit or game over
    pub fn run<K, I, C>(
        mut self,
        clock: &mut K,
        input: &mut I,
        canvas: &mut C,
    ) -> std::io::Result<RunSummary>
    where
        K: Clock + ?Sized,
        I: InputSource + ?Sized,
        C: Canvas + ?Sized,
    {
        log::info!(
            "Main loop started ({:.2} ms per step)",
            self.state.settings.frame_interval_ms
        );
        loop {
            let elapsed = clock.elapsed_ms();
            let polled = input.poll()?;
            if let Some(reason) = self.frame(elapsed, &polled, canvas)? {
                let summary = self.summary(reason);
                log::info!(
                    "Run ended: {:?} after {:.1}s, {} bricks ({} points)",
                    summary.reason,
                    summary.elapsed.as_secs_f64(),
                    summary.bricks_hit,
                    summary.points
                );
                return Ok(summary);
            }
        }
    }

    pub fn summary(&self, reason: EndReason) -> RunSummary {
        RunSummary {
            elapsed: Duration::from_secs_f64(self.elapsed_ms.max(0.0) / 1000.0),
            reason,
            bricks_hit: self.state.bricks.hit_count(),
            points: self.state.bricks.points_earned(),
        }
    }

    fn report_cleared(&mut self) {
        if !self.cleared_reported && self.state.bricks.is_cleared() {
            self.cleared_reported = true;
            log::info!("All bricks cleared");
        }
    }
}

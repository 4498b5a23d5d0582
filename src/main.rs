//! Brick Breaker entry point
//!
//! Sets up logging, settings and the terminal, then runs the game loop.

use std::io::stdout;

use brick_breaker::platform::SystemClock;
use brick_breaker::platform::terminal::{TerminalInput, TerminalSession};
use brick_breaker::renderer::TerminalCanvas;
use brick_breaker::sim::GameState;
use brick_breaker::{FrameDriver, Settings};

fn main() -> std::io::Result<()> {
    env_logger::init();
    log::info!("Brick Breaker starting...");

    let settings = Settings::load();
    log::info!(
        "Top band response: {:?}, paddle steering: {}",
        settings.top_band,
        settings.steering.as_str()
    );

    let summary = {
        let _session = TerminalSession::enter()?;
        let mut clock = SystemClock::new();
        let mut input = TerminalInput::new();
        let mut canvas = TerminalCanvas::new(stdout());
        FrameDriver::new(GameState::new(settings)).run(&mut clock, &mut input, &mut canvas)?
    };

    println!("\nTime Elapsed: {} seconds", summary.elapsed.as_secs());
    Ok(())
}

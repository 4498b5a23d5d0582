//! Terminal front end plumbing (crossterm)
//!
//! Terminals report key presses, not key state, so the pressed-key snapshot
//! is every bound key seen since the previous poll.

use std::io::{Write, stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};

use super::input::{InputFrame, InputSource, Key};

/// How long the first poll of an iteration may wait for an event
const POLL_WAIT: Duration = Duration::from_millis(1);

/// Raw mode + alternate screen for as long as the value lives
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    pub fn enter() -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        log::debug!("Terminal session started");
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = stdout();
        if let Err(e) = execute!(out, cursor::Show, terminal::LeaveAlternateScreen) {
            log::warn!("Failed to restore terminal screen: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("Failed to leave raw mode: {}", e);
        }
        let _ = out.flush();
    }
}

/// Keyboard input read from the terminal event queue
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

/// Bound key for a terminal key code
fn key_for(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'a' => Some(Key::A),
            'w' => Some(Key::W),
            'd' => Some(Key::D),
            's' => Some(Key::S),
            'x' => Some(Key::X),
            'p' => Some(Key::P),
            ' ' => Some(Key::Space),
            _ => None,
        },
        _ => None,
    }
}

fn is_close(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> std::io::Result<InputFrame> {
        let mut frame = InputFrame::default();
        let mut wait = POLL_WAIT;
        while event::poll(wait)? {
            wait = Duration::ZERO;
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if is_close(&key) {
                    frame.close = true;
                } else if let Some(bound) = key_for(key.code) {
                    frame.keys.insert(bound);
                }
            }
        }
        Ok(frame)
    }
}

//! Keyboard input mapping
//!
//! The front end reports which keys are down; the core reduces that to one
//! `Command` with a fixed precedence.

use std::collections::HashSet;

use crate::sim::Command;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    W,
    D,
    S,
    X,
    Space,
    P,
}

/// Snapshot of currently pressed keys
pub type KeySet = HashSet<Key>;

/// Key bindings in precedence order: first pressed match wins
pub const KEY_BINDINGS: [(Key, Command); 7] = [
    (Key::A, Command::Left),
    (Key::W, Command::Up),
    (Key::D, Command::Right),
    (Key::S, Command::Down),
    (Key::X, Command::Exit),
    (Key::Space, Command::Start),
    (Key::P, Command::Pause),
];

/// Map a pressed-key snapshot to a single command
pub fn command_for(keys: &KeySet) -> Command {
    KEY_BINDINGS
        .iter()
        .find(|(key, _)| keys.contains(key))
        .map(|&(_, command)| command)
        .unwrap_or_default()
}

/// One poll of the input collaborator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFrame {
    pub keys: KeySet,
    /// Window/terminal close was requested
    pub close: bool,
}

/// Source of keyboard state
pub trait InputSource {
    fn poll(&mut self) -> std::io::Result<InputFrame>;
}

//! Platform abstraction layer
//!
//! Collaborators the main loop polls each iteration:
//! - Time (elapsed ms since the previous poll)
//! - Input (pressed-key snapshot and close signal)
//! - Terminal session setup/teardown for the native front end

pub mod input;
pub mod terminal;
pub mod time;

pub use input::{InputFrame, InputSource, Key, KeySet, command_for};
pub use time::{Clock, SystemClock};

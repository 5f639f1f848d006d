//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::InputAction`]. Turns are
//! discrete presses; the simulation's turn buffer takes care of timing, so
//! there is no auto-repeat handling here.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};

//! Terminal input for the falling-block engine.
//!
//! Maps `crossterm` events into [`crate::types::GameAction`]s and the few
//! non-game signals a front end cares about (focus changes, quit).

pub mod map;

pub use campus_tetris_types as types;

pub use map::{handle_key_event, should_quit, translate_event, InputEvent};

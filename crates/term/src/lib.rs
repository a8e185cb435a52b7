//! Terminal front end for the falling-block engine.
//!
//! [`GameView`] draws a grid snapshot and a small HUD into a [`Frame`] without
//! touching the terminal. [`TerminalRenderer`] owns the terminal and flushes
//! frames to it, redrawing only the runs that changed.

pub mod frame;
pub mod game_view;
pub mod renderer;

pub use campus_tetris_core as core;
pub use campus_tetris_types as types;

pub use frame::{Frame, Glyph, Rgb, Style};
pub use game_view::{format_clock, GameView, Hud, Status, Viewport};
pub use renderer::{encode_diff, encode_full, TerminalRenderer};

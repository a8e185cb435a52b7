//! Campus Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof:
//! `campus_tetris::{types, core, engine, input, term}`.

pub use campus_tetris_core as core;
pub use campus_tetris_engine as engine;
pub use campus_tetris_input as input;
pub use campus_tetris_term as term;
pub use campus_tetris_types as types;

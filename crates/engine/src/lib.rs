//! Game loop for the falling-block engine.
//!
//! [`GameLoop`] is a synchronous state machine that owns the current
//! [`GameSession`](crate::core::GameSession) and turns ticks and button presses
//! into session transitions and callbacks. It never sleeps and never spawns
//! anything.
//!
//! Time comes from outside. [`TickDriver`] is the tokio-based clock: it watches
//! the loop's published [`Schedule`] and calls back into the loop every
//! interval while the game is running. Any other timer can drive the loop the
//! same way by following the schedule.
//!
//! # State machine
//!
//! ```text
//! Idle --start_game--> Running <--toggle_pause--> Paused
//!                         |                          |
//!                  game over / restart        restart / start_game
//!                         v                          v
//!                     Terminated --start_game--> Running
//! ```
//!
//! A lock fault moves the loop to `Faulted`; only `start_game` leaves it.

pub mod driver;
pub mod events;
pub mod game_loop;

pub use campus_tetris_core as core;
pub use campus_tetris_types as types;

pub use driver::{SharedGame, TickDriver};
pub use events::{EndCallback, EndEvent, TickCallback, TickEvent};
pub use game_loop::{FocusAction, GameLoop, LoopState, Schedule};

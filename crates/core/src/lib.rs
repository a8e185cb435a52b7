//! Core rules of the falling-block engine.
//!
//! Everything here is deterministic and free of I/O and timers:
//! - [`Board`]: the locked-cell grid and row operations
//! - [`pieces`]: the shape catalog and the falling piece
//! - [`placement`]: collision checks and the move/rotate/drop transitions
//! - [`scoring`]: points, levels and gravity speed
//! - [`GameSession`] and [`on_lock`]: one game's state and the lock step
//!
//! Session transitions take a [`GameSession`] by value and return the next one.
//!
//! # Example
//!
//! ```
//! use campus_tetris_core::{drop_piece, move_piece, on_lock, GameConfig, GameSession};
//!
//! let session = GameSession::new(&GameConfig::default());
//! let session = move_piece(session, -1, 0);
//! let session = drop_piece(session);
//! let session = on_lock(session).unwrap();
//!
//! assert!(session.is_running());
//! assert_eq!(session.board().cells().iter().filter(|c| !c.is_empty()).count(), 4);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod pieces;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use campus_tetris_types as types;

pub use board::Board;
pub use config::GameConfig;
pub use error::EngineError;
pub use pieces::{all_shapes, shape_of, spawn, ActivePiece, PieceShape};
pub use placement::{can_place, drop_piece, landing_y, move_piece, rotate_piece, KickPolicy};
pub use rng::{BagRng, PieceQueue};
pub use scoring::{level_for_lines, line_clear_points, tick_interval_ms};
pub use session::{on_lock, GameSession};
pub use snapshot::GridSnapshot;

//! Payloads delivered to the caller's callbacks.

use serde::Serialize;

use crate::core::GridSnapshot;

/// Emitted once per gravity tick while the game is running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickEvent {
    pub elapsed_secs: u64,
    pub score: u32,
    /// Locked cells plus the active piece.
    pub grid: GridSnapshot,
}

/// Emitted exactly once each time a game stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EndEvent {
    pub elapsed_secs: u64,
    pub score: u32,
    /// `true` when the caller ended the game, `false` on game over.
    pub is_restart: bool,
}

pub type TickCallback = Box<dyn FnMut(&TickEvent) + Send>;
pub type EndCallback = Box<dyn FnMut(&EndEvent) + Send>;

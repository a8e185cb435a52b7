//! Engine errors.
//!
//! Rejected moves are not errors. The variants here are faults: either the
//! caller handed the engine a bad configuration, or the board was asked to do
//! something the collision checks should have ruled out.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A lock tried to write outside the grid. The collision checks and the
    /// board disagree, so the grid can no longer be trusted.
    #[error("cell ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: i16,
        y: i16,
        width: u16,
        height: u16,
    },

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

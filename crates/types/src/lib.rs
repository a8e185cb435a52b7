//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, so they can be shared by the
//! engine, the input mapping and any presentation layer.
//!
//! # Board Dimensions
//!
//! The reference playfield is 10 columns by 20 rows. Both are configuration
//! parameters of a game; the constants below are only the defaults.
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 1000 | Gravity tick at level 0 |
//! | `MIN_TICK_MS` | 50 | Fastest gravity tick at any level |
//!
//! # Drop Intervals by Level
//!
//! Gravity speeds up with level (milliseconds per row at the default tick):
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0 | 1000ms |
//! | 1 | 800ms |
//! | 2 | 650ms |
//! | 3 | 500ms |
//! | 4 | 400ms |
//! | 5 | 320ms |
//! | 6 | 250ms |
//! | 7 | 200ms |
//! | 8+ | 160ms |
//!
//! # Examples
//!
//! ```
//! use campus_tetris_types::{Cell, ColorToken, GameAction, PieceKind};
//!
//! let cell = Cell::filled(PieceKind::T.color());
//! assert!(!cell.is_empty());
//! assert_eq!(cell.color, Some(ColorToken::Purple));
//!
//! assert_eq!(GameAction::from_str("moveDown"), Some(GameAction::MoveDown));
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells (10 columns)
pub const DEFAULT_BOARD_WIDTH: u16 = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Gravity tick interval at level 0 (1000ms = one row per second)
pub const DEFAULT_TICK_MS: u32 = 1000;

/// Floor for the gravity tick, whatever the level and base tick
pub const MIN_TICK_MS: u32 = 50;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Drop intervals by level (milliseconds per row for a 1000ms base tick)
///
/// Index 0 = Level 0, Index 8 = Level 8+
pub const DROP_INTERVALS: [u32; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N lines in a single lock at level 0:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Abstract color of a locked cell.
///
/// The engine never deals in pixels; a presentation layer maps each token to
/// a theme color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

impl ColorToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Cyan => "cyan",
            ColorToken::Yellow => "yellow",
            ColorToken::Purple => "purple",
            ColorToken::Green => "green",
            ColorToken::Red => "red",
            ColorToken::Blue => "blue",
            ColorToken::Orange => "orange",
        }
    }
}

/// A cell on the game board
///
/// An empty cell carries no color; a filled cell always does. Emptiness is
/// derived from the color so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub color: Option<ColorToken>,
}

impl Cell {
    pub const EMPTY: Cell = Cell { color: None };

    pub const fn filled(color: ColorToken) -> Self {
        Self { color: Some(color) }
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none()
    }
}

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    pub fn color(&self) -> ColorToken {
        match self {
            PieceKind::I => ColorToken::Cyan,
            PieceKind::O => ColorToken::Yellow,
            PieceKind::T => ColorToken::Purple,
            PieceKind::S => ColorToken::Green,
            PieceKind::Z => ColorToken::Red,
            PieceKind::J => ColorToken::Blue,
            PieceKind::L => ColorToken::Orange,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use campus_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("T"), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Player commands that a game loop understands
///
/// Left, right and down are three distinct moves. Down is never an alias of
/// right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    MoveDown,
    /// Rotate piece to its next rotation state
    Rotate,
    /// Move piece straight down as far as it goes
    Drop,
    /// Toggle pause state
    Pause,
    /// End the current game and start a new one
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use campus_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            "rotate" => Some(GameAction::Rotate),
            "drop" => Some(GameAction::Drop),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
            GameAction::Drop => "drop",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

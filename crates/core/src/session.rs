//! Game session - one game's worth of state, from first spawn to game over.
//!
//! A session is a plain value. The placement functions and [`on_lock`] take it
//! by value and return the next one, so the game loop can swap its current
//! session atomically and nothing else ever aliases the authoritative grid.

use tracing::{debug, trace};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::Result;
use crate::pieces::{spawn, ActivePiece, PieceShape};
use crate::placement::can_place;
use crate::rng::PieceQueue;
use crate::scoring::{level_for_lines, line_clear_points};
use crate::snapshot::GridSnapshot;

#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) active: Option<ActivePiece>,
    queue: PieceQueue,
    score: u32,
    lines: u32,
    level: u32,
    elapsed_ms: u64,
    running: bool,
    paused: bool,
}

impl GameSession {
    /// Fresh game on an empty board sized by `config`.
    pub fn new(config: &GameConfig) -> Self {
        Self::with_board(Board::new(config.width, config.height), config.seed)
    }

    /// Fresh game on a prepared board.
    ///
    /// The first piece is spawned immediately. If it does not fit, the session
    /// starts out already over.
    pub fn with_board(board: Board, seed: u32) -> Self {
        Self::blank(board, seed).spawn_next()
    }

    /// Session with a specific active piece, bypassing the randomizer for the
    /// first piece. Later pieces come from a queue seeded with `seed`.
    pub fn with_piece(board: Board, piece: ActivePiece, seed: u32) -> Self {
        let mut session = Self::blank(board, seed);
        if can_place(&session.board, &piece, 0, 0, 0) {
            session.active = Some(piece);
        } else {
            session.running = false;
        }
        session
    }

    /// Like [`with_piece`](Self::with_piece) but without the placement check,
    /// so the piece may overlap locked cells or lie outside the grid. Only for
    /// exercising lock failures.
    #[doc(hidden)]
    pub fn with_piece_unchecked(board: Board, piece: ActivePiece, seed: u32) -> Self {
        let mut session = Self::blank(board, seed);
        session.active = Some(piece);
        session
    }

    fn blank(board: Board, seed: u32) -> Self {
        Self {
            board,
            active: None,
            queue: PieceQueue::new(seed),
            score: 0,
            lines: 0,
            level: 0,
            elapsed_ms: 0,
            running: true,
            paused: false,
        }
    }

    /// Draw the next shape and put it at the top of the board.
    ///
    /// A spawn that overlaps locked cells ends the game.
    fn spawn_next(mut self) -> Self {
        let shape = self.queue.draw();
        let piece = spawn(shape, self.board.width());
        if can_place(&self.board, &piece, 0, 0, 0) {
            self.active = Some(piece);
        } else {
            debug!(
                kind = shape.kind.as_str(),
                score = self.score,
                "spawn blocked, game over"
            );
            self.active = None;
            self.running = false;
        }
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// Shape the next spawn will use.
    pub fn next_shape(&self) -> &'static PieceShape {
        self.queue.peek()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_ms / 1000
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Running, not paused: the only state in which pieces move.
    pub fn is_live(&self) -> bool {
        self.running && !self.paused
    }

    /// Ended because a spawn was blocked (as opposed to being ended by the
    /// caller).
    pub fn is_game_over(&self) -> bool {
        !self.running && self.active.is_none()
    }

    /// Seed for the game that follows this one.
    pub fn next_seed(&self) -> u32 {
        self.queue.seed()
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Stop the session without a game over.
    pub fn end(&mut self) {
        self.running = false;
    }

    pub fn advance_clock(&mut self, ms: u64) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(ms);
    }

    /// Board with the active piece drawn on top.
    pub fn grid(&self) -> GridSnapshot {
        GridSnapshot::compose(&self.board, self.active.as_ref())
    }
}

/// Merge the active piece into the board, clear full rows, score them and
/// spawn the next piece.
///
/// Fails only if the piece lies outside the grid, which means the collision
/// checks and the board disagree; the caller must not keep playing on it.
pub fn on_lock(mut session: GameSession) -> Result<GameSession> {
    let Some(piece) = session.active.take() else {
        return Ok(session);
    };

    session.board.lock_cells(&piece.cells())?;

    let rows = session.board.full_rows();
    if !rows.is_empty() {
        let points = line_clear_points(rows.len(), session.level);
        session.board = session.board.clear_rows(&rows);
        session.score = session.score.saturating_add(points);
        session.lines += rows.len() as u32;
        session.level = level_for_lines(session.lines);
        trace!(
            rows = ?rows,
            points,
            score = session.score,
            level = session.level,
            "rows cleared"
        );
    } else {
        trace!(kind = piece.kind().as_str(), "piece locked");
    }

    Ok(session.spawn_next())
}

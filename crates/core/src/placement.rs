//! Collision and placement - the only place that decides whether a piece may
//! occupy a configuration.
//!
//! Every operation takes a session by value and hands one back. A rejected
//! proposal returns the session untouched; rejection is normal play, not an
//! error.

use crate::board::Board;
use crate::pieces::ActivePiece;
use crate::session::GameSession;

/// What to try when a naive rotation collides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KickPolicy {
    /// Reject the rotation.
    #[default]
    None,
    /// Try the SRS kick offsets of the shape, first fit wins.
    Srs,
}

/// Would `piece`, shifted by (dx, dy) and rotated by `rotation_delta` states,
/// sit entirely on free in-bounds cells?
pub fn can_place(board: &Board, piece: &ActivePiece, dx: i16, dy: i16, rotation_delta: i8) -> bool {
    piece
        .cells_at(dx, dy, rotation_delta)
        .iter()
        .all(|&(x, y)| board.is_cell_free(x, y))
}

/// Translate the active piece if the target is legal.
pub fn move_piece(mut session: GameSession, dx: i16, dy: i16) -> GameSession {
    if !session.is_live() {
        return session;
    }
    if let Some(piece) = session.active {
        if can_place(&session.board, &piece, dx, dy, 0) {
            session.active = Some(piece.translated(dx, dy));
        }
    }
    session
}

/// Advance the active piece to its next rotation state.
///
/// With `KickPolicy::None` a colliding rotation is rejected. With
/// `KickPolicy::Srs` the shape's kick offsets are tried in order.
pub fn rotate_piece(mut session: GameSession, kicks: KickPolicy) -> GameSession {
    if !session.is_live() {
        return session;
    }
    let Some(piece) = session.active else {
        return session;
    };
    if piece.shape.rotation_count() < 2 {
        return session;
    }

    if can_place(&session.board, &piece, 0, 0, 1) {
        session.active = Some(piece.rotated(1));
        return session;
    }

    if kicks == KickPolicy::Srs {
        // First entry is the naive rotation, already rejected above.
        for &(kx, ky) in piece.shape.kicks(piece.rotation_index).iter().skip(1) {
            let (kx, ky) = (kx as i16, ky as i16);
            if can_place(&session.board, &piece, kx, ky, 1) {
                session.active = Some(piece.translated(kx, ky).rotated(1));
                break;
            }
        }
    }

    session
}

/// Move the active piece straight down as far as it goes.
///
/// The piece is not locked here; the next gravity tick finds it grounded and
/// locks it.
pub fn drop_piece(mut session: GameSession) -> GameSession {
    if !session.is_live() {
        return session;
    }
    if let Some(mut piece) = session.active {
        while can_place(&session.board, &piece, 0, 1, 0) {
            piece = piece.translated(0, 1);
        }
        session.active = Some(piece);
    }
    session
}

/// Row the active piece would come to rest on, for a landing preview.
pub fn landing_y(board: &Board, piece: &ActivePiece) -> i16 {
    let mut dy = 0;
    while can_place(board, piece, 0, dy + 1, 0) {
        dy += 1;
    }
    piece.origin_y + dy
}

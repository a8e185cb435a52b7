//! Pieces module - tetromino catalog, rotation states and spawning
//!
//! Rotation states follow the Super Rotation System layout so that the optional
//! SRS wall kicks line up with the shapes.
//! Reference: https://tetris.wiki/SRS

use arrayvec::ArrayVec;

use crate::types::{ColorToken, PieceKind};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// One rotation state - 4 mino offsets inside a 4x4 box
pub type Minos = [MinoOffset; 4];

/// Kick offsets tried for one clockwise transition, first entry is (0, 0)
pub type Kicks = [(i8, i8); 5];

/// Immutable description of a catalog shape.
#[derive(Debug, PartialEq, Eq)]
pub struct PieceShape {
    pub kind: PieceKind,
    pub color: ColorToken,
    rotations: &'static [Minos],
    /// Clockwise kick table indexed by the state being left
    kicks: &'static [Kicks],
}

impl PieceShape {
    pub fn rotation_count(&self) -> usize {
        self.rotations.len()
    }

    /// Minos of a rotation state. The index wraps around.
    pub fn minos(&self, rotation_index: usize) -> &'static Minos {
        let rotations: &'static [Minos] = self.rotations;
        &rotations[rotation_index % rotations.len()]
    }

    /// Kick offsets for rotating clockwise out of `rotation_index`.
    ///
    /// Shapes without SRS data get an empty slice.
    pub fn kicks(&self, rotation_index: usize) -> &'static [(i8, i8)] {
        let kicks: &'static [Kicks] = self.kicks;
        if kicks.is_empty() {
            return &[];
        }
        &kicks[rotation_index % kicks.len()]
    }
}

const I_ROTATIONS: [Minos; 4] = [
    // N: horizontal, centered on row 1
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    // E: vertical, right-aligned
    [(2, 0), (2, 1), (2, 2), (2, 3)],
    // S: horizontal, centered on row 2
    [(0, 2), (1, 2), (2, 2), (3, 2)],
    // W: vertical, left-aligned
    [(1, 0), (1, 1), (1, 2), (1, 3)],
];

/// O piece has a single state
const O_ROTATIONS: [Minos; 1] = [[(1, 0), (2, 0), (1, 1), (2, 1)]];

const T_ROTATIONS: [Minos; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const S_ROTATIONS: [Minos; 4] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
    [(1, 1), (2, 1), (0, 2), (1, 2)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_ROTATIONS: [Minos; 4] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

const J_ROTATIONS: [Minos; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_ROTATIONS: [Minos; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

/// Clockwise kicks shared by J, L, S, T, Z (y grows downwards)
const JLSTZ_KICKS: [Kicks; 4] = [
    // N -> E
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // E -> S
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // S -> W
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // W -> N
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
];

/// Clockwise kicks for I (y grows downwards)
const I_KICKS: [Kicks; 4] = [
    // N -> E
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // E -> S
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // S -> W
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // W -> N
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
];

static CATALOG: [PieceShape; 7] = [
    PieceShape {
        kind: PieceKind::I,
        color: ColorToken::Cyan,
        rotations: &I_ROTATIONS,
        kicks: &I_KICKS,
    },
    PieceShape {
        kind: PieceKind::O,
        color: ColorToken::Yellow,
        rotations: &O_ROTATIONS,
        kicks: &[],
    },
    PieceShape {
        kind: PieceKind::T,
        color: ColorToken::Purple,
        rotations: &T_ROTATIONS,
        kicks: &JLSTZ_KICKS,
    },
    PieceShape {
        kind: PieceKind::S,
        color: ColorToken::Green,
        rotations: &S_ROTATIONS,
        kicks: &JLSTZ_KICKS,
    },
    PieceShape {
        kind: PieceKind::Z,
        color: ColorToken::Red,
        rotations: &Z_ROTATIONS,
        kicks: &JLSTZ_KICKS,
    },
    PieceShape {
        kind: PieceKind::J,
        color: ColorToken::Blue,
        rotations: &J_ROTATIONS,
        kicks: &JLSTZ_KICKS,
    },
    PieceShape {
        kind: PieceKind::L,
        color: ColorToken::Orange,
        rotations: &L_ROTATIONS,
        kicks: &JLSTZ_KICKS,
    },
];

/// The full catalog, in `PieceKind::ALL` order.
pub fn all_shapes() -> &'static [PieceShape] {
    &CATALOG
}

pub fn shape_of(kind: PieceKind) -> &'static PieceShape {
    match kind {
        PieceKind::I => &CATALOG[0],
        PieceKind::O => &CATALOG[1],
        PieceKind::T => &CATALOG[2],
        PieceKind::S => &CATALOG[3],
        PieceKind::Z => &CATALOG[4],
        PieceKind::J => &CATALOG[5],
        PieceKind::L => &CATALOG[6],
    }
}

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub shape: &'static PieceShape,
    pub rotation_index: usize,
    pub origin_x: i16,
    pub origin_y: i16,
}

impl ActivePiece {
    pub fn kind(&self) -> PieceKind {
        self.shape.kind
    }

    pub fn color(&self) -> ColorToken {
        self.shape.color
    }

    /// Absolute cell coordinates after a hypothetical translation and rotation.
    pub fn cells_at(&self, dx: i16, dy: i16, rotation_delta: i8) -> [(i16, i16); 4] {
        let count = self.shape.rotation_count() as i64;
        let rotation = (self.rotation_index as i64 + rotation_delta as i64).rem_euclid(count);
        let minos = *self.shape.minos(rotation as usize);
        minos.map(|(mx, my)| {
            (
                self.origin_x + dx + mx as i16,
                self.origin_y + dy + my as i16,
            )
        })
    }

    /// Cells to write into the board when this piece locks.
    pub fn cells(&self) -> ArrayVec<(i16, i16, ColorToken), 4> {
        let color = self.color();
        self.cells_at(0, 0, 0)
            .iter()
            .map(|&(x, y)| (x, y, color))
            .collect()
    }

    pub fn translated(self, dx: i16, dy: i16) -> Self {
        Self {
            origin_x: self.origin_x + dx,
            origin_y: self.origin_y + dy,
            ..self
        }
    }

    pub fn rotated(self, rotation_delta: i8) -> Self {
        let count = self.shape.rotation_count() as i64;
        let rotation = (self.rotation_index as i64 + rotation_delta as i64).rem_euclid(count);
        Self {
            rotation_index: rotation as usize,
            ..self
        }
    }
}

/// Place `shape` at the top of a board of the given width, centered.
pub fn spawn(shape: &'static PieceShape, width: u16) -> ActivePiece {
    ActivePiece {
        shape,
        rotation_index: 0,
        origin_x: (width as i16 - 4) / 2,
        origin_y: 0,
    }
}

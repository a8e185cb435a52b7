//! Grid snapshots handed to presentation layers.
//!
//! A snapshot is an owned copy of the board with the active piece drawn on top,
//! so a renderer can keep it as long as it likes without seeing later moves.

use serde::Serialize;

use crate::board::Board;
use crate::pieces::ActivePiece;
use crate::types::Cell;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major, `height` rows of `width` cells
    pub cells: Vec<Cell>,
}

impl GridSnapshot {
    /// Board cells with `active` painted over them.
    pub fn compose(board: &Board, active: Option<&ActivePiece>) -> Self {
        let mut cells = board.cells().to_vec();
        if let Some(piece) = active {
            let width = board.width() as usize;
            for (x, y, color) in piece.cells() {
                if !board.is_out_of_bounds(x, y) {
                    cells[y as usize * width + x as usize] = Cell::filled(color);
                }
            }
        }
        Self {
            width: board.width(),
            height: board.height(),
            cells,
        }
    }

    /// Snapshot of an empty grid, for a view that has not started a game yet.
    pub fn empty(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width as usize * height as usize],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.width as usize || y >= self.height as usize {
            return None;
        }
        Some(self.cells[y * self.width as usize + x])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // A deserialized snapshot may claim zero width.
        self.cells.chunks(usize::from(self.width).max(1))
    }

    /// `height` rows of `width` cells.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

//! Board module - manages the game grid
//!
//! The board is a `width` x `height` grid where each cell is empty or carries a
//! color token. Storage is a flat row-major vector for cache locality.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Dimensions are fixed for the lifetime of a board.

use crate::config::MAX_BOARD_SIDE;
use crate::error::{EngineError, Result};
use crate::types::{Cell, ColorToken};

/// The game board, flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Row-major cells (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Each side is clamped to `1..=MAX_BOARD_SIDE`, which keeps every cell
    /// addressable by an `i16` coordinate and every row non-empty. Use
    /// [`GameConfig::validate`](crate::GameConfig::validate) to reject bad sizes
    /// instead.
    pub fn new(width: u16, height: u16) -> Self {
        let width = width.clamp(1, MAX_BOARD_SIDE);
        let height = height.clamp(1, MAX_BOARD_SIDE);
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True only for in-bounds empty cells.
    ///
    /// Walls and floor are "not free", which is all the collision checks need.
    pub fn is_cell_free(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(cell) if cell.is_empty())
    }

    pub fn is_out_of_bounds(&self, x: i16, y: i16) -> bool {
        x < 0 || y < 0 || x >= self.width as i16 || y >= self.height as i16
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| !cell.is_empty()))
            .unwrap_or(false)
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write `color` into every listed cell.
    ///
    /// All coordinates are checked before anything is written, so a failed
    /// lock leaves the board untouched.
    pub fn lock_cells(&mut self, cells: &[(i16, i16, ColorToken)]) -> Result<()> {
        if let Some(&(x, y, _)) = cells.iter().find(|&&(x, y, _)| self.is_out_of_bounds(x, y)) {
            return Err(EngineError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        for &(x, y, color) in cells {
            self.set(x, y, Cell::filled(color));
        }
        Ok(())
    }

    /// Indices of completely filled rows, top to bottom.
    pub fn full_rows(&self) -> Vec<usize> {
        (0..self.height as usize)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Remove `rows` and let everything above fall into their place.
    ///
    /// The result has the same dimensions: one empty row is added at the top
    /// for every removed row. Out-of-range and repeated indices are ignored.
    pub fn clear_rows(&self, rows: &[usize]) -> Board {
        let height = self.height as usize;
        let mut removed = vec![false; height];
        for &y in rows {
            if y < height {
                removed[y] = true;
            }
        }
        let removed_count = removed.iter().filter(|&&r| r).count();

        let mut cells = Vec::with_capacity(self.cells.len());
        cells.resize(removed_count * self.width as usize, Cell::EMPTY);
        for (y, row) in self.rows().enumerate() {
            if !removed[y] {
                cells.extend_from_slice(row);
            }
        }

        Board {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Build a board from rows of text, for tests and fixtures.
    ///
    /// `.` is an empty cell; any other character is a filled cell of `color`.
    /// Every row must have the same length.
    pub fn from_ascii(rows: &[&str], color: ColorToken) -> Self {
        let height = rows.len() as u16;
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0) as u16;
        let mut board = Board::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), width as usize, "ragged row {}", y);
            for (x, ch) in row.chars().enumerate() {
                if ch != '.' {
                    board.set(x as i16, y as i16, Cell::filled(color));
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(
            crate::types::DEFAULT_BOARD_WIDTH,
            crate::types::DEFAULT_BOARD_HEIGHT,
        )
    }
}

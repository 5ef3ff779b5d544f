//! Grid structure with validated move application
//!
//! The board is a flat row-major `Vec<Mark>` for an N x N grid. Game moves
//! go through [`Board::apply_move`] / [`Board::undo_move`], which validate
//! bounds and occupancy. The search backtracks with the unchecked
//! [`Board::place`] / [`Board::clear`] primitives on cells it has already
//! enumerated as empty.

use super::{BoardError, Mark, Pos, MIN_BOARD_SIZE};

/// Game board: a square grid of marks with a fixed side length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
}

impl Board {
    /// Create an empty board with the given side length.
    ///
    /// Fails with [`BoardError::InvalidSize`] for sizes below
    /// [`MIN_BOARD_SIZE`].
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < MIN_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Mark::Empty; size * size],
        })
    }

    /// Side length of the grid
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (size squared)
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get mark at position.
    ///
    /// Caller must ensure `pos` is on the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        debug_assert!(self.in_bounds(pos));
        self.cells[pos.to_index(self.size)]
    }

    /// Get mark at a flat row-major index
    #[inline]
    pub fn mark_at(&self, idx: usize) -> Mark {
        debug_assert!(idx < self.cells.len());
        self.cells[idx]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Place a mark without validation.
    /// Use `apply_move` for game moves.
    #[inline]
    pub fn place(&mut self, pos: Pos, mark: Mark) {
        debug_assert!(self.in_bounds(pos));
        let idx = pos.to_index(self.size);
        self.cells[idx] = mark;
    }

    /// Clear a cell without validation
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        debug_assert!(self.in_bounds(pos));
        let idx = pos.to_index(self.size);
        self.cells[idx] = Mark::Empty;
    }

    /// Place a player's mark on an empty cell.
    ///
    /// Fails with [`BoardError::InvalidMove`] if the cell is occupied, the
    /// position is out of bounds, or `mark` is not a player mark.
    pub fn apply_move(&mut self, pos: Pos, mark: Mark) -> Result<(), BoardError> {
        if !mark.is_player() || !self.in_bounds(pos) || !self.is_empty(pos) {
            return Err(BoardError::InvalidMove(pos));
        }
        self.place(pos, mark);
        Ok(())
    }

    /// Clear a previously marked cell.
    ///
    /// Fails with [`BoardError::EmptyCell`] if the cell holds no mark, or
    /// [`BoardError::InvalidMove`] if the position is out of bounds.
    pub fn undo_move(&mut self, pos: Pos) -> Result<(), BoardError> {
        if !self.in_bounds(pos) {
            return Err(BoardError::InvalidMove(pos));
        }
        if self.is_empty(pos) {
            return Err(BoardError::EmptyCell(pos));
        }
        self.clear(pos);
        Ok(())
    }

    /// True iff no empty cells remain
    #[inline]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Mark::Empty)
    }

    /// Number of empty cells
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m == Mark::Empty).count()
    }

    /// Number of marks placed
    #[inline]
    pub fn move_count(&self) -> usize {
        self.cell_count() - self.empty_count()
    }

    /// All empty positions in row-major order.
    ///
    /// The order matters: the search breaks score ties by keeping the first
    /// move seen, so enumeration order makes move selection deterministic.
    pub fn empty_cells(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &m)| m == Mark::Empty)
            .map(|(idx, _)| Pos::from_index(idx, self.size))
            .collect()
    }

    /// Check if no marks have been placed
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&m| m == Mark::Empty)
    }

    /// Clear every cell, keeping the size
    pub fn reset(&mut self) {
        self.cells.fill(Mark::Empty);
    }

    /// Raw cells in row-major order
    #[inline]
    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }
}

//! Board representation for tic-tac-toe

pub mod grid;


// Re-exports
pub use grid::Board;

use thiserror::Error;

/// Smallest playable board (3x3)
pub const MIN_BOARD_SIZE: usize = 3;

/// Cell marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// True for X and O, false for Empty
    #[inline]
    pub fn is_player(self) -> bool {
        self != Mark::Empty
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        };
        write!(f, "{c}")
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Flat row-major index for a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        debug_assert!(size > 0 && idx < size * size);
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Errors reported by board operations.
///
/// All of these are local, recoverable conditions; none are fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Requested board size is below [`MIN_BOARD_SIZE`]
    #[error("board size {0} is below the minimum of {min}", min = MIN_BOARD_SIZE)]
    InvalidSize(usize),
    /// Move targets an occupied or out-of-range cell
    #[error("invalid move at {0}: cell occupied or out of bounds")]
    InvalidMove(Pos),
    /// Undo targets a cell that holds no mark
    #[error("cannot undo at {0}: cell is empty")]
    EmptyCell(Pos),
}

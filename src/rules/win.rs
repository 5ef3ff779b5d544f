//! Win condition checking
//!
//! A player wins by fully occupying any row, column, or diagonal. For a
//! board of size N there are exactly `2N + 2` such lines: N rows, N
//! columns, the main diagonal, and the anti-diagonal.
//!
//! Patterns are generated once per board size and are read-only afterwards;
//! they are not portable across sizes. Win checks always scan the board from
//! scratch because the search fills and clears cells between checks.

use crate::board::{Board, Mark, MIN_BOARD_SIZE};

/// Outcome of a game, derived from board state after each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Moves remain and nobody has completed a line
    InProgress,
    /// The given player completed a line
    Win(Mark),
    /// The board is full with no completed line
    Draw,
}

impl GameOutcome {
    /// True once the game has ended in a win or draw
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// Precomputed winning lines for one board size.
///
/// Each line is a set of flat row-major cell indices; a player occupying
/// every index of any line wins.
///
/// # Example
///
/// ```
/// use tictactoe::WinPatterns;
///
/// let patterns = WinPatterns::new(3);
/// assert_eq!(patterns.len(), 8); // 3 rows + 3 columns + 2 diagonals
/// assert!(patterns.iter().all(|line| line.len() == 3));
/// ```
#[derive(Debug, Clone)]
pub struct WinPatterns {
    size: usize,
    lines: Vec<Vec<usize>>,
}

impl WinPatterns {
    /// Generate all winning lines for a board of the given size.
    pub fn new(size: usize) -> Self {
        debug_assert!(size >= MIN_BOARD_SIZE);
        let mut lines = Vec::with_capacity(2 * size + 2);

        // Rows
        for r in 0..size {
            lines.push((0..size).map(|c| r * size + c).collect());
        }
        // Columns
        for c in 0..size {
            lines.push((0..size).map(|r| r * size + c).collect());
        }
        // Main diagonal and anti-diagonal
        lines.push((0..size).map(|i| i * size + i).collect());
        lines.push((0..size).map(|i| i * size + (size - 1 - i)).collect());

        Self { size, lines }
    }

    /// Board size these patterns were generated for
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of winning lines (`2 * size + 2`)
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the lines as index slices
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.lines.iter().map(Vec::as_slice)
    }
}

/// Check if some winning line is fully occupied by the given mark.
///
/// `patterns` must have been generated for `board.size()`.
pub fn is_win(board: &Board, patterns: &WinPatterns, mark: Mark) -> bool {
    winning_line(board, patterns, mark).is_some()
}

/// Find a line fully occupied by the given mark, if one exists.
///
/// Returns the flat cell indices of the first completed line in generation
/// order (rows, columns, diagonals). Used by front ends to highlight the
/// winning cells.
pub fn winning_line<'a>(
    board: &Board,
    patterns: &'a WinPatterns,
    mark: Mark,
) -> Option<&'a [usize]> {
    debug_assert_eq!(patterns.size(), board.size());
    if !mark.is_player() {
        return None;
    }
    patterns
        .iter()
        .find(|line| line.iter().all(|&idx| board.mark_at(idx) == mark))
}

/// Derive the game outcome from board state.
///
/// Wins are checked before the draw condition, so a line completed by the
/// final move still counts as a win on a full board.
pub fn outcome(board: &Board, patterns: &WinPatterns) -> GameOutcome {
    for mark in [Mark::X, Mark::O] {
        if is_win(board, patterns, mark) {
            return GameOutcome::Win(mark);
        }
    }
    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

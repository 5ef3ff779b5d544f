//! Minimax search with depth limiting
//!
//! The searcher evaluates every empty cell by placing the searching
//! player's mark, recursing with the opponent to move, and reverting the
//! mark before trying the next cell. Scores are always from the searching
//! player's viewpoint: `+1` for a win, `-1` for a loss, `0` for a draw or
//! a depth cutoff, independent of recursion depth.
//!
//! Ties are broken by keeping the first move seen; combined with row-major
//! empty-cell enumeration this makes selection fully deterministic.
//!
//! The search works on a private clone of the board, so the caller's board
//! is observably unchanged when `search` returns.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark, Pos};
//! use tictactoe::search::{Difficulty, Searcher};
//!
//! # fn main() -> Result<(), tictactoe::BoardError> {
//! let mut board = Board::new(3)?;
//! board.apply_move(Pos::new(1, 1), Mark::X)?;
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&board, Mark::O, Difficulty::Hard);
//! assert!(result.best_move.is_some());
//! # Ok(())
//! # }
//! ```

use crate::board::{Board, Mark, Pos, MIN_BOARD_SIZE};
use crate::rules::{is_win, WinPatterns};

use super::Difficulty;

/// Score for a win by the searching player; losses score the negation.
pub const WIN_SCORE: i32 = 1;

/// Worst-case node budget for exhaustive search. When the remaining game
/// tree would exceed this, Hard falls back to the deepest bounded depth
/// that fits, since unbounded traversal is exponential in empty-cell count.
const EXHAUSTIVE_NODE_BUDGET: u64 = 1_000_000;

/// Search result containing the selected move and search statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` only when the board was already full
    pub best_move: Option<Pos>,
    /// Score of the best move from the searching player's viewpoint
    pub score: i32,
    /// Depth limit applied, `None` for a full traversal
    pub depth_limit: Option<u8>,
    /// Nodes visited
    pub nodes: u64,
}

/// Minimax move searcher.
///
/// Holds the win patterns for the current board size (rebuilt only when the
/// size changes) and a node counter. No state survives a single search
/// beyond those caches.
#[derive(Debug)]
pub struct Searcher {
    patterns: WinPatterns,
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self {
            patterns: WinPatterns::new(MIN_BOARD_SIZE),
            nodes: 0,
        }
    }

    /// Nodes visited by the most recent search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Select the best move for `mark` under the given difficulty.
    ///
    /// `best_move` is `None` iff the board has no empty cells; the caller is
    /// responsible for not invoking the search on a finished game.
    pub fn search(&mut self, board: &Board, mark: Mark, difficulty: Difficulty) -> SearchResult {
        debug_assert!(mark.is_player());
        self.sync_patterns(board.size());
        self.nodes = 0;

        let limit = effective_depth_limit(difficulty, board.empty_count());
        let opponent = mark.opponent();
        let mut work = board.clone();
        let mut best_move = None;
        let mut best_score = i32::MIN;

        for pos in board.empty_cells() {
            work.place(pos, mark);
            let score = self.minimax(&mut work, mark, opponent, 0, limit);
            work.clear(pos);
            // Strictly greater: first-seen move wins ties
            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }
        debug_assert_eq!(&work, board);

        let result = SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            depth_limit: limit,
            nodes: self.nodes,
        };
        tracing::trace!(
            ?mark,
            nodes = result.nodes,
            score = result.score,
            "minimax search finished"
        );
        result
    }

    /// Scan for a move that wins immediately for `mark`.
    ///
    /// Returns the first such cell in row-major order. Cheaper than a full
    /// search and used by the engine as a fast path.
    pub fn immediate_win(&mut self, board: &Board, mark: Mark) -> Option<Pos> {
        debug_assert!(mark.is_player());
        self.sync_patterns(board.size());
        self.nodes = 0;

        let mut work = board.clone();
        for pos in board.empty_cells() {
            self.nodes += 1;
            work.place(pos, mark);
            let won = is_win(&work, &self.patterns, mark);
            work.clear(pos);
            if won {
                return Some(pos);
            }
        }
        None
    }

    fn sync_patterns(&mut self, size: usize) {
        if self.patterns.size() != size {
            self.patterns = WinPatterns::new(size);
        }
    }

    /// Recursive minimax over the remaining empty cells.
    ///
    /// `searching` is the player whose move is being chosen at the root;
    /// `to_move` alternates down the tree. Every `place` is reverted by a
    /// matching `clear` before returning, so the board is unchanged across
    /// each recursive call.
    fn minimax(
        &mut self,
        board: &mut Board,
        searching: Mark,
        to_move: Mark,
        depth: u8,
        limit: Option<u8>,
    ) -> i32 {
        self.nodes += 1;

        // Terminal wins score before the depth cutoff, so even a depth-1
        // search sees wins and immediate refutations.
        if is_win(board, &self.patterns, searching) {
            return WIN_SCORE;
        }
        if is_win(board, &self.patterns, searching.opponent()) {
            return -WIN_SCORE;
        }
        if board.is_full() {
            return 0;
        }
        if let Some(limit) = limit {
            if depth >= limit {
                return 0;
            }
        }

        let maximizing = to_move == searching;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for pos in board.empty_cells() {
            board.place(pos, to_move);
            let score = self.minimax(board, searching, to_move.opponent(), depth + 1, limit);
            board.clear(pos);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth limit actually applied for a difficulty and empty-cell count.
///
/// Easy and Medium keep their fixed limits. Hard stays exhaustive while the
/// worst-case node count fits [`EXHAUSTIVE_NODE_BUDGET`] and otherwise
/// falls back to the deepest bounded depth that fits.
fn effective_depth_limit(difficulty: Difficulty, empty_count: usize) -> Option<u8> {
    match difficulty.depth_limit() {
        Some(limit) => Some(limit),
        None => {
            let plies = budgeted_plies(empty_count, EXHAUSTIVE_NODE_BUDGET);
            if plies as usize >= empty_count {
                None
            } else {
                // The candidate move at the root is the first ply, so the
                // recursion limit is one less than the ply budget.
                Some(plies.saturating_sub(1))
            }
        }
    }
}

/// Largest number of plies whose worst-case leaf count (the falling product
/// of the branching factor) stays within `budget`.
fn budgeted_plies(empty_count: usize, budget: u64) -> u8 {
    let mut leaves: u64 = 1;
    let mut plies = 0usize;
    while plies < empty_count {
        leaves = leaves.saturating_mul((empty_count - plies) as u64);
        if leaves > budget {
            break;
        }
        plies += 1;
    }
    plies as u8
}

//! Move-selection engine integrating the search components
//!
//! The engine decides the computer player's move. With the default minimax
//! policy it checks a cheap fast path first and falls back to the full
//! search:
//!
//! 1. **Immediate win**: take any move that completes a line right now
//! 2. **Minimax**: depth-limited search per the configured difficulty
//!
//! The alternative [`MovePolicy::Random`] skips both and picks uniformly
//! among empty cells, the placeholder behavior some front ends shipped.
//! Whichever policy is configured applies consistently for the lifetime of
//! the engine.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Board, Difficulty, Engine, Mark, Pos};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut board = Board::new(3)?;
//! let mut engine = Engine::new(Difficulty::Hard);
//!
//! board.apply_move(Pos::new(1, 1), Mark::X)?;
//!
//! // Engine responds as O
//! let reply = engine.select_move(&board, Mark::O)?;
//! board.apply_move(reply, Mark::O)?;
//! # Ok(())
//! # }
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::board::{Board, Mark, Pos};
use crate::search::minimax::WIN_SCORE;
use crate::search::{random_move, Difficulty, SearchError, Searcher};

/// Which step of move selection produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Found a move that completes a line immediately
    ImmediateWin,
    /// Regular minimax search result
    Minimax,
    /// Uniform-random selection
    Random,
}

/// Move-selection policy, fixed per engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovePolicy {
    /// Difficulty-limited minimax (the default)
    #[default]
    Minimax,
    /// Uniform-random choice among empty cells, ignoring difficulty
    Random,
}

/// Result of a move selection with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// The selected move
    pub pos: Pos,
    /// Score from the moving player's viewpoint (+1 win, -1 loss, 0 draw
    /// or cutoff; 0 for random selection)
    pub score: i32,
    /// Which selection step produced the move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Nodes examined
    pub nodes: u64,
}

/// Move-selection engine for the computer player.
pub struct Engine {
    searcher: Searcher,
    difficulty: Difficulty,
    policy: MovePolicy,
    rng: StdRng,
}

impl Engine {
    /// Create an engine with the default minimax policy.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_policy(difficulty, MovePolicy::default())
    }

    /// Create an engine with an explicit move policy.
    #[must_use]
    pub fn with_policy(difficulty: Difficulty, policy: MovePolicy) -> Self {
        Self {
            searcher: Searcher::new(),
            difficulty,
            policy,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create an engine with a seeded RNG for reproducible random play.
    #[must_use]
    pub fn with_seed(difficulty: Difficulty, policy: MovePolicy, seed: u64) -> Self {
        Self {
            searcher: Searcher::new(),
            difficulty,
            policy,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    #[inline]
    pub fn policy(&self) -> MovePolicy {
        self.policy
    }

    /// Select a move for `mark`.
    ///
    /// Convenience wrapper around [`Engine::select_move_with_stats`].
    /// Fails with [`SearchError::NoMovesAvailable`] if the board is full;
    /// the caller must check for a finished game before invoking.
    pub fn select_move(&mut self, board: &Board, mark: Mark) -> Result<Pos, SearchError> {
        self.select_move_with_stats(board, mark).map(|r| r.pos)
    }

    /// Select a move for `mark`, with selection statistics.
    ///
    /// The board is observably unchanged when this returns; the caller
    /// applies the chosen move itself.
    pub fn select_move_with_stats(
        &mut self,
        board: &Board,
        mark: Mark,
    ) -> Result<MoveResult, SearchError> {
        debug_assert!(mark.is_player());
        let start = Instant::now();

        let result = match self.policy {
            MovePolicy::Random => match random_move(board, &mut self.rng) {
                Some(pos) => MoveResult {
                    pos,
                    score: 0,
                    search_type: SearchType::Random,
                    time_ms: start.elapsed().as_millis() as u64,
                    nodes: 1,
                },
                None => return Err(SearchError::NoMovesAvailable),
            },
            MovePolicy::Minimax => {
                // Fast path: complete a line right now if possible
                if let Some(pos) = self.searcher.immediate_win(board, mark) {
                    MoveResult {
                        pos,
                        score: WIN_SCORE,
                        search_type: SearchType::ImmediateWin,
                        time_ms: start.elapsed().as_millis() as u64,
                        nodes: self.searcher.nodes(),
                    }
                } else {
                    let search = self.searcher.search(board, mark, self.difficulty);
                    match search.best_move {
                        Some(pos) => MoveResult {
                            pos,
                            score: search.score,
                            search_type: SearchType::Minimax,
                            time_ms: start.elapsed().as_millis() as u64,
                            nodes: search.nodes,
                        },
                        None => return Err(SearchError::NoMovesAvailable),
                    }
                }
            }
        };

        debug!(
            ?mark,
            pos = %result.pos,
            score = result.score,
            search_type = ?result.search_type,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "move selected"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn fixture(moves: &[(u8, u8, Mark)]) -> Board {
        let mut board = Board::new(3).unwrap();
        for &(r, c, mark) in moves {
            board.apply_move(Pos::new(r, c), mark).unwrap();
        }
        board
    }

    #[test]
    fn test_immediate_win_fast_path() {
        // X X . / O O . / . . .  -- O to move takes its own win at (1, 2)
        let board = fixture(&[
            (0, 0, Mark::X),
            (0, 1, Mark::X),
            (1, 0, Mark::O),
            (1, 1, Mark::O),
        ]);
        let mut engine = Engine::new(Difficulty::Hard);
        let result = engine.select_move_with_stats(&board, Mark::O).unwrap();
        assert_eq!(result.pos, Pos::new(1, 2));
        assert_eq!(result.search_type, SearchType::ImmediateWin);
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_minimax_path_blocks_threat() {
        // X X . / . O . / . . .  -- no win for O, must block at (0, 2)
        let board = fixture(&[(0, 0, Mark::X), (0, 1, Mark::X), (1, 1, Mark::O)]);
        let mut engine = Engine::new(Difficulty::Hard);
        let result = engine.select_move_with_stats(&board, Mark::O).unwrap();
        assert_eq!(result.pos, Pos::new(0, 2));
        assert_eq!(result.search_type, SearchType::Minimax);
    }

    #[test]
    fn test_full_board_reports_no_moves() {
        let marks = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::X,
        ];
        let mut board = Board::new(3).unwrap();
        for (idx, &mark) in marks.iter().enumerate() {
            board.apply_move(Pos::from_index(idx, 3), mark).unwrap();
        }
        for policy in [MovePolicy::Minimax, MovePolicy::Random] {
            let mut engine = Engine::with_seed(Difficulty::Hard, policy, 1);
            assert_eq!(
                engine.select_move(&board, Mark::X),
                Err(SearchError::NoMovesAvailable)
            );
        }
    }

    #[test]
    fn test_random_policy_selects_empty_cell() {
        let board = fixture(&[(0, 0, Mark::X), (2, 2, Mark::O)]);
        let mut engine = Engine::with_seed(Difficulty::Easy, MovePolicy::Random, 42);
        for _ in 0..20 {
            let result = engine.select_move_with_stats(&board, Mark::X).unwrap();
            assert!(board.is_empty(result.pos));
            assert_eq!(result.search_type, SearchType::Random);
        }
    }

    #[test]
    fn test_board_unchanged_after_selection() {
        let board = fixture(&[(0, 0, Mark::X), (1, 1, Mark::O), (2, 2, Mark::X)]);
        let before = board.clone();
        let mut engine = Engine::new(Difficulty::Hard);
        engine.select_move(&board, Mark::O).unwrap();
        assert_eq!(board, before);
    }
}

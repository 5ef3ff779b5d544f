//! Move search for the computer player
//!
//! Contains:
//! - Difficulty policy mapping to search depth limits
//! - Minimax search with balanced place/clear backtracking
//! - Uniform-random move selection for the degenerate policy

pub mod minimax;
pub mod random;

pub use minimax::{SearchResult, Searcher};
pub use random::random_move;

use std::str::FromStr;

use thiserror::Error;

/// Difficulty setting controlling search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// One-ply lookahead: takes wins and sees immediate refutations,
    /// otherwise near-arbitrary move quality
    Easy,
    /// Three-ply lookahead
    Medium,
    /// Exhaustive game-tree traversal (bounded on large boards, see
    /// [`minimax`])
    Hard,
}

impl Difficulty {
    /// Search depth limit in plies beyond the candidate move.
    ///
    /// `None` means no cutoff: full traversal of the remaining game tree.
    #[inline]
    pub fn depth_limit(self) -> Option<u8> {
        match self {
            Difficulty::Easy => Some(1),
            Difficulty::Medium => Some(3),
            Difficulty::Hard => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

/// Error for unrecognized difficulty names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}' (expected easy, medium, or hard)")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Errors reported by move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Move selection was invoked on a full board
    #[error("no moves available: the board is full")]
    NoMovesAvailable,
}

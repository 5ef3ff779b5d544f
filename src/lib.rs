//! Tic-tac-toe engine with variable board size
//!
//! A board-game engine implementing generalized tic-tac-toe:
//! - N x N boards (N >= 3), flat-indexed grid representation
//! - Win detection over precomputed line patterns (2N + 2 per size)
//! - Minimax move search with difficulty-limited depth
//! - Game sessions with turn tracking, scores, undo, and restart
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Grid representation with validated move application
//! - [`rules`]: Win patterns and outcome derivation
//! - [`search`]: Minimax and random move selection
//! - [`engine`]: Move-selection facade with per-move statistics
//! - [`game`]: Session state for front ends (turns, scores, undo)
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Board, Difficulty, Engine, Mark, Pos};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut board = Board::new(3)?;
//! let mut engine = Engine::new(Difficulty::Hard);
//!
//! // Human opens in the center
//! board.apply_move(Pos::new(1, 1), Mark::X)?;
//!
//! // Engine responds as O
//! let reply = engine.select_move(&board, Mark::O)?;
//! board.apply_move(reply, Mark::O)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Move selection
//!
//! Difficulty maps to search depth: Easy looks one ply ahead, Medium three,
//! Hard traverses the full game tree (bounded by a node budget on boards
//! larger than 3x3). Selection is deterministic: ties break toward the
//! first candidate in row-major order. A uniform-random policy is available
//! as an explicit alternative.

pub mod board;
pub mod engine;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, Mark, Pos, MIN_BOARD_SIZE};
pub use engine::{Engine, MovePolicy, MoveResult, SearchType};
pub use game::{GameConfig, GameError, GameSession, PlayerKind, Scores};
pub use rules::{GameOutcome, WinPatterns};
pub use search::{Difficulty, SearchError, Searcher};

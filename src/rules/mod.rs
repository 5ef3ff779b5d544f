//! Game rules for tic-tac-toe
//!
//! This module implements win and draw detection:
//! - Win-pattern generation for a given board size
//! - Line-completion checks (rows, columns, diagonals)
//! - Outcome derivation (in progress, win, draw)

pub mod win;

// Re-exports for convenient access
pub use win::{is_win, outcome, winning_line, GameOutcome, WinPatterns};

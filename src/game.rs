//! Game session management
//!
//! A [`GameSession`] owns the board, the win patterns for the current size,
//! the turn order, the score tally, and the engine for computer players.
//! Front ends drive it through [`GameSession::play_at`] and
//! [`GameSession::play_computer`] and render whatever state they need.

use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::board::{Board, BoardError, Mark, Pos};
use crate::engine::Engine;
use crate::rules::{outcome, winning_line, GameOutcome, WinPatterns};
use crate::search::{Difficulty, SearchError};

/// Who controls a mark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Computer,
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlayerKind::Human => "human",
            PlayerKind::Computer => "computer",
        };
        write!(f, "{name}")
    }
}

/// Error for unrecognized player kinds
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown player kind '{0}' (expected human or computer)")]
pub struct ParsePlayerKindError(String);

impl FromStr for PlayerKind {
    type Err = ParsePlayerKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "computer" | "ai" => Ok(PlayerKind::Computer),
            _ => Err(ParsePlayerKindError(s.to_string())),
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub player_x: PlayerKind,
    pub player_o: PlayerKind,
    pub difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 3,
            player_x: PlayerKind::Human,
            player_o: PlayerKind::Computer,
            difficulty: Difficulty::Hard,
        }
    }
}

/// Win tally across rounds of one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub x: u32,
    pub o: u32,
}

impl Scores {
    pub fn of(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
            Mark::Empty => 0,
        }
    }

    fn record(&mut self, winner: Mark) {
        match winner {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
            Mark::Empty => {}
        }
    }
}

/// Errors reported by session operations.
#[derive(Debug, Error)]
pub enum GameError {
    /// The round has already ended in a win or draw
    #[error("the game is already over")]
    GameOver,
    /// Undo was requested with no moves played
    #[error("no moves to undo")]
    NothingToUndo,
    /// A computer move was requested on a human player's turn
    #[error("it is not the computer's turn")]
    NotComputersTurn,
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// One game session: board, turn order, scores, and the computer opponent.
pub struct GameSession {
    board: Board,
    patterns: WinPatterns,
    config: GameConfig,
    engine: Engine,
    current_player: Mark,
    outcome: GameOutcome,
    history: Vec<(Pos, Mark)>,
    winning_line: Option<Vec<Pos>>,
    scores: Scores,
}

impl GameSession {
    /// Start a session. X always moves first.
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        let board = Board::new(config.size)?;
        let patterns = WinPatterns::new(config.size);
        Ok(Self {
            board,
            patterns,
            config,
            engine: Engine::new(config.difficulty),
            current_player: Mark::X,
            outcome: GameOutcome::InProgress,
            history: Vec::new(),
            winning_line: None,
            scores: Scores::default(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Cells of the completed line, once a round is won
    pub fn winning_cells(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    pub fn history(&self) -> &[(Pos, Mark)] {
        &self.history
    }

    pub fn difficulty(&self) -> Difficulty {
        self.engine.difficulty()
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.engine.set_difficulty(difficulty);
    }

    /// Who controls the given mark
    pub fn player_kind(&self, mark: Mark) -> PlayerKind {
        match mark {
            Mark::O => self.config.player_o,
            _ => self.config.player_x,
        }
    }

    /// True while the round is running and a computer controls the turn
    pub fn is_computer_turn(&self) -> bool {
        self.outcome == GameOutcome::InProgress
            && self.player_kind(self.current_player) == PlayerKind::Computer
    }

    /// Play the current player's move at `pos`.
    ///
    /// Used for human input; the caller does not pass the mark, the session
    /// tracks whose turn it is.
    pub fn play_at(&mut self, pos: Pos) -> Result<GameOutcome, GameError> {
        if self.outcome.is_over() {
            return Err(GameError::GameOver);
        }
        self.execute_move(pos)
    }

    /// Let the engine choose and play the computer's move.
    ///
    /// Returns the chosen position and the outcome after it.
    pub fn play_computer(&mut self) -> Result<(Pos, GameOutcome), GameError> {
        if self.outcome.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(GameError::NotComputersTurn);
        }
        let pos = self.engine.select_move(&self.board, self.current_player)?;
        let outcome = self.execute_move(pos)?;
        Ok((pos, outcome))
    }

    /// Apply a move for the current player and advance the turn.
    fn execute_move(&mut self, pos: Pos) -> Result<GameOutcome, GameError> {
        let mark = self.current_player;
        self.board.apply_move(pos, mark)?;
        self.history.push((pos, mark));

        self.outcome = outcome(&self.board, &self.patterns);
        match self.outcome {
            GameOutcome::Win(winner) => {
                self.scores.record(winner);
                let size = self.board.size();
                self.winning_line = winning_line(&self.board, &self.patterns, winner).map(|line| {
                    line.iter().map(|&idx| Pos::from_index(idx, size)).collect()
                });
                debug!(%winner, moves = self.history.len(), "round won");
            }
            GameOutcome::Draw => {
                debug!(moves = self.history.len(), "round drawn");
            }
            GameOutcome::InProgress => {
                self.current_player = mark.opponent();
            }
        }
        Ok(self.outcome)
    }

    /// Undo the most recent move(s).
    ///
    /// Against a computer opponent this reverts a full turn pair (the
    /// computer's reply and the human move before it) so the same player is
    /// to move afterwards. Rejected once the round is over, since the score
    /// has already been tallied.
    pub fn undo(&mut self) -> Result<(), GameError> {
        if self.outcome.is_over() {
            return Err(GameError::GameOver);
        }
        if self.history.is_empty() {
            return Err(GameError::NothingToUndo);
        }

        let single_computer = (self.config.player_x == PlayerKind::Computer)
            != (self.config.player_o == PlayerKind::Computer);
        let count = if single_computer && self.history.len() >= 2 {
            2
        } else {
            1
        };

        for _ in 0..count {
            // Non-empty checked above and per iteration via pop
            if let Some((pos, mark)) = self.history.pop() {
                self.board.undo_move(pos)?;
                self.current_player = mark;
            }
        }
        Ok(())
    }

    /// Start a fresh round on the same board size. Scores carry over.
    pub fn restart(&mut self) {
        self.board.reset();
        self.history.clear();
        self.outcome = GameOutcome::InProgress;
        self.winning_line = None;
        self.current_player = Mark::X;
    }

    /// Change the board size, regenerating the win patterns, and start a
    /// fresh round. Scores carry over.
    pub fn set_board_size(&mut self, size: usize) -> Result<(), GameError> {
        if size != self.board.size() {
            self.board = Board::new(size)?;
            self.patterns = WinPatterns::new(size);
            self.config.size = size;
        }
        self.restart();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn human_vs_human() -> GameSession {
        GameSession::new(GameConfig {
            player_o: PlayerKind::Human,
            ..GameConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = human_vs_human();
        assert_eq!(session.current_player(), Mark::X);
        session.play_at(Pos::new(0, 0)).unwrap();
        assert_eq!(session.current_player(), Mark::O);
        session.play_at(Pos::new(1, 1)).unwrap();
        assert_eq!(session.current_player(), Mark::X);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_win_updates_outcome_scores_and_line() {
        let mut session = human_vs_human();
        // X: top row, O: scattered
        session.play_at(Pos::new(0, 0)).unwrap();
        session.play_at(Pos::new(1, 0)).unwrap();
        session.play_at(Pos::new(0, 1)).unwrap();
        session.play_at(Pos::new(1, 1)).unwrap();
        let outcome = session.play_at(Pos::new(0, 2)).unwrap();

        assert_eq!(outcome, GameOutcome::Win(Mark::X));
        assert_eq!(session.scores().x, 1);
        assert_eq!(session.scores().o, 0);
        assert_eq!(
            session.winning_cells(),
            Some(&[Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)][..])
        );
    }

    #[test]
    fn test_play_after_game_over_fails() {
        let mut session = human_vs_human();
        session.play_at(Pos::new(0, 0)).unwrap();
        session.play_at(Pos::new(1, 0)).unwrap();
        session.play_at(Pos::new(0, 1)).unwrap();
        session.play_at(Pos::new(1, 1)).unwrap();
        session.play_at(Pos::new(0, 2)).unwrap();

        assert!(matches!(
            session.play_at(Pos::new(2, 2)),
            Err(GameError::GameOver)
        ));
    }

    #[test]
    fn test_invalid_move_surfaces_board_error() {
        let mut session = human_vs_human();
        session.play_at(Pos::new(0, 0)).unwrap();
        assert!(matches!(
            session.play_at(Pos::new(0, 0)),
            Err(GameError::Board(BoardError::InvalidMove(_)))
        ));
        // Turn unchanged after a rejected move
        assert_eq!(session.current_player(), Mark::O);
    }

    #[test]
    fn test_computer_plays_valid_move() {
        let mut session = GameSession::new(GameConfig::default()).unwrap();
        session.play_at(Pos::new(1, 1)).unwrap();
        assert!(session.is_computer_turn());

        let (pos, outcome) = session.play_computer().unwrap();
        assert_eq!(session.board().get(pos), Mark::O);
        assert_eq!(outcome, GameOutcome::InProgress);
        assert_eq!(session.current_player(), Mark::X);
    }

    #[test]
    fn test_play_computer_on_human_turn_fails() {
        let mut session = GameSession::new(GameConfig::default()).unwrap();
        assert!(matches!(
            session.play_computer(),
            Err(GameError::NotComputersTurn)
        ));
    }

    #[test]
    fn test_undo_single_against_human() {
        let mut session = human_vs_human();
        session.play_at(Pos::new(0, 0)).unwrap();
        session.play_at(Pos::new(1, 1)).unwrap();

        session.undo().unwrap();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.current_player(), Mark::O);
        assert!(session.board().is_empty(Pos::new(1, 1)));
    }

    #[test]
    fn test_undo_turn_pair_against_computer() {
        let mut session = GameSession::new(GameConfig::default()).unwrap();
        session.play_at(Pos::new(1, 1)).unwrap();
        session.play_computer().unwrap();

        session.undo().unwrap();
        assert!(session.history().is_empty());
        assert!(session.board().is_board_empty());
        assert_eq!(session.current_player(), Mark::X);
    }

    #[test]
    fn test_undo_with_no_moves_fails() {
        let mut session = human_vs_human();
        assert!(matches!(session.undo(), Err(GameError::NothingToUndo)));
    }

    #[test]
    fn test_restart_keeps_scores() {
        let mut session = human_vs_human();
        session.play_at(Pos::new(0, 0)).unwrap();
        session.play_at(Pos::new(1, 0)).unwrap();
        session.play_at(Pos::new(0, 1)).unwrap();
        session.play_at(Pos::new(1, 1)).unwrap();
        session.play_at(Pos::new(0, 2)).unwrap();
        assert_eq!(session.scores().x, 1);

        session.restart();
        assert!(session.board().is_board_empty());
        assert_eq!(session.outcome(), GameOutcome::InProgress);
        assert_eq!(session.current_player(), Mark::X);
        assert_eq!(session.scores().x, 1);
        assert_eq!(session.winning_cells(), None);
    }

    #[test]
    fn test_set_board_size_rebuilds_patterns() {
        let mut session = human_vs_human();
        session.set_board_size(4).unwrap();
        assert_eq!(session.board().size(), 4);

        // A win on the new size needs four in a row
        for c in 0..4u8 {
            session.play_at(Pos::new(0, c)).unwrap(); // X
            if c < 3 {
                session.play_at(Pos::new(1, c)).unwrap(); // O
            }
        }
        assert_eq!(session.outcome(), GameOutcome::Win(Mark::X));
    }

    #[test]
    fn test_set_board_size_rejects_small() {
        let mut session = human_vs_human();
        assert!(matches!(
            session.set_board_size(2),
            Err(GameError::Board(BoardError::InvalidSize(2)))
        ));
    }
}

//! Driving a game from the initial board to its outcome

use serde::{Deserialize, Serialize};

use crate::board::{Board, Move, Player};

/// A move that has been played, together with who played it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    pub mv: Move,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A complete game with history, starting from the empty board.
///
/// The current board is kept alongside the move list so queries are cheap;
/// [`Game::state_sequence`] replays the history when the intermediate
/// boards are needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    moves: Vec<PlayedMove>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the initial position
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The moves played so far, in order
    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    /// The outcome, if the game has finished
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Play a move for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] when the game has already finished, and
    /// [`Error::InvalidMove`] when the move is out of bounds or targets an
    /// occupied cell.
    ///
    /// [`Error::GameOver`]: crate::Error::GameOver
    /// [`Error::InvalidMove`]: crate::Error::InvalidMove
    pub fn play(&mut self, mv: Move) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let player = self.board.player();
        let next = self.board.result(mv)?;

        self.moves.push(PlayedMove { mv, player });
        self.board = next;

        if next.is_terminal() {
            self.outcome = Some(if let Some(winner) = next.winner() {
                GameOutcome::Win(winner)
            } else {
                GameOutcome::Draw
            });
        }

        Ok(())
    }

    /// The sequence of board states from the initial position to the
    /// current one, one entry per ply plus the initial board.
    pub fn state_sequence(&self) -> Vec<Board> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut state = Board::new();
        states.push(state);

        for played in &self.moves {
            state = state
                .result(played.mv)
                .expect("recorded history contains only legal moves");
            states.push(state);
        }

        states
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

//! One-shot evaluation of a board for the `suggest` command.

use serde::Serialize;
use tictactoe_core::{Board, Difficulty, Game, GameStatus};
use tracing::instrument;

/// Status of a board and the computer's reply to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Board in snapshot form.
    pub board: String,
    /// Difficulty used for the reply.
    pub difficulty: Difficulty,
    /// Current status of the board.
    pub status: GameStatus,
    /// Index the computer would play, absent once the game is over.
    pub computer_move: Option<usize>,
}

/// Evaluates `board` and picks the computer's reply at `difficulty`.
#[instrument(skip(board), fields(board = %board.snapshot()))]
pub fn suggest(board: Board, difficulty: Difficulty, seed: Option<u64>) -> Suggestion {
    let mut game = seed.map(Game::with_seed).unwrap_or_default();
    game.restore(board);
    game.set_difficulty(difficulty);

    let status = game.evaluate();
    let computer_move = if status.is_over() {
        None
    } else {
        game.select_computer_move().map(|pos| pos.to_index())
    };

    Suggestion {
        board: board.snapshot(),
        difficulty,
        status,
        computer_move,
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board: {}", self.board)?;
        writeln!(f, "Status: {}", self.status)?;
        match self.computer_move {
            Some(index) => write!(f, "Computer ({}) would play: {}", self.difficulty, index),
            None => write!(f, "Computer ({}) has no move", self.difficulty),
        }
    }
}

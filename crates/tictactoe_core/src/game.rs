//! Tic-tac-toe game engine.

use super::action::{Move, MoveError};
use super::{Board, Difficulty, GameStatus, Mark, Position, Square, rules, strategy};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// One board plus the computer's difficulty.
///
/// All operations run to completion on the caller's thread. Scheduling,
/// rendering and score keeping belong to the host application.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    difficulty: Difficulty,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates an engine with an empty board, seeded from OS entropy.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Creates an engine whose random choices are reproducible.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            board: Board::new(),
            difficulty: Difficulty::default(),
            rng,
        }
    }

    /// Returns the current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Changes the difficulty; takes effect on the next computer move.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the whole board, e.g. when resuming a saved game.
    #[instrument(skip(self, board), fields(board = %board.snapshot()))]
    pub fn restore(&mut self, board: Board) {
        self.board = board;
    }

    /// Resets every square to empty. Difficulty is kept.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.board.clear();
    }

    /// Places `mark` at board index `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for an index past 8 and
    /// [`MoveError::SquareOccupied`] for a marked square. The board is
    /// unchanged in both cases.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, mark: Mark, index: usize) -> Result<(), MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        self.board.set(position, Square::Occupied(mark));
        debug!(mv = %Move::new(mark, position), "Move applied");
        Ok(())
    }

    /// Returns the square at `index`, or empty for an index past 8.
    pub fn occupant_at(&self, index: usize) -> Square {
        Position::from_index(index)
            .map(|pos| self.board.get(pos))
            .unwrap_or(Square::Empty)
    }

    /// Evaluates the current board.
    #[instrument(skip(self), fields(board = %self.board.snapshot()))]
    pub fn evaluate(&self) -> GameStatus {
        rules::evaluate(&self.board)
    }

    /// Chooses a square for the computer without placing it.
    ///
    /// Returns `None` when the board is full.
    #[instrument(skip(self), fields(difficulty = %self.difficulty))]
    pub fn select_computer_move(&mut self) -> Option<Position> {
        let chosen = strategy::select_move(&self.board, self.difficulty, &mut self.rng);
        debug!(?chosen, "Computer move selected");
        chosen
    }

    /// Chooses and places the computer's move in one step.
    #[instrument(skip(self))]
    pub fn play_computer_move(&mut self) -> Option<Position> {
        let position = self.select_computer_move()?;
        self.board.set(position, Square::Occupied(Mark::Computer));
        Some(position)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

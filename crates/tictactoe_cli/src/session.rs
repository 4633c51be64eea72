//! Host-side state for a run of consecutive games.
//!
//! The engine only knows the board and the difficulty. Whose turn it is,
//! whether the current game is finished, and the running score live here.

use derive_getters::Getters;
use serde::Serialize;
use tictactoe_core::{Difficulty, Game, GameStatus, Mark, MoveError};
use tracing::{info, instrument, warn};

/// Wins and ties across the games of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct Scoreboard {
    /// Games won by the human.
    human_wins: u32,
    /// Games won by the computer.
    computer_wins: u32,
    /// Games ending in a tie.
    ties: u32,
}

impl Scoreboard {
    /// Counts a finished game. `NoWinnerYet` is ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status.winner() {
            Some(Mark::Human) => self.human_wins += 1,
            Some(Mark::Computer) => self.computer_wins += 1,
            None if status == GameStatus::Tie => self.ties += 1,
            None => {}
        }
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total finished games.
    pub fn games_played(&self) -> u32 {
        self.human_wins + self.computer_wins + self.ties
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You: {} | Computer: {} | Ties: {}",
            self.human_wins, self.computer_wins, self.ties
        )
    }
}

/// Side expected to move next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Turn {
    /// The human moves next.
    #[display("human")]
    Human,
    /// The computer moves next.
    #[display("computer")]
    Computer,
}

impl Turn {
    /// Mark placed by this side.
    pub fn mark(self) -> Mark {
        match self {
            Turn::Human => Mark::Human,
            Turn::Computer => Mark::Computer,
        }
    }

    fn next(self) -> Self {
        match self {
            Turn::Human => Turn::Computer,
            Turn::Computer => Turn::Human,
        }
    }
}

/// Reason the session refused a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The mover is not the side whose turn it is.
    #[display("It's not the {}'s turn", _0)]
    NotYourTurn(Turn),

    /// The current game already has a result.
    #[display("The game is over; start a new one")]
    GameOver,

    /// The engine refused the move.
    #[display("{}", _0)]
    IllegalMove(MoveError),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::IllegalMove(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::IllegalMove(err)
    }
}

/// Engine plus the host state around it.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    scoreboard: Scoreboard,
    turn: Turn,
    game_over: bool,
}

impl Session {
    /// Starts a session on a fresh board with the human to move.
    #[instrument(skip(game), fields(difficulty = %game.difficulty()))]
    pub fn new(mut game: Game) -> Self {
        game.clear();
        Self {
            game,
            scoreboard: Scoreboard::default(),
            turn: Turn::Human,
            game_over: false,
        }
    }

    /// Returns the engine.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the engine mutably, for move selection.
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Returns the running score.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Side to move next.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// True once the current game has a result.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Changes the difficulty for this and later games.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!(%difficulty, "Difficulty changed");
        self.game.set_difficulty(difficulty);
    }

    /// Zeroes the scoreboard. The board and turn are left alone.
    #[instrument(skip(self), fields(score = %self.scoreboard))]
    pub fn reset_scores(&mut self) {
        self.scoreboard.reset();
        info!("Scores reset");
    }

    /// Clears the board and gives the human the first move.
    ///
    /// Scores and difficulty carry over.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.game.clear();
        self.turn = Turn::Human;
        self.game_over = false;
        info!(games_played = self.scoreboard.games_played(), "New game started");
    }

    /// Places the mover's mark at `index` and evaluates the board.
    ///
    /// A finished game is added to the scoreboard; otherwise the turn
    /// passes to the other side.
    ///
    /// # Errors
    ///
    /// Refuses moves after the game ended, out of turn, or on a square the
    /// engine rejects. A refused move changes nothing.
    #[instrument(skip(self))]
    pub fn play(&mut self, mover: Turn, index: usize) -> Result<GameStatus, SessionError> {
        if self.game_over {
            return Err(SessionError::GameOver);
        }
        if mover != self.turn {
            return Err(SessionError::NotYourTurn(mover));
        }

        if let Err(e) = self.game.apply_move(mover.mark(), index) {
            warn!(error = %e, "Move rejected");
            return Err(e.into());
        }

        let status = self.game.evaluate();
        if status.is_over() {
            self.game_over = true;
            self.scoreboard.record(status);
            info!(%status, score = %self.scoreboard, "Game finished");
        } else {
            self.turn = self.turn.next();
        }
        Ok(status)
    }
}

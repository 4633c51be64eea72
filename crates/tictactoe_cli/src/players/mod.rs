//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, parse_command};

use anyhow::Result;
use tictactoe_core::{Difficulty, Game};

/// What a player asked for on its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    /// Place a mark at this board index.
    Place(usize),
    /// Switch the computer's difficulty.
    SetDifficulty(Difficulty),
    /// Abandon the current game and start over.
    NewGame,
    /// Zero the scoreboard.
    ResetScores,
    /// Leave the session.
    Quit,
    /// Input that could not be understood.
    Unrecognized(String),
}

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets the player's next action.
    ///
    /// The engine is lent mutably so an automated player can run its own
    /// move selection; players must not place marks themselves.
    async fn get_move(&mut self, game: &mut Game) -> Result<PlayerAction>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

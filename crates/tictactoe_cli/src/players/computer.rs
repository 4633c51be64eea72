//! Computer player backed by the engine's move selection.

use super::{Player, PlayerAction};
use anyhow::Result;
use std::time::Duration;
use tictactoe_core::Game;
use tracing::debug;

/// Computer player that waits, then lets the engine choose.
pub struct ComputerPlayer {
    name: String,
    delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player that pauses `delay` before each move.
    pub fn new(name: impl Into<String>, delay: Duration) -> Self {
        Self {
            name: name.into(),
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    async fn get_move(&mut self, game: &mut Game) -> Result<PlayerAction> {
        debug!(ai = %self.name, difficulty = %game.difficulty(), "AI making move");

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match game.select_computer_move() {
            Some(pos) => {
                debug!(ai = %self.name, position = %pos, "AI chose position");
                Ok(PlayerAction::Place(pos.to_index()))
            }
            None => anyhow::bail!("No valid moves available"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

//! Human player reading commands line by line.

use super::{Player, PlayerAction};
use anyhow::Result;
use tictactoe_core::{Difficulty, Game, Position};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, instrument};

/// Human player fed from a line-oriented input stream.
pub struct HumanPlayer<R> {
    name: String,
    input: R,
}

impl<R> HumanPlayer<R> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

/// Parses one line of player input.
///
/// Accepts a board index or position label, `difficulty <level>`, `new`,
/// `reset`, and `quit`/`q`.
#[instrument]
pub fn parse_command(line: &str) -> PlayerAction {
    let line = line.trim();
    let lower = line.to_lowercase();

    match lower.as_str() {
        "q" | "quit" | "exit" => return PlayerAction::Quit,
        "n" | "new" => return PlayerAction::NewGame,
        "reset" | "reset scores" => return PlayerAction::ResetScores,
        _ => {}
    }

    if let Some(level) = lower.strip_prefix("difficulty") {
        return match level.trim().parse::<Difficulty>() {
            Ok(difficulty) => PlayerAction::SetDifficulty(difficulty),
            Err(_) => PlayerAction::Unrecognized(line.to_string()),
        };
    }

    match Position::from_label_or_number(line) {
        Some(pos) => PlayerAction::Place(pos.to_index()),
        None => PlayerAction::Unrecognized(line.to_string()),
    }
}

#[async_trait::async_trait]
impl<R> Player for HumanPlayer<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn get_move(&mut self, _game: &mut Game) -> Result<PlayerAction> {
        let mut buf = Vec::new();
        let line = loop {
            buf.clear();
            if self.input.read_until(b'\n', &mut buf).await? == 0 {
                debug!(player = %self.name, "Input closed");
                return Ok(PlayerAction::Quit);
            }
            // Invalid UTF-8 becomes replacement characters and parses as unrecognized.
            let line = String::from_utf8_lossy(&buf);
            if !line.trim().is_empty() {
                break line.into_owned();
            }
        };

        let action = parse_command(&line);
        debug!(player = %self.name, ?action, "Human input");
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

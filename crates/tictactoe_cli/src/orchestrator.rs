//! Game loop between the human and the computer.

use crate::players::{Player, PlayerAction};
use crate::session::{Scoreboard, Session, SessionError, Turn};
use anyhow::Result;
use std::io::Write;
use tictactoe_core::{GameStatus, Position};
use tracing::{debug, info, instrument, warn};

/// Runs consecutive games on one session until the human quits.
pub struct Orchestrator {
    session: Session,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(session: Session, human: Box<dyn Player>, computer: Box<dyn Player>) -> Self {
        Self {
            session,
            human,
            computer,
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the game loop, writing the board and messages to `out`.
    ///
    /// Illegal moves from the human are reported and asked for again.
    /// Returns the final scoreboard once the human quits.
    #[instrument(skip_all, fields(human = %self.human.name(), computer = %self.computer.name()))]
    pub async fn run<W: Write>(&mut self, out: &mut W) -> Result<Scoreboard> {
        info!("Starting game orchestration");
        writeln!(
            out,
            "Tic-tac-toe ({} difficulty). You are X and move first.",
            self.session.game().difficulty()
        )?;

        loop {
            let turn = self.session.turn();
            let action = match turn {
                Turn::Human => {
                    writeln!(out, "\n{}\n", self.session.game().board().display())?;
                    write!(out, "Your move (0-8, 'difficulty <level>', 'new', 'reset', 'q'): ")?;
                    out.flush()?;
                    self.human.get_move(self.session.game_mut()).await?
                }
                Turn::Computer => self.computer.get_move(self.session.game_mut()).await?,
            };
            debug!(%turn, ?action, "Action received");

            match action {
                PlayerAction::Place(index) => match self.session.play(turn, index) {
                    Ok(status) => {
                        if turn == Turn::Computer
                            && let Some(pos) = Position::from_index(index)
                        {
                            writeln!(out, "{} plays {}.", self.computer.name(), pos)?;
                        }
                        if status.is_over() {
                            self.finish_game(status, out)?;
                        }
                    }
                    Err(SessionError::IllegalMove(e)) if turn == Turn::Human => {
                        warn!(error = %e, "Illegal move from human");
                        writeln!(out, "{}. Try again.", e)?;
                    }
                    Err(e) => return Err(e.into()),
                },
                PlayerAction::SetDifficulty(difficulty) => {
                    self.session.set_difficulty(difficulty);
                    writeln!(out, "Difficulty set to {}.", difficulty)?;
                }
                PlayerAction::NewGame => {
                    self.session.new_game();
                    writeln!(out, "New game. You move first.")?;
                }
                PlayerAction::ResetScores => {
                    self.session.reset_scores();
                    writeln!(out, "Scores reset. {}", self.session.scoreboard())?;
                }
                PlayerAction::Quit => {
                    let score = *self.session.scoreboard();
                    writeln!(out, "\nFinal score: {}", score)?;
                    info!(%score, "Session ended");
                    return Ok(score);
                }
                PlayerAction::Unrecognized(input) => {
                    writeln!(out, "Unrecognized input {:?}.", input)?;
                }
            }
        }
    }

    fn finish_game<W: Write>(&mut self, status: GameStatus, out: &mut W) -> Result<()> {
        writeln!(out, "\n{}\n", self.session.game().board().display())?;
        writeln!(out, "{}!", status)?;
        writeln!(out, "Score: {}", self.session.scoreboard())?;
        self.session.new_game();
        writeln!(out, "New game. You move first.")?;
        Ok(())
    }
}

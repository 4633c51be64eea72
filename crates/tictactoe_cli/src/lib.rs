//! Terminal host for playing tic-tac-toe against the computer.
//!
//! # Architecture
//!
//! - **Session**: scoreboard, turn and game-over state around the engine
//! - **Players**: human input from a line stream, computer moves from the engine
//! - **Orchestrator**: game loop writing the board and results as text
//! - **Config**: TOML settings with command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod players;
mod session;
mod suggest;

// Crate-level exports - Configuration
pub use config::{ConfigError, HostConfig};

// Crate-level exports - Game loop
pub use orchestrator::Orchestrator;
pub use players::{ComputerPlayer, HumanPlayer, Player, PlayerAction, parse_command};

// Crate-level exports - Host state
pub use session::{Scoreboard, Session, SessionError, Turn};

// Crate-level exports - One-shot evaluation
pub use suggest::{Suggestion, suggest};

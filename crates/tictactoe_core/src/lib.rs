//! Tic-tac-toe rules and computer opponent.
//!
//! The engine owns one 3x3 board, refuses illegal moves, reports the
//! board's terminal state, and picks moves for the computer at one of
//! three difficulties.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Difficulty, Game, GameStatus, Mark};
//!
//! let mut game = Game::with_seed(42);
//! game.set_difficulty(Difficulty::Expert);
//!
//! game.apply_move(Mark::Human, 0).unwrap();
//! game.apply_move(Mark::Human, 1).unwrap();
//!
//! // The computer blocks the open end of the human's row.
//! let reply = game.select_computer_move().unwrap();
//! assert_eq!(reply.to_index(), 2);
//! assert_eq!(game.evaluate(), GameStatus::NoWinnerYet);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
pub mod rules;
mod status;
pub mod strategy;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::Position;
pub use status::GameStatus;
pub use types::{BOARD_SIZE, Board, BoardParseError, Difficulty, Mark, Square};

//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Nothing here mutates the
//! caller's board, so the move search can probe candidate moves freely.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};

use super::{Board, GameStatus, Move, Square};
use tracing::instrument;

/// Evaluates the board.
///
/// A completed line takes precedence over a full board.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(mark) = check_winner(board) {
        GameStatus::won_by(mark)
    } else if is_full(board) {
        GameStatus::Tie
    } else {
        GameStatus::NoWinnerYet
    }
}

/// Evaluates the board as it would be after `mv`.
///
/// Works on a copy; an occupied target is overwritten in the copy, so
/// callers only probe empty squares.
#[instrument(level = "trace")]
pub fn evaluate_with(board: &Board, mv: Move) -> GameStatus {
    let mut trial = *board;
    trial.set(mv.position, Square::Occupied(mv.mark));
    evaluate(&trial)
}

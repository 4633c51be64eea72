//! Move selection for the computer player.
//!
//! Every function here reads a board snapshot and never changes it. The
//! RNG is passed in so callers control seeding.

use super::rules::evaluate_with;
use super::{Board, Difficulty, GameStatus, Mark, Move, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks an empty square uniformly at random.
#[instrument(skip(rng))]
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    board.empty_positions().choose(rng).copied()
}

/// First empty square (in index order) that completes a line for `mark`.
#[instrument]
pub fn winning_move(board: &Board, mark: Mark) -> Option<Position> {
    let target = GameStatus::won_by(mark);
    board
        .empty_positions()
        .into_iter()
        .find(|&pos| evaluate_with(board, Move::new(mark, pos)) == target)
}

/// First empty square where the human would complete a line next turn.
#[instrument]
pub fn blocking_move(board: &Board) -> Option<Position> {
    winning_move(board, Mark::Computer.opponent())
}

/// Chooses the computer's move for the given difficulty.
///
/// Returns `None` only when the board is full.
#[instrument(skip(rng))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Position> {
    let chosen = match difficulty {
        Difficulty::Easy => None,
        Difficulty::Harder => winning_move(board, Mark::Computer).inspect(|pos| {
            debug!(position = %pos, "Taking winning move");
        }),
        Difficulty::Expert => winning_move(board, Mark::Computer)
            .inspect(|pos| debug!(position = %pos, "Taking winning move"))
            .or_else(|| {
                blocking_move(board).inspect(|pos| debug!(position = %pos, "Blocking human"))
            }),
    };

    chosen.or_else(|| random_move(board, rng))
}

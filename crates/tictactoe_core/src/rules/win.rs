//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use tracing::instrument;

/// The eight winning lines, checked rows first, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark filling the first completed line, `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        if let Square::Occupied(mark) = board.get(a)
            && board.get(b) == Square::Occupied(mark)
            && board.get(c) == Square::Occupied(mark)
        {
            return Some(mark);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::Human));
        board.set(Position::TopCenter, Square::Occupied(Mark::Human));
        board.set(Position::TopRight, Square::Occupied(Mark::Human));
        assert_eq!(check_winner(&board), Some(Mark::Human));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "_O__O__O_".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::Computer));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Square::Occupied(Mark::Computer));
        board.set(Position::Center, Square::Occupied(Mark::Computer));
        board.set(Position::BottomLeft, Square::Occupied(Mark::Computer));
        assert_eq!(check_winner(&board), Some(Mark::Computer));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board: Board = "XXO______".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(Mark::Human));
            }
            assert_eq!(check_winner(&board), Some(Mark::Human), "line {line:?}");
        }
    }
}

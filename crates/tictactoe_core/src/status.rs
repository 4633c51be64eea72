//! Result of evaluating a board.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Terminal state of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// No completed line and at least one empty square.
    NoWinnerYet,
    /// Board full with no completed line.
    Tie,
    /// The human completed a line.
    HumanWins,
    /// The computer completed a line.
    ComputerWins,
}

impl GameStatus {
    /// Status for a completed line of `mark`.
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::Human => GameStatus::HumanWins,
            Mark::Computer => GameStatus::ComputerWins,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::HumanWins => Some(Mark::Human),
            GameStatus::ComputerWins => Some(Mark::Computer),
            GameStatus::NoWinnerYet | GameStatus::Tie => None,
        }
    }

    /// Returns true once the game can take no more moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::NoWinnerYet)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::NoWinnerYet => write!(f, "No winner yet"),
            GameStatus::Tie => write!(f, "It's a tie"),
            GameStatus::HumanWins => write!(f, "You won"),
            GameStatus::ComputerWins => write!(f, "The computer won"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_matches_won_by() {
        for mark in [Mark::Human, Mark::Computer] {
            assert_eq!(GameStatus::won_by(mark).winner(), Some(mark));
        }
        assert_eq!(GameStatus::Tie.winner(), None);
        assert_eq!(GameStatus::NoWinnerYet.winner(), None);
    }

    #[test]
    fn test_only_no_winner_yet_is_open() {
        assert!(!GameStatus::NoWinnerYet.is_over());
        assert!(GameStatus::Tie.is_over());
        assert!(GameStatus::HumanWins.is_over());
        assert!(GameStatus::ComputerWins.is_over());
    }
}

//! Tests for host session bookkeeping.

use tictactoe_cli::{Scoreboard, Session, SessionError, Turn};
use tictactoe_core::{Difficulty, Game, GameStatus, Mark, MoveError, Position, Square};

fn session() -> Session {
    Session::new(Game::with_seed(5))
}

#[test]
fn test_human_moves_first_and_turns_alternate() {
    let mut session = session();
    assert_eq!(session.turn(), Turn::Human);

    assert_eq!(session.play(Turn::Human, 4), Ok(GameStatus::NoWinnerYet));
    assert_eq!(session.turn(), Turn::Computer);
    assert_eq!(session.game().occupant_at(4), Square::Occupied(Mark::Human));

    assert_eq!(session.play(Turn::Computer, 0), Ok(GameStatus::NoWinnerYet));
    assert_eq!(session.turn(), Turn::Human);
}

#[test]
fn test_out_of_turn_move_is_refused() {
    let mut session = session();
    assert_eq!(
        session.play(Turn::Computer, 0),
        Err(SessionError::NotYourTurn(Turn::Computer))
    );
    assert_eq!(session.game().occupant_at(0), Square::Empty);
}

#[test]
fn test_illegal_move_keeps_turn_and_board() {
    let mut session = session();
    session.play(Turn::Human, 4).unwrap();
    let before = *session.game().board();

    assert_eq!(
        session.play(Turn::Computer, 4),
        Err(SessionError::IllegalMove(MoveError::SquareOccupied(Position::Center)))
    );
    assert_eq!(
        session.play(Turn::Computer, 42),
        Err(SessionError::IllegalMove(MoveError::OutOfRange(42)))
    );
    assert_eq!(session.turn(), Turn::Computer);
    assert_eq!(session.game().board(), &before);
}

#[test]
fn test_win_is_recorded_and_locks_board() {
    let mut session = session();
    for (turn, index) in [
        (Turn::Human, 0),
        (Turn::Computer, 3),
        (Turn::Human, 1),
        (Turn::Computer, 4),
    ] {
        session.play(turn, index).unwrap();
    }

    assert_eq!(session.play(Turn::Human, 2), Ok(GameStatus::HumanWins));
    assert!(session.is_game_over());
    assert_eq!(*session.scoreboard().human_wins(), 1);
    assert_eq!(session.play(Turn::Computer, 5), Err(SessionError::GameOver));
}

#[test]
fn test_tie_is_recorded() {
    let mut session = session();
    // X O X / O X X / O X O
    let moves = [
        (Turn::Human, 0),
        (Turn::Computer, 1),
        (Turn::Human, 2),
        (Turn::Computer, 3),
        (Turn::Human, 4),
        (Turn::Computer, 8),
        (Turn::Human, 5),
        (Turn::Computer, 6),
    ];
    for (turn, index) in moves {
        assert_eq!(session.play(turn, index), Ok(GameStatus::NoWinnerYet));
    }

    assert_eq!(session.play(Turn::Human, 7), Ok(GameStatus::Tie));
    assert_eq!(*session.scoreboard().ties(), 1);
    assert_eq!(session.scoreboard().games_played(), 1);
}

#[test]
fn test_new_game_keeps_score_and_difficulty() {
    let mut session = session();
    session.set_difficulty(Difficulty::Harder);
    for (turn, index) in [
        (Turn::Human, 0),
        (Turn::Computer, 6),
        (Turn::Human, 1),
        (Turn::Computer, 7),
        (Turn::Human, 3),
    ] {
        session.play(turn, index).unwrap();
    }
    assert_eq!(session.play(Turn::Computer, 8), Ok(GameStatus::ComputerWins));

    session.new_game();
    assert!(!session.is_game_over());
    assert_eq!(session.turn(), Turn::Human);
    assert_eq!(session.game().evaluate(), GameStatus::NoWinnerYet);
    assert_eq!(*session.scoreboard().computer_wins(), 1);
    assert_eq!(session.game().difficulty(), Difficulty::Harder);
}

#[test]
fn test_reset_scores_keeps_game_in_progress() {
    let mut session = session();
    for (turn, index) in [
        (Turn::Human, 0),
        (Turn::Computer, 3),
        (Turn::Human, 1),
        (Turn::Computer, 4),
        (Turn::Human, 2),
    ] {
        session.play(turn, index).unwrap();
    }
    session.new_game();
    session.play(Turn::Human, 8).unwrap();
    assert_eq!(session.scoreboard().games_played(), 1);

    session.reset_scores();
    assert_eq!(*session.scoreboard(), Scoreboard::default());
    assert_eq!(session.turn(), Turn::Computer);
    assert_eq!(session.game().occupant_at(8), Square::Occupied(Mark::Human));
}

#[test]
fn test_scoreboard_ignores_unfinished_games() {
    let mut score = Scoreboard::default();
    score.record(GameStatus::NoWinnerYet);
    score.record(GameStatus::HumanWins);
    score.record(GameStatus::Tie);
    score.record(GameStatus::Tie);
    assert_eq!(score.games_played(), 3);
    assert_eq!(score.to_string(), "You: 1 | Computer: 0 | Ties: 2");
}

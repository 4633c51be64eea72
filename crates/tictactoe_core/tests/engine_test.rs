//! Tests for the tic-tac-toe engine's public operations.

use tictactoe_core::{
    BOARD_SIZE, Board, Difficulty, Game, GameStatus, Mark, MoveError, Position, Square,
};

fn game_with(board: &str, difficulty: Difficulty) -> Game {
    let mut game = Game::with_seed(11);
    game.restore(board.parse::<Board>().expect("valid board"));
    game.set_difficulty(difficulty);
    game
}

#[test]
fn test_cleared_board_is_empty_everywhere() {
    let mut game = Game::with_seed(1);
    game.apply_move(Mark::Human, 4).unwrap();
    game.apply_move(Mark::Computer, 0).unwrap();
    game.clear();

    for index in 0..BOARD_SIZE {
        assert_eq!(game.occupant_at(index), Square::Empty);
    }
}

#[test]
fn test_apply_move_then_occupant() {
    for mark in [Mark::Human, Mark::Computer] {
        for index in 0..BOARD_SIZE {
            let mut game = Game::with_seed(1);
            assert_eq!(game.apply_move(mark, index), Ok(()));
            assert_eq!(game.occupant_at(index), Square::Occupied(mark));
        }
    }
}

#[test]
fn test_second_move_on_same_square_fails_without_change() {
    let mut game = Game::with_seed(1);
    game.apply_move(Mark::Human, 3).unwrap();
    let before = *game.board();

    let result = game.apply_move(Mark::Computer, 3);
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::MiddleLeft)));
    assert_eq!(game.board(), &before);
    assert_eq!(game.occupant_at(3), Square::Occupied(Mark::Human));
}

#[test]
fn test_out_of_range_move_is_refused() {
    let mut game = Game::with_seed(1);
    assert_eq!(game.apply_move(Mark::Human, 9), Err(MoveError::OutOfRange(9)));
    assert_eq!(game.board(), &Board::new());
    assert_eq!(
        game.apply_move(Mark::Human, 9).unwrap_err().to_string(),
        "Position 9 is out of range (must be 0-8)"
    );
}

#[test]
fn test_occupant_out_of_range_is_empty() {
    let game = game_with("XXXXXXXXX", Difficulty::Easy);
    assert_eq!(game.occupant_at(9), Square::Empty);
    assert_eq!(game.occupant_at(usize::MAX), Square::Empty);
}

#[test]
fn test_evaluate_terminal_states() {
    assert_eq!(Game::with_seed(1).evaluate(), GameStatus::NoWinnerYet);
    assert_eq!(game_with("XO_OX____", Difficulty::Expert).evaluate(), GameStatus::NoWinnerYet);
    assert_eq!(game_with("XXX______", Difficulty::Expert).evaluate(), GameStatus::HumanWins);
    assert_eq!(game_with("OOO______", Difficulty::Expert).evaluate(), GameStatus::ComputerWins);
    assert_eq!(game_with("XOXOXOOXO", Difficulty::Expert).evaluate(), GameStatus::Tie);
}

#[test]
fn test_expert_wins_before_blocking() {
    let mut game = game_with("XX_OO____", Difficulty::Expert);
    assert_eq!(game.select_computer_move(), Some(Position::MiddleRight));
}

#[test]
fn test_expert_blocks_only_threat() {
    let mut game = game_with("XX_______", Difficulty::Expert);
    assert_eq!(game.select_computer_move(), Some(Position::TopRight));
}

#[test]
fn test_harder_takes_win() {
    let mut game = game_with("X_XOO_X__", Difficulty::Harder);
    assert_eq!(game.select_computer_move(), Some(Position::MiddleRight));
}

#[test]
fn test_select_does_not_place_mark() {
    let mut game = game_with("XX_______", Difficulty::Expert);
    game.select_computer_move();
    assert_eq!(game.board().snapshot(), "XX_______");
}

#[test]
fn test_full_board_yields_no_move() {
    for difficulty in [Difficulty::Easy, Difficulty::Harder, Difficulty::Expert] {
        let mut game = game_with("XOXOXOOXO", difficulty);
        assert_eq!(game.select_computer_move(), None);
        assert_eq!(game.play_computer_move(), None);
    }
}

#[test]
fn test_play_computer_move_places_mark() {
    let mut game = game_with("XX_OO____", Difficulty::Expert);
    assert_eq!(game.play_computer_move(), Some(Position::MiddleRight));
    assert_eq!(game.evaluate(), GameStatus::ComputerWins);
}

#[test]
fn test_difficulty_survives_clear() {
    let mut game = Game::with_seed(3);
    game.set_difficulty(Difficulty::Easy);
    game.clear();
    assert_eq!(game.difficulty(), Difficulty::Easy);
}

#[test]
fn test_seeded_engines_agree() {
    let mut a = game_with("X___O____", Difficulty::Easy);
    let mut b = game_with("X___O____", Difficulty::Easy);
    for _ in 0..10 {
        assert_eq!(a.select_computer_move(), b.select_computer_move());
    }
}

#[test]
fn test_status_serializes_snake_case() {
    let json = serde_json::to_string(&GameStatus::ComputerWins).unwrap();
    assert_eq!(json, "\"computer_wins\"");
    let status: GameStatus = serde_json::from_str("\"no_winner_yet\"").unwrap();
    assert_eq!(status, GameStatus::NoWinnerYet);
}

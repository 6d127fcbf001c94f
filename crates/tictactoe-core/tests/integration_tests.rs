//! Integration tests for the tic-tac-toe engine.
//!
//! These tests play complete games through the public API, from a fresh
//! start to a win or tie, and check the status text a front end would show.

use pretty_assertions::assert_eq;
use tictactoe_core::status::{outcome_message, status_message};
use tictactoe_core::*;

/// Play a sequence of moves, returning the status text after each one
fn play_messages(game: &mut Game, moves: &[i32]) -> Vec<String> {
    moves
        .iter()
        .map(|&m| {
            let outcome = game.play_move(m);
            outcome_message(game, &outcome)
        })
        .collect()
}

fn marked(marker: Marker) -> Cell {
    Cell::Marked(marker)
}

#[test]
fn test_taken_cell_keeps_turn() {
    let mut game = Game::standard();
    game.start_game();
    assert_eq!(status_message(&game), "Player 1's turn");

    assert_eq!(game.play_move(0), MoveOutcome::Continue { next: PlayerId::Second });
    assert_eq!(status_message(&game), "Player 2's turn");

    let board_before = *game.board();
    assert_eq!(
        game.play_move(0),
        MoveOutcome::Rejected(Rejection::CellTaken { index: 0 })
    );
    assert_eq!(game.board(), &board_before);
    assert_eq!(game.cells()[0], marked(Marker::X));
    assert_eq!(game.active_player(), PlayerId::Second);

    let outcome = game.play_move(1);
    assert_eq!(outcome_message(&game, &outcome), "Player 1's turn");
    assert_eq!(game.cells()[1], marked(Marker::O));
}

#[test]
fn test_top_row_win_then_game_over() {
    let mut game = Game::standard();
    game.start_game();

    let messages = play_messages(&mut game, &[0, 3, 1, 4, 2]);
    assert_eq!(
        messages,
        vec![
            "Player 2's turn",
            "Player 1's turn",
            "Player 2's turn",
            "Player 1's turn",
            "Player 1 wins!",
        ]
    );
    assert_eq!(game.winner(), Some(PlayerId::First));
    assert_eq!(game.winning_line(), Some([0, 1, 2]));

    let board_after_win = *game.board();
    for m in [5, 8, 0, -3, 12] {
        let outcome = game.play_move(m);
        assert_eq!(outcome, MoveOutcome::Rejected(Rejection::GameOver));
        assert_eq!(outcome_message(&game, &outcome), "Game is over, please restart.");
    }
    assert_eq!(game.board(), &board_after_win);
}

#[test]
fn test_full_board_draw() {
    let mut game = Game::standard();
    game.start_game();

    // X: 0, 1, 5, 6, 8 / O: 2, 3, 4, 7
    let messages = play_messages(&mut game, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);
    assert_eq!(messages.last().map(String::as_str), Some("It's a tie!"));
    assert!(messages[..8].iter().all(|m| m.ends_with("'s turn")));

    assert_eq!(game.phase(), GamePhase::Tied);
    assert!(game.board().is_full());
    assert_eq!(
        game.play_move(4),
        MoveOutcome::Rejected(Rejection::GameOver)
    );
}

#[test]
fn test_out_of_range_moves_change_nothing() {
    let mut game = Game::standard();
    game.play_move(4);
    let board_before = *game.board();

    for m in [-1i64, 9, 10, 100, i64::MAX] {
        assert_eq!(
            game.play_move(m),
            MoveOutcome::Rejected(Rejection::InvalidIndex)
        );
    }
    assert_eq!(game.board(), &board_before);
    assert_eq!(game.active_player(), PlayerId::Second);
}

#[test]
fn test_restart_after_win_is_a_rematch() {
    let mut game = Game::new(
        Player::new("Alice", Marker::X),
        Player::new("Bob", Marker::O),
    )
    .unwrap();

    // Bob wins the middle column
    let messages = play_messages(&mut game, &[0, 1, 2, 4, 3, 7]);
    assert_eq!(messages.last().unwrap(), "Bob wins!");

    game.start_game();
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.active_player(), PlayerId::First);
    assert_eq!(status_message(&game), "Alice's turn");
    assert_eq!(game.player(PlayerId::Second).name(), "Bob");

    // The new game plays normally
    assert_eq!(game.play_move(0), MoveOutcome::Continue { next: PlayerId::Second });
}

#[test]
fn test_restart_mid_game() {
    let mut game = Game::standard();
    play_messages(&mut game, &[4, 0, 8]);
    assert_eq!(game.active_player(), PlayerId::Second);

    game.start_game();
    assert!(game.cells().iter().all(Cell::is_empty));
    assert_eq!(game.active_player(), PlayerId::First);
    assert_eq!(game.status(), GameStatus::Turn(PlayerId::First));
}

#[test]
fn test_custom_markers_on_board() {
    let heart: Marker = "♥".parse().unwrap();
    let spade: Marker = "♠".parse().unwrap();
    let mut game = Game::new(Player::new("Hearts", heart), Player::new("Spades", spade)).unwrap();

    game.play_move(0);
    game.play_move(8);
    assert_eq!(game.cells()[0], marked(heart));
    assert_eq!(game.cells()[8], marked(spade));

    let rendered: Vec<String> = game.cells().iter().map(|c| c.to_string()).collect();
    assert_eq!(rendered, vec!["♥", "", "", "", "", "", "", "", "♠"]);
}

#[test]
fn test_valid_moves_shrink_with_play() {
    let mut game = Game::standard();
    assert_eq!(game.valid_moves(), (0..9).collect::<Vec<_>>());

    game.play_move(4);
    game.play_move(0);
    assert_eq!(game.valid_moves(), vec![1, 2, 3, 5, 6, 7, 8]);
}

#[test]
fn test_game_state_serializes() {
    let mut game = Game::standard();
    game.play_move(4);

    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(json["active"], "Second");
    assert_eq!(json["phase"], "InProgress");
    assert_eq!(json["board"]["cells"][4]["Marked"], "X");
    assert_eq!(json["id"], game.id().to_string());

    // Board snapshots still round-trip on their own
    let board: Board = serde_json::from_value(json["board"].clone()).unwrap();
    assert_eq!(&board, game.board());
}

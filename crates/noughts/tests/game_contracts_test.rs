//! Tests for the game state machine: moves, time-travel, branching.

use noughts::{Game, Intent, Player, SortOrder, Square};

fn play(game: &mut Game, moves: &[usize]) {
    for &index in moves {
        game.attempt_move(index);
    }
}

#[test]
fn test_new_game_state() {
    let game = Game::new();
    assert_eq!(game.history_len(), 1);
    assert_eq!(game.current_step(), 0);
    assert_eq!(game.next_player(), Player::X);
    assert_eq!(game.status(), "Next player: X");
    assert!(!game.is_over());
    assert!(game.board().squares().iter().all(|&s| s == Square::Empty));
}

#[test]
fn test_alternating_players() {
    let mut game = Game::new();
    assert_eq!(game.next_player(), Player::X);
    game.attempt_move(4);
    assert_eq!(game.next_player(), Player::O);
    game.attempt_move(0);
    assert_eq!(game.next_player(), Player::X);
}

#[test]
fn test_top_row_win_sequence() {
    // X at 0, O at 3, X at 1, O at 4, X at 2 - X takes the top row.
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);

    assert_eq!(game.current_step(), 5);
    let win = game.winning_line().expect("X should have won");
    assert_eq!(win.player, Player::X);
    assert_eq!(win.line, [0, 1, 2]);
    assert_eq!(game.status(), "Winner: X");
    assert!(game.is_over());
}

#[test]
fn test_move_after_win_is_ignored() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);

    let before = game.clone();
    game.attempt_move(5);
    assert_eq!(game.current_step(), before.current_step());
    assert_eq!(game.history_len(), before.history_len());
    assert_eq!(game.board(), before.board());
}

#[test]
fn test_occupied_square_is_ignored() {
    let mut game = Game::new();
    game.attempt_move(4);
    game.attempt_move(4);

    assert_eq!(game.history_len(), 2);
    assert_eq!(game.current_step(), 1);
    assert_eq!(game.next_player(), Player::O);
}

#[test]
fn test_out_of_range_index_is_ignored() {
    let mut game = Game::new();
    game.attempt_move(9);
    assert_eq!(game.history_len(), 1);
    assert_eq!(game.current_step(), 0);
}

#[test]
fn test_nine_moves_without_line_is_a_draw() {
    // X O X / X O O / O X X
    let mut game = Game::new();
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.current_step(), 9);
    assert_eq!(game.winning_line(), None);
    assert!(game.status().starts_with("Next player"));
    assert!(game.is_over());

    // Board is full, so any further move is a no-op.
    game.attempt_move(0);
    assert_eq!(game.history_len(), 10);
}

#[test]
fn test_jump_to_start_restores_initial_board() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);

    game.jump_to(0);
    assert_eq!(game.current_step(), 0);
    assert_eq!(game.next_player(), Player::X);
    assert!(game.board().squares().iter().all(|&s| s == Square::Empty));
    // History is untouched by time-travel.
    assert_eq!(game.history_len(), 6);
}

#[test]
fn test_jump_parity_derives_next_player() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4]);

    game.jump_to(1);
    assert_eq!(game.next_player(), Player::O);
    game.jump_to(2);
    assert_eq!(game.next_player(), Player::X);
}

#[test]
fn test_jump_clears_terminal_state() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    assert!(game.is_over());

    game.jump_to(4);
    assert!(!game.is_over());
    assert_eq!(game.status(), "Next player: X");
}

#[test]
fn test_move_from_past_step_truncates_future() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    assert_eq!(game.history_len(), 6);

    game.jump_to(2);
    game.attempt_move(5);

    assert_eq!(game.history_len(), 4);
    assert_eq!(game.current_step(), 3);
    assert_eq!(game.board().get(5), Some(Square::Occupied(Player::X)));
    // The discarded future is gone for good.
    assert_eq!(game.board().get(1), Some(Square::Empty));
}

#[test]
fn test_describe_moves_labels_and_order() {
    let mut game = Game::new();
    play(&mut game, &[4, 5, 7]);

    let moves = game.describe_moves();
    assert_eq!(moves.len(), 4);
    assert_eq!(moves[0].label, "Go to game start");
    assert_eq!(moves[1].label, "Go to move #1 (2, 2)");
    assert_eq!(moves[2].label, "Go to move #2 (3, 2)");
    assert_eq!(moves[3].label, "Go to move #3 (2, 3)");

    game.toggle_sort_order();
    let reversed = game.describe_moves();
    assert_eq!(reversed[0].step, 3);
    assert_eq!(reversed[3].label, "Go to game start");

    // Toggling twice restores the original order.
    game.toggle_sort_order();
    assert_eq!(game.describe_moves(), moves);
}

#[test]
fn test_sort_order_does_not_touch_gameplay() {
    let mut game = Game::new();
    play(&mut game, &[0, 3]);

    game.toggle_sort_order();
    assert_eq!(game.sort_order(), SortOrder::Descending);
    assert_eq!(game.current_step(), 2);
    assert_eq!(game.history_len(), 3);
    assert_eq!(game.next_player(), Player::X);
}

#[test]
fn test_intent_dispatch() {
    let mut game = Game::new();
    game.handle(Intent::CellClicked(8));
    assert_eq!(game.board().get(8), Some(Square::Occupied(Player::X)));

    game.handle(Intent::HistoryStepSelected(0));
    assert_eq!(game.current_step(), 0);

    game.handle(Intent::SortOrderToggled);
    assert_eq!(game.sort_order(), SortOrder::Descending);
}

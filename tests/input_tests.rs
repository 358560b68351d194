//! Score entry integration tests.
//!
//! Drive a table through the number pad the way a presentation layer would.

use farkle_tracker::{FarkleConfig, GameState, InputError, Player, ScoreInput, Shortcut};

/// Typing and banking credits the current player and passes the turn.
#[test]
fn test_bank_from_pad() {
    let mut game = GameState::new();
    let a = game.add_player("A");
    let b = game.add_player("B");
    let mut pad = ScoreInput::for_config(game.config());

    pad.push_digit(3);
    pad.push_shortcut(Shortcut::Fifty);
    assert_eq!(pad.to_string(), "350");

    assert_eq!(pad.bank(&mut game), Ok(350));
    assert!(pad.is_empty());
    assert_eq!(game.player(a).map(Player::score), Some(350));
    assert_eq!(game.current_player().map(Player::id), Some(b));
}

/// Banking an empty pad is rejected and changes nothing.
#[test]
fn test_bank_empty_pad() {
    let mut game = GameState::new();
    game.add_player("A");
    let version = game.version();
    let mut pad = ScoreInput::default();

    assert_eq!(pad.bank(&mut game), Err(InputError::Empty));
    assert_eq!(game.version(), version);
    assert_eq!(game.current_turn_index(), 0);
}

/// Farkle clears the pad and passes the turn with no points.
#[test]
fn test_farkle_from_pad() {
    let mut game = GameState::new();
    let a = game.add_player("A");
    game.add_player("B");
    let mut pad = ScoreInput::default();

    pad.push_digit(5);
    pad.push_shortcut(Shortcut::DoubleZero);
    pad.farkle(&mut game);

    assert!(pad.is_empty());
    assert_eq!(game.player(a).map(Player::score), Some(0));
    assert_eq!(game.current_turn_index(), 1);
}

/// A full game played from the pad ends with a winner.
#[test]
fn test_full_game_from_pad() {
    let mut game = GameState::with_config(FarkleConfig::new().with_winning_score(1_000));
    game.add_player("A");
    let b = game.add_player("B");
    let mut pad = ScoreInput::for_config(game.config());

    // A: 600, B: farkle, A: 450 -> 1,050 triggers
    pad.push_digit(6);
    pad.push_shortcut(Shortcut::DoubleZero);
    pad.bank(&mut game).unwrap();
    pad.farkle(&mut game);
    pad.push_digit(4);
    pad.push_shortcut(Shortcut::Fifty);
    pad.bank(&mut game).unwrap();
    assert!(game.is_final_round());

    // B: 1,100 beats A on B's turn
    pad.push_digit(1);
    pad.push_digit(1);
    pad.push_shortcut(Shortcut::DoubleZero);
    assert_eq!(pad.bank(&mut game), Ok(1_100));

    assert_eq!(game.winner().map(Player::id), Some(b));
}

/// The pad honours the configured length.
#[test]
fn test_pad_respects_config_length() {
    let config = FarkleConfig::new().with_max_input_digits(3);
    let mut pad = ScoreInput::for_config(&config);

    pad.push_shortcut(Shortcut::Fifty);
    assert!(!pad.push_shortcut(Shortcut::DoubleZero));
    assert!(pad.push_digit(0));
    assert!(!pad.push_digit(0));
    assert_eq!(pad.value(), Ok(500));
}

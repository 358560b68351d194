//! Final-round integration tests.
//!
//! These tests walk whole games through the final round and check when (and
//! whether) a winner is declared.

use farkle_tracker::{FarkleConfig, GameEvent, GameState, Player, PlayerId};

fn table(n: usize) -> (GameState, Vec<PlayerId>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut state = GameState::new();
    let ids = (0..n).map(|i| state.add_player(format!("P{}", i + 1))).collect();
    (state, ids)
}

fn winner_id(state: &GameState) -> Option<PlayerId> {
    state.winner().map(Player::id)
}

/// Crossing the threshold opens the final round exactly once.
#[test]
fn test_first_crossing_triggers_once() {
    let (mut state, ids) = table(3);

    state.add_score(9_950, ids[0]);
    assert!(!state.is_final_round());

    state.add_score(100, ids[0]);
    assert!(state.is_final_round());
    let round = *state.final_round().unwrap();
    assert_eq!(round.trigger, ids[0]);
    assert_eq!(round.started_at, 0);
    assert!(!round.has_advanced);

    // A second player crossing later does not move the trigger
    state.advance_turn();
    state.add_score(10_000, ids[1]);
    assert_eq!(state.final_round().unwrap().trigger, ids[0]);
    assert_eq!(state.final_round().unwrap().started_at, 0);
}

/// Already above the threshold is not a crossing.
#[test]
fn test_only_upward_crossing_triggers() {
    let (mut state, ids) = table(2);

    state.add_score(-500, ids[0]);
    state.add_score(500, ids[0]);
    assert!(!state.is_final_round());

    // Exactly the threshold counts
    state.add_score(10_000, ids[1]);
    assert!(state.is_final_round());
    assert_eq!(state.final_round().unwrap().trigger, ids[1]);
}

/// The trigger records the turn index, not the trigger player's seat.
#[test]
fn test_trigger_out_of_turn_records_current_index() {
    let (mut state, ids) = table(3);
    state.advance_turn();

    state.add_score(10_000, ids[2]);

    let round = state.final_round().unwrap();
    assert_eq!(round.trigger, ids[2]);
    assert_eq!(round.started_at, 1);
}

/// A trigger recorded out of turn cannot end the round on the trigger's own seat.
#[test]
fn test_trigger_out_of_turn_waits_for_others() {
    let (mut state, ids) = table(3);

    // Seat 0 is up when P2's score crosses
    state.add_score(10_000, ids[1]);
    assert_eq!(state.final_round().map(|r| r.started_at), Some(0));

    state.advance_turn();
    assert_eq!(state.current_player().map(Player::id), Some(ids[1]));
    assert!(state.winner().is_none());

    state.advance_turn();
    assert_eq!(state.current_player().map(Player::id), Some(ids[2]));
    assert!(state.winner().is_none());

    // P3 still gets to try
    state.add_score(10_500, ids[2]);
    assert_eq!(winner_id(&state), Some(ids[2]));
}

/// P2 passes the leader on their turn and wins without waiting for the cycle.
#[test]
fn test_immediate_upset() {
    let (mut state, ids) = table(2);

    state.add_score(10_050, ids[0]);
    state.advance_turn();
    assert!(state.final_round().unwrap().has_advanced);
    assert_eq!(state.current_player().map(Player::id), Some(ids[1]));
    assert!(state.winner().is_none());

    state.add_score(10_100, ids[1]);
    assert_eq!(winner_id(&state), Some(ids[1]));
    assert!(state.is_over());
}

/// P2 falls short; play returns to P1 and P1 wins as leader.
#[test]
fn test_cycle_completion_leader_wins() {
    let (mut state, ids) = table(2);

    state.add_score(10_050, ids[0]);
    state.advance_turn();
    state.add_score(9_000, ids[1]);
    assert!(state.winner().is_none());

    state.advance_turn();
    assert_eq!(state.current_turn_index(), 0);
    assert_eq!(winner_id(&state), Some(ids[0]));
}

/// No winner on the trigger call itself, even with a single player.
#[test]
fn test_trigger_turn_never_wins() {
    let (mut state, ids) = table(1);

    state.add_score(12_000, ids[0]);
    assert!(state.is_final_round());
    assert!(state.winner().is_none());

    state.add_score(500, ids[0]);
    assert!(state.winner().is_none());

    // Solo game: the next advance lands back on the trigger seat
    state.advance_turn();
    assert_eq!(winner_id(&state), Some(ids[0]));
}

/// Every other player gets a turn before the cycle closes.
#[test]
fn test_four_player_final_round() {
    let (mut state, ids) = table(4);
    state.add_score(3_000, ids[1]);
    state.add_score(7_500, ids[2]);
    state.add_score(9_500, ids[3]);

    // P1 crosses on their own turn
    state.bank(10_300);
    assert!(state.is_final_round());

    state.bank(2_000); // P2: 5,000
    assert!(state.winner().is_none());
    state.farkle(); // P3 busts
    assert!(state.winner().is_none());
    state.bank(500); // P4: 10,000, below the leader
    assert_eq!(winner_id(&state), Some(ids[0]));
    assert_eq!(state.current_turn_index(), 0);
}

/// Later seat passes the leader mid-round.
#[test]
fn test_four_player_upset_in_third_seat() {
    let (mut state, ids) = table(4);
    state.add_score(9_000, ids[2]);

    state.bank(10_000); // P1 triggers
    state.farkle(); // P2
    assert_eq!(state.current_player().map(Player::id), Some(ids[2]));

    state.add_score(1_200, ids[2]); // P3: 10,200
    assert_eq!(winner_id(&state), Some(ids[2]));
}

/// A tie with the leader is not an upset; the earlier seat wins at cycle end.
#[test]
fn test_tie_goes_to_leader_at_cycle_end() {
    let (mut state, ids) = table(2);

    state.bank(10_050);
    state.add_score(10_050, ids[1]);
    assert!(state.winner().is_none());

    state.advance_turn();
    assert_eq!(winner_id(&state), Some(ids[0]));
}

/// The leader dropping back under the threshold blocks the cycle-end win.
#[test]
fn test_cycle_end_requires_threshold() {
    let (mut state, ids) = table(2);

    state.bank(10_000);
    state.add_score(-1_000, ids[0]); // score correction after the trigger
    state.advance_turn();

    assert!(state.is_final_round());
    assert!(state.winner().is_none());

    // Round stays open at the trigger seat until the leader holds a winning score
    state.add_score(10_001, ids[1]);
    assert_eq!(winner_id(&state), Some(ids[1]));
}

/// Once declared, the winner never changes until reset.
#[test]
fn test_winner_is_terminal() {
    let (mut state, ids) = table(2);

    state.bank(10_050);
    state.add_score(9_000, ids[1]);
    state.advance_turn();
    assert_eq!(winner_id(&state), Some(ids[0]));

    // Further play cannot move the result
    state.advance_turn();
    state.add_score(5_000, ids[1]);
    assert_eq!(state.player(ids[1]).map(Player::score), Some(14_000));
    assert_eq!(winner_id(&state), Some(ids[0]));

    state.advance_turn();
    assert_eq!(winner_id(&state), Some(ids[0]));
}

/// WinnerDeclared is emitted exactly once.
#[test]
fn test_winner_event_once() {
    let (mut state, ids) = table(2);
    state.bank(10_050);
    state.add_score(10_100, ids[1]);
    state.advance_turn();
    state.add_score(100, ids[0]);

    let declared: Vec<_> = state
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::WinnerDeclared { .. }))
        .collect();
    assert_eq!(
        declared,
        vec![GameEvent::WinnerDeclared {
            player: ids[1],
            score: 10_100
        }]
    );
}

/// Reset after a win clears scores and round state but keeps the roster.
#[test]
fn test_reset_after_win() {
    let (mut state, ids) = table(3);
    state.rename_player(ids[1], "Bea");
    state.bank(10_050);
    state.bank(10_100);
    assert_eq!(winner_id(&state), Some(ids[1]));

    state.reset_game();

    assert!(state.winner().is_none());
    assert!(state.winner_id().is_none());
    assert!(!state.is_final_round());
    assert!(state.final_round().is_none());
    assert_eq!(state.current_turn_index(), 0);
    assert_eq!(state.leader_score(), 0);

    let roster: Vec<_> = state
        .players()
        .iter()
        .map(|p| (p.id(), p.name.clone(), p.score()))
        .collect();
    assert_eq!(
        roster,
        vec![
            (ids[0], "P1".to_string(), 0),
            (ids[1], "Bea".to_string(), 0),
            (ids[2], "P3".to_string(), 0),
        ]
    );

    // A fresh game can trigger again
    state.bank(10_000);
    assert_eq!(state.final_round().unwrap().trigger, ids[0]);
}

/// Removing the trigger player leaves only the upset path open.
#[test]
fn test_trigger_removed_mid_round() {
    let (mut state, ids) = table(3);
    state.bank(10_000);
    state.advance_turn(); // P3's turn
    state.remove_player(0);

    // P3 now sits at seat 1 and is current
    assert_eq!(state.current_player().map(Player::id), Some(ids[2]));
    state.advance_turn();
    state.advance_turn();
    assert!(state.winner().is_none());

    state.add_score(10_500, ids[2]);
    assert_eq!(winner_id(&state), Some(ids[2]));
}

/// A custom threshold drives both the trigger and the win.
#[test]
fn test_custom_winning_score() {
    let mut state = GameState::with_config(FarkleConfig::new().with_winning_score(2_000));
    let a = state.add_player("A");
    state.add_player("B");

    state.bank(2_000);
    assert_eq!(state.final_round().map(|r| r.trigger), Some(a));
    state.bank(1_500);
    assert_eq!(winner_id(&state), Some(a));
}

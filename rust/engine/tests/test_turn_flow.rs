use grind_engine::game::{Game, GameConfig};
use grind_engine::turn::{AttemptResult, TurnPhase};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn seeded(players: &[&str], seed: u64) -> Game {
    let config = GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    };
    Game::with_config(&names(players), None, config).expect("setup ok")
}

#[test]
fn leader_failure_passes_leadership_and_hands_out_a_letter() {
    // Alice bails on her opening trick
    let mut game = seeded(&["Alice", "Bob"], 7);
    game.process_turn(AttemptResult::Failed).expect("turn ok");

    let state = game.state();
    let alice = &state.players[0];
    assert_eq!(alice.letters, vec!['G']);
    assert_eq!(alice.streak, 0);
    assert_eq!(alice.tricks_attempted, 1);
    assert_eq!(alice.tricks_landed, 0);
    assert_eq!(state.current_leader_id, 1, "leadership passes to Bob");
    assert_eq!(state.round, 1);
    assert_eq!(state.turn_phase, TurnPhase::Leader);
    assert_eq!(state.turns.len(), 1);
    assert_eq!(state.turns[0].turn_type, TurnPhase::Leader);
}

#[test]
fn followers_attempt_the_same_card_the_leader_landed() {
    // Alice lands, Bob follows on the identical trick
    let mut game = seeded(&["Alice", "Bob"], 11);
    let set_card = game.state().current_card.expect("card in play");

    game.process_turn(AttemptResult::Landed).expect("turn ok");
    let state = game.state();
    assert_eq!(state.turn_phase, TurnPhase::Follower);
    assert_eq!(state.current_follower_id, Some(1));
    assert_eq!(
        state.current_card.as_ref().map(|c| c.id),
        Some(set_card.id),
        "entering follower phase must not redraw"
    );
    let alice = &state.players[0];
    assert_eq!(alice.score, set_card.points);
    assert_eq!(alice.streak, 1);
    assert_eq!(alice.tricks_landed, 1);

    game.process_turn(AttemptResult::Landed).expect("turn ok");
    let state = game.state();
    let bob = &state.players[1];
    assert_eq!(bob.score, set_card.points, "followers score the same card");
    assert_eq!(state.turn_phase, TurnPhase::Leader);
    assert_eq!(state.current_follower_id, None);
    assert_eq!(state.current_leader_id, 0, "one full pass, Alice leads on");
    assert_ne!(
        state.current_card.map(|c| c.id),
        Some(set_card.id),
        "back to leader draws a fresh card"
    );
    assert_eq!(state.round, 0, "no failure and no cap: no leadership pass");
}

#[test]
fn follower_order_starts_after_the_leader_and_wraps() {
    let mut game = seeded(&["Alice", "Bob", "Carol"], 3);
    game.process_turn(AttemptResult::Landed).expect("turn ok");
    assert_eq!(game.state().current_follower_id, Some(1));

    game.process_turn(AttemptResult::Landed).expect("turn ok");
    assert_eq!(game.state().current_follower_id, Some(2));

    game.process_turn(AttemptResult::Landed).expect("turn ok");
    let state = game.state();
    assert_eq!(state.turn_phase, TurnPhase::Leader);
    assert_eq!(state.current_leader_id, 0);
    assert_eq!(state.current_follower_id, None);
}

#[test]
fn failed_follower_burns_the_shared_card() {
    let mut game = seeded(&["Alice", "Bob", "Carol"], 5);
    game.process_turn(AttemptResult::Landed).expect("turn ok");
    let set_card = game.state().current_card.expect("card in play");

    // Bob bails: Carol gets a fresh trick, not the one Bob just burned
    game.process_turn(AttemptResult::Failed).expect("turn ok");
    let state = game.state();
    assert_eq!(state.current_follower_id, Some(2));
    assert_eq!(state.turn_phase, TurnPhase::Follower);
    assert_ne!(state.current_card.map(|c| c.id), Some(set_card.id));
    assert_eq!(state.players[1].letters, vec!['G']);
    assert_eq!(state.players[1].streak, 0);
}

#[test]
fn leader_streak_cap_forces_a_leadership_pass() {
    let mut game = seeded(&["Alice", "Bob"], 13);

    // three full leader-lands-follower-lands passes
    for _ in 0..3 {
        game.process_turn(AttemptResult::Landed).expect("leader ok");
        game.process_turn(AttemptResult::Landed).expect("follower ok");
    }

    let state = game.state();
    assert_eq!(state.current_leader_id, 1, "cap of 3 hands Bob the lead");
    assert_eq!(state.round, 1);
    assert_eq!(state.turn_phase, TurnPhase::Leader);
    assert_eq!(state.players[0].streak, 0, "old leader streak resets");
    assert_eq!(state.players[1].streak, 0, "new leader starts clean");
}

#[test]
fn two_leader_lands_do_not_trip_the_cap() {
    let mut game = seeded(&["Alice", "Bob"], 17);
    for _ in 0..2 {
        game.process_turn(AttemptResult::Landed).expect("leader ok");
        game.process_turn(AttemptResult::Landed).expect("follower ok");
    }
    let state = game.state();
    assert_eq!(state.current_leader_id, 0);
    assert_eq!(state.round, 0);
    assert_eq!(state.players[0].streak, 2);
}

#[test]
fn streak_cap_is_configurable() {
    let config = GameConfig {
        seed: Some(19),
        leader_streak_cap: 1,
        ..GameConfig::default()
    };
    let mut game = Game::with_config(&names(&["Alice", "Bob"]), None, config).expect("setup ok");
    game.process_turn(AttemptResult::Landed).expect("leader ok");
    game.process_turn(AttemptResult::Landed).expect("follower ok");
    let state = game.state();
    assert_eq!(state.current_leader_id, 1, "cap of 1 passes after one set");
    assert_eq!(state.round, 1);
}

#[test]
fn every_attempt_lands_in_the_turn_log_in_order() {
    let mut game = seeded(&["Alice", "Bob"], 23);
    game.process_turn(AttemptResult::Landed).expect("turn ok");
    game.process_turn(AttemptResult::Failed).expect("turn ok");

    let state = game.state();
    assert_eq!(state.turns.len(), 2);
    assert_eq!(state.turns[0].player_name, "Alice");
    assert_eq!(state.turns[0].turn_type, TurnPhase::Leader);
    assert_eq!(state.turns[0].result, AttemptResult::Landed);
    assert!(state.turns[0].points_awarded.is_some());
    assert_eq!(state.turns[1].player_name, "Bob");
    assert_eq!(state.turns[1].turn_type, TurnPhase::Follower);
    assert_eq!(state.turns[1].result, AttemptResult::Failed);
    assert_eq!(state.turns[1].points_awarded, None);
    assert_eq!(
        state.turns[0].card.id, state.turns[1].card.id,
        "the follower attempted the leader's card"
    );
}

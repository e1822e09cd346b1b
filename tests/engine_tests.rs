//! Engine-level behavior: observers, restart, determinism, replay and
//! snapshot serialization.

use std::sync::{Arc, Mutex};

use ludo_engine::play::{Autoplay, GreedyPolicy, RandomPolicy};
use ludo_engine::{
    replay, Action, ConfigError, Engine, EngineError, FixedDice, GameConfig, GameEvent, GameState,
    Phase, PlayerId, PlayerProfile, SnapshotError,
};

fn seeded(seed: u64) -> Engine {
    Engine::new(GameConfig::default().with_seed(seed)).unwrap()
}

fn play_out(engine: &mut Engine, seed: u64) {
    Autoplay::uniform(|p| RandomPolicy::new(seed ^ u64::from(p.0)))
        .run(engine)
        .unwrap();
}

#[test]
fn test_same_seed_same_game() {
    let mut a = seeded(1234);
    let mut b = seeded(1234);
    play_out(&mut a, 1);
    play_out(&mut b, 1);

    assert_eq!(a.state(), b.state());
    assert!(a.state().winner.is_some());
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = seeded(1);
    let mut b = seeded(2);
    play_out(&mut a, 0);
    play_out(&mut b, 0);

    assert_ne!(a.state().history, b.state().history);
}

#[test]
fn test_replay_of_finished_game() {
    let mut engine = seeded(77);
    Autoplay::uniform(|_| GreedyPolicy).run(&mut engine).unwrap();

    let state = engine.state();
    let replayed = replay(engine.config(), state.history.iter()).unwrap();
    assert_eq!(&replayed, state);
}

#[test]
fn test_replay_of_every_prefix() {
    let mut engine = seeded(5);
    let snapshots = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&snapshots);
    engine.subscribe(move |state| sink.lock().unwrap().push(state.clone()));

    Autoplay::uniform(|_| GreedyPolicy)
        .with_max_actions(300)
        .run(&mut engine)
        .unwrap();

    let config = engine.config().clone();
    for snapshot in snapshots.lock().unwrap().iter() {
        assert_eq!(&replay(&config, snapshot.history.iter()).unwrap(), snapshot);
    }
}

#[test]
fn test_replay_rejects_foreign_history() {
    let mut engine = seeded(9);
    play_out(&mut engine, 9);

    // Drop the opening roll: the rest no longer lines up.
    let history: Vec<_> = engine.state().history.iter().skip(1).cloned().collect();
    let result = replay(engine.config(), history.iter());
    assert!(result.is_err());
}

#[test]
fn test_history_sequences() {
    let dice = FixedDice::new([6, 2, 1]).unwrap();
    let mut engine = Engine::with_dice(GameConfig::default(), dice).unwrap();

    engine.roll().unwrap();
    engine.select_token(0).unwrap();
    engine.roll().unwrap();
    engine.select_token(0).unwrap();
    engine.roll().unwrap();

    let records: Vec<_> = engine
        .state()
        .history
        .iter()
        .map(|r| (r.player.0, r.action, r.turn, r.sequence))
        .collect();
    assert_eq!(
        records,
        vec![
            (0, Action::Roll(6), 1, 0),
            (0, Action::Select(0), 1, 1),
            (0, Action::Roll(2), 1, 2),
            (0, Action::Select(0), 1, 3),
            (1, Action::Roll(1), 2, 0),
        ]
    );
}

#[test]
fn test_rejections_notify_nobody() {
    let calls = Arc::new(Mutex::new(0));
    let dice = FixedDice::new([6]).unwrap();
    let mut engine = Engine::with_dice(GameConfig::default(), dice).unwrap();

    let counter = Arc::clone(&calls);
    engine.subscribe(move |_| *counter.lock().unwrap() += 1);

    assert!(engine.select_token(0).is_err());
    engine.roll().unwrap();
    assert!(engine.roll().is_err());
    assert!(engine.select_token(9).is_err());

    assert_eq!(*calls.lock().unwrap(), 1);
}

#[test]
fn test_listeners_called_in_order() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let mut engine = seeded(3);

    for tag in 0..3 {
        let order = Arc::clone(&order);
        engine.subscribe(move |_| order.lock().unwrap().push(tag));
    }
    engine.roll().unwrap();

    assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_restart_mid_game() {
    let mut engine = seeded(21);
    Autoplay::uniform(|_| GreedyPolicy)
        .with_max_actions(50)
        .run(&mut engine)
        .unwrap();
    assert!(!engine.state().history.is_empty());

    let state = engine.restart();
    assert_eq!(state.events.as_slice(), &[GameEvent::Restarted]);
    assert_eq!(state.current_player, PlayerId::new(0));
    assert_eq!(state.phase, Phase::AwaitingRoll);
    assert_eq!(state.turn_number, 1);
    assert!(state.winner.is_none());
    assert!(state.players.values().all(|p| p.home_count() == 4));
}

#[test]
fn test_restart_after_game_over() {
    let mut engine = seeded(4);
    Autoplay::uniform(|_| GreedyPolicy).run(&mut engine).unwrap();
    assert_eq!(engine.state().phase, Phase::GameOver);

    engine.restart();
    assert!(engine.roll().is_ok());
}

#[test]
fn test_profiles_reach_snapshot() {
    let config = GameConfig::default().with_player(PlayerId::new(2), PlayerProfile::new("Ada", "#123abc"));
    let engine = Engine::new(config).unwrap();

    assert_eq!(engine.state().player(PlayerId::new(2)).name(), "Ada");
    assert_eq!(engine.state().player(PlayerId::new(0)).name(), "Red");
}

#[test]
fn test_config_from_json() {
    let json = r##"{"seed": 12, "players": [
        {"name": "A", "color": "#000000"},
        {"name": "B", "color": "#111111"},
        {"name": "C", "color": "#222222"},
        {"name": "D", "color": "#333333"}
    ]}"##;
    let config = GameConfig::from_json(json).unwrap();
    assert_eq!(config.seed, Some(12));

    let mut engine = Engine::new(config).unwrap();
    let outcome = engine.roll().unwrap();
    assert!((1..=6).contains(&outcome.value));
}

#[test]
fn test_snapshot_json_round_trip() {
    let mut engine = seeded(6);
    Autoplay::uniform(|_| GreedyPolicy)
        .with_max_actions(120)
        .run(&mut engine)
        .unwrap();

    let json = serde_json::to_string(engine.state()).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, engine.state());
}

#[test]
fn test_resume_from_saved_snapshot() {
    let mut original = seeded(31);
    Autoplay::uniform(|_| GreedyPolicy)
        .with_max_actions(40)
        .run(&mut original)
        .unwrap();

    let saved = original.state().clone();
    let dice = FixedDice::new([6]).unwrap();
    let mut resumed = Engine::with_state(original.config().clone(), dice, saved.clone()).unwrap();

    let result = match saved.phase {
        Phase::AwaitingRoll => resumed.roll().map(|_| ()),
        Phase::AwaitingMove => resumed.select_token(saved.legal_tokens[0]).map(|_| ()),
        Phase::GameOver => Err(EngineError::InvalidPhase {
            operation: ludo_engine::Operation::Roll,
            phase: Phase::GameOver,
        }),
    };
    assert!(result.is_ok());
    assert_eq!(resumed.state().history.len(), saved.history.len() + 1);
}

#[test]
fn test_snapshot_with_unknown_seat_fails_to_load() {
    let mut json = serde_json::to_value(GameState::new(&GameConfig::default())).unwrap();
    json["current_player"] = serde_json::json!(7);

    assert!(serde_json::from_value::<GameState>(json).is_err());
}

#[test]
fn test_resume_rejects_impossible_lane_step() {
    let mut json = serde_json::to_value(GameState::new(&GameConfig::default())).unwrap();
    json["players"][1]["tokens"][2]["state"] = serde_json::json!({ "OnFinishPath": 250 });
    let state: GameState = serde_json::from_value(json).unwrap();

    let dice = FixedDice::new([6]).unwrap();
    let result = Engine::with_state(GameConfig::default(), dice, state);
    assert!(matches!(
        result,
        Err(ConfigError::Snapshot(SnapshotError::TokenOutOfRange { token: 2, .. }))
    ));
}

#[test]
fn test_resume_rejects_phase_mismatch() {
    let mut state = GameState::new(&GameConfig::default());
    state.phase = Phase::AwaitingMove;

    let dice = FixedDice::new([6]).unwrap();
    assert!(matches!(
        Engine::with_state(GameConfig::default(), dice, state),
        Err(ConfigError::Snapshot(SnapshotError::PhaseMismatch { .. }))
    ));
}

#[test]
fn test_replay_after_restart_differs_only_by_marker() {
    let dice = FixedDice::new([6]).unwrap();
    let mut engine = Engine::with_dice(GameConfig::default(), dice).unwrap();
    engine.roll().unwrap();
    engine.select_token(0).unwrap();

    let restarted = engine.restart().clone();
    let replayed = replay(engine.config(), restarted.history.iter()).unwrap();

    assert_eq!(restarted.events.as_slice(), &[GameEvent::Restarted]);
    assert!(replayed.events.is_empty());
    assert_eq!(replayed, GameState::new(engine.config()));
    assert_eq!(
        GameState { events: Default::default(), ..restarted },
        replayed
    );
}

#[test]
fn test_engine_is_send() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Send + Sync>() {}
    assert_send::<Engine>();
    assert_send::<Engine<FixedDice>>();
    assert_sync::<GameState>();
}

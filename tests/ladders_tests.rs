//! Snake & Ladders scenario tests.
//!
//! These tests drive the engine the way the display layer does:
//! - Reset, roll until won, reset again
//! - Animated rolls through begin/commit
//! - Custom boards loaded from JSON

use game_zone::board::Jump;
use game_zone::core::{DieFace, GameRng, GameZoneConfig};
use game_zone::ladders::{LaddersEngine, Phase};
use game_zone::rules::{GameKind, MiniGame};
use game_zone::Board;

fn face(v: u8) -> DieFace {
    DieFace::new(v).expect("valid face")
}

fn classic(seed: u64) -> LaddersEngine {
    LaddersEngine::new(Board::classic(), GameRng::new(seed))
}

/// Play seeded games to completion and check the win bookkeeping.
#[test]
fn test_seeded_games_finish() {
    for seed in 0..20 {
        let mut engine = classic(seed);
        let mut state = engine.reset();

        while !state.won {
            let before = state.rolls_taken;
            state = engine.roll(&state);
            assert_eq!(state.rolls_taken, before + 1);
            assert!((1..=100).contains(&state.position));
            assert!(state.rolls_taken < 10_000, "seed {} never finished", seed);
        }

        assert_eq!(state.position, 100);
        assert_eq!(state.phase(), Phase::Won);
        assert_eq!(state.history.len() as u32, state.rolls_taken);
        assert_eq!(state.history.iter().filter(|r| r.won).count(), 1);
        assert!(state.history.last().map_or(false, |r| r.won));
    }
}

/// The documented example path: 1 -> ladder at 4 -> ... -> snake at 16.
#[test]
fn test_scripted_path() {
    let mut engine = classic(0);
    let mut state = engine.reset();

    // 1 + 3 = 4, ladder to 14
    state = engine.apply_roll(&state, face(3));
    assert_eq!(state.position, 14);

    // 14 + 2 = 16, snake to 6
    state = engine.apply_roll(&state, face(2));
    assert_eq!(state.position, 6);
    assert!(matches!(
        state.last_move.map(|r| r.jump),
        Some(Some(Jump::Snake { from: 16, to: 6 }))
    ));

    // 6 + 3 = 9, ladder to 21 (no chain to 42)
    state = engine.apply_roll(&state, face(3));
    assert_eq!(state.position, 21);

    // 21 + 6 = 27, plain
    state = engine.apply_roll(&state, face(6));
    assert_eq!(state.position, 27);
    assert_eq!(state.message, "You moved 6 spaces to position 27.");

    // 27 + 1 = 28, ladder to 84
    state = engine.apply_roll(&state, face(1));
    assert_eq!(state.position, 84);

    // 84 + 3 = 87, snake to 24
    state = engine.apply_roll(&state, face(3));
    assert_eq!(state.position, 24);
    assert_eq!(state.rolls_taken, 6);
    assert!(!state.won);
}

/// Won is terminal until reset, and reset always starts over.
#[test]
fn test_won_until_reset() {
    let mut engine = classic(3);
    let mut state = engine.reset();
    state.position = 99;

    let won = engine.apply_roll(&state, face(1));
    assert!(won.won);

    for v in 1..=6 {
        assert_eq!(engine.apply_roll(&won, face(v)), won);
    }
    for _ in 0..5 {
        assert_eq!(engine.roll(&won), won);
    }

    let fresh = engine.reset();
    assert_eq!(fresh.position, 1);
    assert_eq!(fresh.rolls_taken, 0);
    assert!(!fresh.won);
    assert_eq!(fresh.last_roll, None);
    assert!(fresh.history.is_empty());
    assert_ne!(fresh.session, won.session);
}

/// Animated rolls resolve with the last displayed face.
#[test]
fn test_animated_game() {
    let mut engine = classic(11);
    let mut state = engine.reset();

    for _ in 0..10 {
        if state.won {
            break;
        }
        let (rolling, animation) = engine.begin_roll(&state).expect("roll accepted");
        assert_eq!(rolling.phase(), Phase::Rolling);
        assert_eq!(animation.faces().len(), 15);

        // A second trigger during the window is rejected
        assert!(engine.begin_roll(&rolling).is_none());
        assert_eq!(engine.roll(&rolling).rolls_taken, state.rolls_taken);

        let committed = engine.commit_roll(&rolling, &animation);
        assert_eq!(committed.last_roll, Some(animation.committed_face()));
        assert_eq!(committed.rolls_taken, state.rolls_taken + 1);
        assert_ne!(committed.phase(), Phase::Rolling);
        state = committed;
    }
}

/// A small board from JSON plays by the same rules.
#[test]
fn test_custom_board_from_json() {
    let json = r#"{
        "board": { "size": 12, "snakes": { "11": 3 }, "ladders": { "2": 10 } },
        "animation": { "duration_ms": 300, "frame_interval_ms": 100 }
    }"#;
    let config = GameZoneConfig::from_json_str(json).unwrap();
    let mut engine = LaddersEngine::from_config(&config, GameRng::new(5)).unwrap();
    let state = engine.reset();

    let climbed = engine.apply_roll(&state, face(1));
    assert_eq!(climbed.position, 10);

    let bitten = engine.apply_roll(&climbed, face(1));
    assert_eq!(bitten.position, 3);

    let mut near = bitten.clone();
    near.position = 10;
    let capped = engine.apply_roll(&near, face(6));
    assert_eq!(capped.position, 12);
    assert!(capped.won);

    let (_, animation) = engine.begin_roll(&bitten).unwrap();
    assert_eq!(animation.faces().len(), 3);
}

/// The state reports itself to outside collaborators.
#[test]
fn test_state_as_mini_game() {
    let mut engine = classic(8);
    let mut state = engine.reset();
    assert_eq!(state.kind(), GameKind::SnakeLadders);
    assert!(!state.is_won());

    state.position = 95;
    let state = engine.apply_roll(&state, face(5));
    let result = state.result().expect("won");
    assert_eq!(result.turns, 1);
}

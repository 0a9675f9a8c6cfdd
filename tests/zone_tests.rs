//! Game zone tests.
//!
//! These tests verify the pieces around the engines:
//! - Memory Match played to a win
//! - Points credited once per session through the ledger
//! - Configuration loaded from a file

use std::collections::BTreeMap;

use game_zone::core::{ConfigError, DieFace, GameZoneConfig, MemoryConfig};
use game_zone::memory::{FlipOutcome, MemoryMatch};
use game_zone::rules::{GameKind, MiniGame};
use game_zone::zone::GameZone;
use game_zone::Error;

/// Flip every pair, peeking at the layout.
fn solve(game: &mut MemoryMatch) {
    let mut positions: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for i in 0..game.len() {
        let symbol = game.symbol(i).unwrap().to_string();
        positions.entry(symbol).or_default().push(i);
    }
    for idx in positions.values() {
        assert_eq!(game.flip(idx[0]), FlipOutcome::Revealed(idx[0]));
        assert_eq!(game.flip(idx[1]), FlipOutcome::Matched(idx[0], idx[1]));
    }
}

/// Winning Memory Match credits 50 points once.
#[test]
fn test_memory_win_settles_once() {
    let mut zone = GameZone::new(GameZoneConfig::default(), 42).unwrap();
    let mut game = zone.memory().unwrap();

    assert_eq!(zone.settle(&game), None);
    solve(&mut game);
    assert!(game.is_won());
    assert_eq!(game.moves(), 6);
    assert_eq!(game.score(), 60);

    assert_eq!(zone.settle(&game), Some(50));
    assert_eq!(zone.settle(&game), None);
    assert_eq!(zone.ledger().balance(), 1300);

    // A new deal is a new session and can be won again
    game.reset();
    solve(&mut game);
    assert_eq!(zone.settle(&game), Some(50));
    assert_eq!(zone.ledger().total_for(GameKind::MemoryMatch), 100);
}

/// Both games feed the same ledger.
#[test]
fn test_mixed_awards() {
    let mut zone = GameZone::new(GameZoneConfig::default().with_starting_points(0), 1).unwrap();

    let mut engine = zone.ladders().unwrap();
    let mut state = engine.reset();
    state.position = 98;
    let state = engine.apply_roll(&state, DieFace::new(2).unwrap());
    assert!(state.won);

    let mut game = zone.memory().unwrap();
    solve(&mut game);

    assert_eq!(zone.settle(&state), Some(60));
    assert_eq!(zone.settle(&game), Some(50));
    assert_eq!(zone.ledger().balance(), 110);

    let kinds: Vec<_> = zone.ledger().awards().iter().map(|a| a.kind).collect();
    assert_eq!(kinds, vec![GameKind::SnakeLadders, GameKind::MemoryMatch]);
}

/// Mismatches cost a move and block flips until hidden.
#[test]
fn test_memory_mismatch_flow() {
    let mut zone = GameZone::new(GameZoneConfig::default(), 9).unwrap();
    let mut game = zone.memory().unwrap();

    let a = 0;
    let b = (1..game.len()).find(|&i| game.symbol(i) != game.symbol(a)).unwrap();
    let c = (1..game.len()).find(|&i| i != b).unwrap();

    game.flip(a);
    assert_eq!(game.flip(b), FlipOutcome::Mismatched(a, b));
    assert_eq!(game.flip(c), FlipOutcome::Ignored);
    assert!(game.hide_mismatch());
    assert_eq!(game.moves(), 1);
    assert_eq!(game.score(), 0);
}

/// Configuration files are read, parsed and validated.
#[test]
fn test_config_from_file() {
    let dir = std::env::temp_dir().join(format!("game-zone-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let good = dir.join("good.json");
    std::fs::write(&good, r#"{ "memory": { "cards": ["x", "x", "y", "y"], "points_per_match": 5 } }"#).unwrap();
    let config = GameZoneConfig::from_json_file(&good).unwrap();
    assert_eq!(config.memory, MemoryConfig::with_pairs(["x", "y"]).with_points_per_match(5));

    let bad = dir.join("bad.json");
    std::fs::write(&bad, r#"{ "memory": { "cards": ["x"], "points_per_match": 5 } }"#).unwrap();
    let err = GameZoneConfig::from_json_file(&bad).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::UnpairedSymbol { count: 1, .. })));

    let missing = GameZoneConfig::from_json_file(dir.join("missing.json")).unwrap_err();
    assert!(matches!(missing, Error::Io(_)));

    std::fs::remove_dir_all(&dir).ok();
}

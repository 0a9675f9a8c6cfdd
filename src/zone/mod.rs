//! Game zone: configuration, catalog and points ledger in one place.
//!
//! `GameZone` starts games with independent, reproducible RNG streams
//! derived from a single seed, and settles their wins into the ledger.

use crate::core::{ConfigError, GameRng, GameZoneConfig};
use crate::ladders::LaddersEngine;
use crate::memory::MemoryMatch;
use crate::rewards::{GameCatalog, PointsLedger};
use crate::rules::{GameKind, MiniGame};

/// Entry point for hosting the playable games.
///
/// ## Example
///
/// ```
/// use game_zone::core::{DieFace, GameZoneConfig};
/// use game_zone::zone::GameZone;
///
/// let mut zone = GameZone::new(GameZoneConfig::default(), 42).unwrap();
/// let mut engine = zone.ladders().unwrap();
/// let mut state = engine.reset();
/// state.position = 94;
///
/// let state = engine.apply_roll(&state, DieFace::new(6).unwrap());
/// assert!(state.won);
/// assert_eq!(zone.settle(&state), Some(60));
/// assert_eq!(zone.ledger().balance(), 1310);
/// ```
#[derive(Clone, Debug)]
pub struct GameZone {
    config: GameZoneConfig,
    rng: GameRng,
    catalog: GameCatalog,
    ledger: PointsLedger,
}

impl GameZone {
    /// Validate the configuration and open the zone.
    pub fn new(config: GameZoneConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let ledger = PointsLedger::from_config(&config.ledger);
        log::debug!("game zone opened with seed {}", seed);
        Ok(Self {
            config,
            rng: GameRng::new(seed),
            catalog: GameCatalog::standard(),
            ledger,
        })
    }

    /// Start a Snake & Ladders engine on its own die stream.
    pub fn ladders(&mut self) -> Result<LaddersEngine, ConfigError> {
        let rng = self.stream(GameKind::SnakeLadders);
        LaddersEngine::from_config(&self.config, rng)
    }

    /// Deal a Memory Match game on its own shuffle stream.
    pub fn memory(&mut self) -> Result<MemoryMatch, ConfigError> {
        let rng = self.stream(GameKind::MemoryMatch);
        MemoryMatch::new(self.config.memory.clone(), rng)
    }

    fn stream(&mut self, kind: GameKind) -> GameRng {
        self.rng.fork().for_context(kind.id())
    }

    /// Credit a won game into the ledger once.
    pub fn settle(&mut self, game: &impl MiniGame) -> Option<u32> {
        self.ledger.settle(&self.catalog, game)
    }

    /// Seed every game stream is derived from. Reopening a zone with it
    /// replays the same rolls and deals.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn config(&self) -> &GameZoneConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &GameCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn ledger(&self) -> &PointsLedger {
        &self.ledger
    }
}

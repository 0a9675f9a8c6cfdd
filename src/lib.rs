//! # game-zone
//!
//! Deterministic engines for the family Game Zone mini-games.
//!
//! ## Design Principles
//!
//! 1. **States are values**: a Snake & Ladders roll takes a `GameState` and
//!    returns the next one. Nothing else is mutated.
//!
//! 2. **Seeded randomness**: every die roll and card deal comes from a
//!    `GameRng`, so a seed reproduces a whole session.
//!
//! 3. **Fail fast on configuration**: boards and decks are validated when
//!    built. Gameplay itself never errors; out-of-turn input is ignored.
//!
//! 4. **No hidden shared state**: games report wins through `MiniGame`;
//!    the `PointsLedger` owns the points balance.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `board`: Validated Snake & Ladders board topology
//! - `rules`: `MiniGame` trait, game kinds, sessions, results
//! - `ladders`: Snake & Ladders engine, state and roll animation
//! - `memory`: Memory Match card game
//! - `rewards`: Game catalog and points ledger
//! - `zone`: Façade that opens games and settles wins

pub mod core;
pub mod board;
pub mod rules;
pub mod ladders;
pub mod memory;
pub mod rewards;
pub mod zone;

// Re-export commonly used types
pub use crate::core::{
    DieFace, GameRng,
    BoardConfig, AnimationConfig, MemoryConfig, LedgerConfig, GameZoneConfig,
    ConfigError, Error, JumpKind,
};

pub use crate::board::{Board, CellKind, Jump};

pub use crate::rules::{GameKind, GameResult, MiniGame, SessionId};

pub use crate::ladders::{GameState, LaddersEngine, Phase, RollAnimation, RollRecord};

pub use crate::memory::{FlipOutcome, MemoryMatch, MISMATCH_HIDE_DELAY};

pub use crate::rewards::{Award, Difficulty, GameCatalog, GameInfo, PointsLedger};

pub use crate::zone::GameZone;

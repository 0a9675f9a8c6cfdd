//! Core engine types: RNG, configuration, errors.
//!
//! This module contains the building blocks shared by every game.
//! Games are configured via `GameZoneConfig` rather than by modifying the core.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::{DieFace, GameRng, DIE_FACES};
pub use config::{
    AnimationConfig, BoardConfig, GameZoneConfig, LedgerConfig, MemoryConfig,
    CLASSIC_BOARD_SIZE, CLASSIC_LADDERS, CLASSIC_SNAKES, CLASSIC_SYMBOLS,
    MAX_ANIMATION_FRAMES,
};
pub use error::{ConfigError, Error, JumpKind};

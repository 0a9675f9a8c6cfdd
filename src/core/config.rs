//! Game configuration types.
//!
//! Games are configured at startup by providing:
//! - `BoardConfig`: board size and the snake/ladder jump tables
//! - `AnimationConfig`: timing of the simulated die roll
//! - `MemoryConfig`: the card symbols dealt in Memory Match
//! - `LedgerConfig`: the starting points balance
//! - `GameZoneConfig`: combines all configuration
//!
//! Every section has a `Default` matching the standard Game Zone and can be
//! loaded from JSON. Validation happens when a config is turned into a
//! running component (`Board::new`, `MemoryMatch::new`, ...), and
//! `GameZoneConfig::validate` checks everything up front.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, Error};

/// Standard board size.
pub const CLASSIC_BOARD_SIZE: u32 = 100;

/// Standard snakes: head -> tail.
pub const CLASSIC_SNAKES: [(u32, u32); 10] = [
    (16, 6),
    (47, 26),
    (49, 11),
    (56, 53),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (98, 78),
];

/// Standard ladders: foot -> top.
pub const CLASSIC_LADDERS: [(u32, u32); 9] = [
    (1, 38),
    (4, 14),
    (9, 21),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (80, 100),
];

/// Standard Memory Match symbols. Each is dealt twice.
pub const CLASSIC_SYMBOLS: [&str; 6] = ["🌟", "🎯", "🎨", "🎪", "🎭", "🎵"];

/// Most faces a single roll animation may show.
pub const MAX_ANIMATION_FRAMES: u64 = 64;

/// Board topology: size and jump tables.
///
/// Maps are keyed by source cell. `BTreeMap` keeps serialized output
/// stable and ordered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of cells (cells are numbered 1..=size).
    pub size: u32,

    /// Snake heads to tails (destination below source).
    #[serde(default)]
    pub snakes: BTreeMap<u32, u32>,

    /// Ladder feet to tops (destination above source).
    #[serde(default)]
    pub ladders: BTreeMap<u32, u32>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl BoardConfig {
    /// The standard 100-cell board.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            size: CLASSIC_BOARD_SIZE,
            snakes: CLASSIC_SNAKES.into_iter().collect(),
            ladders: CLASSIC_LADDERS.into_iter().collect(),
        }
    }

    /// An empty board of the given size.
    #[must_use]
    pub fn empty(size: u32) -> Self {
        Self {
            size,
            snakes: BTreeMap::new(),
            ladders: BTreeMap::new(),
        }
    }

    /// Add a snake.
    #[must_use]
    pub fn with_snake(mut self, head: u32, tail: u32) -> Self {
        self.snakes.insert(head, tail);
        self
    }

    /// Add a ladder.
    #[must_use]
    pub fn with_ladder(mut self, foot: u32, top: u32) -> Self {
        self.ladders.insert(foot, top);
        self
    }
}

/// Timing of the simulated die-roll animation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Total animation window in milliseconds.
    pub duration_ms: u64,

    /// Time between displayed faces in milliseconds.
    pub frame_interval_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1500,
            frame_interval_ms: 100,
        }
    }
}

impl AnimationConfig {
    /// Set the animation window.
    #[must_use]
    pub fn with_duration_ms(mut self, ms: u64) -> Self {
        self.duration_ms = ms;
        self
    }

    /// Set the frame interval.
    #[must_use]
    pub fn with_frame_interval_ms(mut self, ms: u64) -> Self {
        self.frame_interval_ms = ms;
        self
    }

    /// Check the interval fits inside the window and the frame count is bounded.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_interval_ms == 0 || self.frame_interval_ms > self.duration_ms {
            return Err(ConfigError::InvalidAnimation {
                duration_ms: self.duration_ms,
                frame_interval_ms: self.frame_interval_ms,
            });
        }
        let frames = self.duration_ms / self.frame_interval_ms;
        if frames > MAX_ANIMATION_FRAMES {
            return Err(ConfigError::TooManyFrames {
                frames,
                max: MAX_ANIMATION_FRAMES,
            });
        }
        Ok(())
    }

    /// Number of faces shown during one roll.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        (self.duration_ms / self.frame_interval_ms.max(1)) as usize
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

/// Memory Match deck configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Symbols to deal. Every symbol must appear exactly twice.
    pub cards: Vec<String>,

    /// Points scored per matched pair.
    #[serde(default = "default_points_per_match")]
    pub points_per_match: u32,
}

fn default_points_per_match() -> u32 {
    10
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self::with_pairs(CLASSIC_SYMBOLS)
    }
}

impl MemoryConfig {
    /// Build a deck holding one pair of each symbol.
    #[must_use]
    pub fn with_pairs<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cards = symbols
            .into_iter()
            .map(Into::into)
            .flat_map(|s: String| [s.clone(), s])
            .collect();
        Self {
            cards,
            points_per_match: default_points_per_match(),
        }
    }

    /// Set the points scored per matched pair.
    #[must_use]
    pub fn with_points_per_match(mut self, points: u32) -> Self {
        self.points_per_match = points;
        self
    }

    /// Check that the deck is non-empty and fully paired.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cards.is_empty() {
            return Err(ConfigError::EmptyDeck);
        }

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for card in &self.cards {
            *counts.entry(card.as_str()).or_insert(0) += 1;
        }

        match counts.into_iter().find(|&(_, count)| count != 2) {
            Some((symbol, count)) => Err(ConfigError::UnpairedSymbol {
                symbol: symbol.to_string(),
                count,
            }),
            None => Ok(()),
        }
    }

    /// Number of pairs in the deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }
}

/// Points ledger configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Balance before any game is won.
    pub starting_points: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            starting_points: 1250,
        }
    }
}

/// Complete game zone configuration.
///
/// Missing sections fall back to their defaults when loaded from JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameZoneConfig {
    pub board: BoardConfig,
    pub animation: AnimationConfig,
    pub memory: MemoryConfig,
    pub ledger: LedgerConfig,
}

impl GameZoneConfig {
    /// Replace the board configuration.
    #[must_use]
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    /// Replace the animation configuration.
    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Replace the memory configuration.
    #[must_use]
    pub fn with_memory(mut self, memory: MemoryConfig) -> Self {
        self.memory = memory;
        self
    }

    /// Set the starting points balance.
    #[must_use]
    pub fn with_starting_points(mut self, points: u64) -> Self {
        self.ledger.starting_points = points;
        self
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        crate::board::Board::new(self.board.clone())?;
        self.animation.validate()?;
        self.memory.validate()?;
        Ok(())
    }
}

//! Error types.
//!
//! Configuration problems are rejected at construction time with a
//! `ConfigError`. Gameplay never fails: rolls or flips that arrive in the
//! wrong state are ignored.

use thiserror::Error;

/// Which jump table a configuration problem was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpKind {
    Snake,
    Ladder,
}

impl std::fmt::Display for JumpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JumpKind::Snake => write!(f, "snake"),
            JumpKind::Ladder => write!(f, "ladder"),
        }
    }
}

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be at least 2, got {size}")]
    BoardTooSmall { size: u32 },

    #[error("{kind} at cell {source_cell} is outside the board (valid sources: 1..{size})")]
    SourceOutOfRange { kind: JumpKind, source_cell: u32, size: u32 },

    #[error("{kind} {source_cell}->{destination} lands outside the board (1..={size})")]
    DestinationOutOfRange {
        kind: JumpKind,
        source_cell: u32,
        destination: u32,
        size: u32,
    },

    #[error("snake {source_cell}->{destination} must move down the board")]
    SnakeNotDownward { source_cell: u32, destination: u32 },

    #[error("ladder {source_cell}->{destination} must move up the board")]
    LadderNotUpward { source_cell: u32, destination: u32 },

    #[error("cell {cell} is both a snake head and a ladder foot")]
    OverlappingSource { cell: u32 },

    #[error("animation frame interval must be positive and no longer than the animation ({duration_ms}ms / {frame_interval_ms}ms)")]
    InvalidAnimation { duration_ms: u64, frame_interval_ms: u64 },

    #[error("animation would show {frames} faces per roll (max {max})")]
    TooManyFrames { frames: u64, max: u64 },

    #[error("memory deck is empty")]
    EmptyDeck,

    #[error("memory symbol {symbol:?} appears {count} times; every symbol needs exactly one pair")]
    UnpairedSymbol { symbol: String, count: usize },
}

/// Crate-level error for loading and running configurations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

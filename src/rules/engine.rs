//! Mini-game trait for outside collaborators.
//!
//! Games implement `MiniGame` so that services which do not know their
//! rules (the points ledger, the CLI) can ask:
//! - Which game is this
//! - Which session (one `reset` to the next) is it
//! - Has it ended, and how

use serde::{Deserialize, Serialize};

/// Identifies a game title in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    MemoryMatch,
    WordPuzzle,
    MathQuest,
    SnakeLadders,
    ColorSequence,
    SpeedMath,
}

impl GameKind {
    /// Stable catalog identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            GameKind::MemoryMatch => "memory-match",
            GameKind::WordPuzzle => "word-puzzle",
            GameKind::MathQuest => "math-quest",
            GameKind::SnakeLadders => "snake-ladders",
            GameKind::ColorSequence => "color-sequence",
            GameKind::SpeedMath => "speed-math",
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Identifies one play-through of a game, from `reset` until the next `reset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The session after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Turns it took to win (rolls or pair attempts).
    pub turns: u32,
    /// Score reached inside the game.
    pub score: u32,
}

/// A single-player mini-game.
///
/// ## Implementation Notes
///
/// - `session` must change on every reset so wins are never settled twice
/// - `result` returns `None` while the game continues
pub trait MiniGame {
    /// Which catalog title this is.
    fn kind(&self) -> GameKind;

    /// Current session.
    fn session(&self) -> SessionId;

    /// Check if the game has been won.
    fn result(&self) -> Option<GameResult>;

    /// Convenience for `result().is_some()`.
    fn is_won(&self) -> bool {
        self.result().is_some()
    }
}

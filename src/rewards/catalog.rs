//! Game catalog.
//!
//! The `GameCatalog` lists every title in the zone with its difficulty,
//! category and win reward. Lookup is by `GameKind`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::rules::GameKind;

/// Difficulty badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    pub kind: GameKind,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: String,
    /// Points awarded for a win.
    pub points: u32,
    /// Whether an engine exists for this title.
    pub playable: bool,
}

impl GameInfo {
    /// Create a catalog entry. Entries start unplayable.
    pub fn new(
        kind: GameKind,
        name: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
        category: impl Into<String>,
        points: u32,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            difficulty,
            category: category.into(),
            points,
            playable: false,
        }
    }

    /// Mark the title as playable.
    #[must_use]
    pub fn playable(mut self) -> Self {
        self.playable = true;
        self
    }
}

/// Registry of titles, in display order.
#[derive(Clone, Debug, Default)]
pub struct GameCatalog {
    games: Vec<GameInfo>,
    index: FxHashMap<GameKind, usize>,
}

impl GameCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The six standard Game Zone titles.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.register(
            GameInfo::new(
                GameKind::MemoryMatch,
                "Memory Match",
                "Match pairs of cards to improve memory and concentration",
                Difficulty::Easy,
                "Memory",
                50,
            )
            .playable(),
        );
        catalog.register(GameInfo::new(
            GameKind::WordPuzzle,
            "Word Builder",
            "Create words from scrambled letters to enhance vocabulary",
            Difficulty::Medium,
            "Language",
            75,
        ));
        catalog.register(GameInfo::new(
            GameKind::MathQuest,
            "Math Quest",
            "Solve math problems in a fun adventure setting",
            Difficulty::Medium,
            "Mathematics",
            100,
        ));
        catalog.register(
            GameInfo::new(
                GameKind::SnakeLadders,
                "Snake & Ladders",
                "Classic board game with educational questions",
                Difficulty::Easy,
                "Strategy",
                60,
            )
            .playable(),
        );
        catalog.register(GameInfo::new(
            GameKind::ColorSequence,
            "Color Sequence",
            "Remember and repeat color patterns",
            Difficulty::Hard,
            "Memory",
            120,
        ));
        catalog.register(GameInfo::new(
            GameKind::SpeedMath,
            "Speed Math",
            "Quick math challenges against the clock",
            Difficulty::Hard,
            "Mathematics",
            150,
        ));
        catalog
    }

    /// Register a title.
    ///
    /// Panics if the kind is already registered.
    pub fn register(&mut self, info: GameInfo) {
        if self.index.contains_key(&info.kind) {
            panic!("Game {} already registered", info.kind);
        }
        self.index.insert(info.kind, self.games.len());
        self.games.push(info);
    }

    #[must_use]
    pub fn get(&self, kind: GameKind) -> Option<&GameInfo> {
        self.index.get(&kind).map(|&i| &self.games[i])
    }

    /// Look up by catalog id (`"snake-ladders"`).
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&GameInfo> {
        self.games.iter().find(|g| g.kind.id() == id)
    }

    /// Win reward for a title, zero if unknown.
    #[must_use]
    pub fn points_for(&self, kind: GameKind) -> u32 {
        self.get(kind).map_or(0, |g| g.points)
    }

    /// Titles in display order.
    pub fn iter(&self) -> impl Iterator<Item = &GameInfo> {
        self.games.iter()
    }

    /// Titles with an engine behind them.
    pub fn playable(&self) -> impl Iterator<Item = &GameInfo> {
        self.games.iter().filter(|g| g.playable)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

//! Points ledger.
//!
//! Games never touch the points balance. They report a `GameResult` through
//! `MiniGame`, and the ledger turns it into an award exactly once per
//! session.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::catalog::GameCatalog;
use crate::core::LedgerConfig;
use crate::rules::{GameKind, GameResult, MiniGame, SessionId};

/// One credited win.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub kind: GameKind,
    pub session: SessionId,
    pub points: u32,
    pub result: GameResult,
}

/// Running points balance with award history.
#[derive(Clone, Debug)]
pub struct PointsLedger {
    balance: u64,
    awards: Vec<Award>,
    settled: FxHashSet<(GameKind, SessionId)>,
}

impl PointsLedger {
    /// Create a ledger with a starting balance.
    #[must_use]
    pub fn new(starting_points: u64) -> Self {
        Self {
            balance: starting_points,
            awards: Vec::new(),
            settled: FxHashSet::default(),
        }
    }

    #[must_use]
    pub fn from_config(config: &LedgerConfig) -> Self {
        Self::new(config.starting_points)
    }

    /// Credit a won game.
    ///
    /// Returns the points awarded, or `None` if the game is not won or this
    /// session was already settled.
    pub fn settle(&mut self, catalog: &GameCatalog, game: &impl MiniGame) -> Option<u32> {
        let result = game.result()?;
        let key = (game.kind(), game.session());
        if !self.settled.insert(key) {
            return None;
        }

        let points = catalog.points_for(game.kind());
        self.balance += u64::from(points);
        self.awards.push(Award {
            kind: game.kind(),
            session: game.session(),
            points,
            result,
        });
        log::info!(
            "{} {}: +{} points (balance {})",
            game.kind(),
            game.session(),
            points,
            self.balance
        );
        Some(points)
    }

    #[must_use]
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Awards in the order they were credited.
    #[must_use]
    pub fn awards(&self) -> &[Award] {
        &self.awards
    }

    /// Total awarded for one title.
    #[must_use]
    pub fn total_for(&self, kind: GameKind) -> u64 {
        self.awards
            .iter()
            .filter(|a| a.kind == kind)
            .map(|a| u64::from(a.points))
            .sum()
    }
}

impl Default for PointsLedger {
    fn default() -> Self {
        Self::from_config(&LedgerConfig::default())
    }
}

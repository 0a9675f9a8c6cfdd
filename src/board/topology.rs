//! Validated board with jump lookup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, ConfigError, JumpKind};

/// A jump triggered by landing on its source cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Jump {
    /// Slide down from `from` to `to`.
    Snake { from: u32, to: u32 },
    /// Climb up from `from` to `to`.
    Ladder { from: u32, to: u32 },
}

impl Jump {
    /// Cell that triggers the jump.
    #[must_use]
    pub fn source(self) -> u32 {
        match self {
            Jump::Snake { from, .. } | Jump::Ladder { from, .. } => from,
        }
    }

    /// Cell the jump lands on.
    #[must_use]
    pub fn destination(self) -> u32 {
        match self {
            Jump::Snake { to, .. } | Jump::Ladder { to, .. } => to,
        }
    }

    #[must_use]
    pub fn kind(self) -> JumpKind {
        match self {
            Jump::Snake { .. } => JumpKind::Snake,
            Jump::Ladder { .. } => JumpKind::Ladder,
        }
    }
}

/// What the display layer should mark on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Plain,
    SnakeHead,
    LadderFoot,
}

/// Immutable, validated board.
///
/// ## Invariants
///
/// - `size >= 2`, cells are numbered `1..=size`
/// - Every jump source lies in `1..size` (the final cell never jumps)
/// - Every destination lies in `1..=size`
/// - Snakes go down, ladders go up
/// - No cell is both a snake head and a ladder foot
///
/// ## Example
///
/// ```
/// use game_zone::board::{Board, Jump};
///
/// let board = Board::classic();
/// assert_eq!(board.size(), 100);
/// assert_eq!(board.jump_at(16), Some(Jump::Snake { from: 16, to: 6 }));
/// assert_eq!(board.jump_at(50), None);
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    size: u32,
    jumps: FxHashMap<u32, Jump>,
    config: BoardConfig,
}

impl Board {
    /// Validate a configuration and build the board.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        match Self::build(&config) {
            Ok((size, jumps)) => Ok(Self { size, jumps, config }),
            Err(err) => {
                log::warn!("rejected board configuration: {}", err);
                Err(err)
            }
        }
    }

    /// The standard 100-cell board.
    #[must_use]
    pub fn classic() -> Self {
        let config = BoardConfig::classic();
        let (size, jumps) = Self::build(&config).unwrap_or_else(|e| unreachable!("classic board is valid: {}", e));
        Self { size, jumps, config }
    }

    fn build(config: &BoardConfig) -> Result<(u32, FxHashMap<u32, Jump>), ConfigError> {
        let size = config.size;
        if size < 2 {
            return Err(ConfigError::BoardTooSmall { size });
        }

        let mut jumps = FxHashMap::default();

        for (&from, &to) in &config.snakes {
            check_bounds(JumpKind::Snake, from, to, size)?;
            if to >= from {
                return Err(ConfigError::SnakeNotDownward {
                    source_cell: from,
                    destination: to,
                });
            }
            jumps.insert(from, Jump::Snake { from, to });
        }

        for (&from, &to) in &config.ladders {
            check_bounds(JumpKind::Ladder, from, to, size)?;
            if to <= from {
                return Err(ConfigError::LadderNotUpward {
                    source_cell: from,
                    destination: to,
                });
            }
            if jumps.contains_key(&from) {
                return Err(ConfigError::OverlappingSource { cell: from });
            }
            jumps.insert(from, Jump::Ladder { from, to });
        }

        Ok((size, jumps))
    }

    /// Number of cells (the final, winning cell).
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The configuration this board was built from.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Snake destination if `cell` is a snake head.
    #[must_use]
    pub fn snake_at(&self, cell: u32) -> Option<u32> {
        match self.jumps.get(&cell) {
            Some(Jump::Snake { to, .. }) => Some(*to),
            _ => None,
        }
    }

    /// Ladder destination if `cell` is a ladder foot.
    #[must_use]
    pub fn ladder_at(&self, cell: u32) -> Option<u32> {
        match self.jumps.get(&cell) {
            Some(Jump::Ladder { to, .. }) => Some(*to),
            _ => None,
        }
    }

    /// The jump triggered by landing on `cell`, snakes checked first.
    #[must_use]
    pub fn jump_at(&self, cell: u32) -> Option<Jump> {
        if let Some(to) = self.snake_at(cell) {
            return Some(Jump::Snake { from: cell, to });
        }
        self.ladder_at(cell).map(|to| Jump::Ladder { from: cell, to })
    }

    /// Move `die` cells forward from `position`, capped at the final cell.
    #[must_use]
    pub fn advance(&self, position: u32, die: u8) -> u32 {
        position.saturating_add(u32::from(die)).min(self.size)
    }

    /// Classify a cell for display.
    #[must_use]
    pub fn cell_kind(&self, cell: u32) -> CellKind {
        match self.jumps.get(&cell) {
            Some(Jump::Snake { .. }) => CellKind::SnakeHead,
            Some(Jump::Ladder { .. }) => CellKind::LadderFoot,
            None => CellKind::Plain,
        }
    }

    /// Check a cell number lies on the board.
    #[must_use]
    pub fn contains(&self, cell: u32) -> bool {
        (1..=self.size).contains(&cell)
    }

    /// Display rows, top row first, each counting down from its highest cell.
    ///
    /// A 100-cell board with width 10 yields `100..=91`, `90..=81`, ... `10..=1`.
    pub fn rows(&self, width: u32) -> impl Iterator<Item = Vec<u32>> + '_ {
        let width = width.max(1);
        let row_count = self.size.div_ceil(width);
        (0..row_count).map(move |row| {
            let top = self.size - row * width;
            let bottom = top.saturating_sub(width) + 1;
            (bottom..=top).rev().collect()
        })
    }

    /// All jumps, ordered by source cell.
    #[must_use]
    pub fn jumps(&self) -> Vec<Jump> {
        let mut jumps: Vec<Jump> = self.jumps.values().copied().collect();
        jumps.sort_by_key(|j| j.source());
        jumps
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}

fn check_bounds(kind: JumpKind, from: u32, to: u32, size: u32) -> Result<(), ConfigError> {
    if !(1..size).contains(&from) {
        return Err(ConfigError::SourceOutOfRange {
            kind,
            source_cell: from,
            size,
        });
    }
    if !(1..=size).contains(&to) {
        return Err(ConfigError::DestinationOutOfRange {
            kind,
            source_cell: from,
            destination: to,
            size,
        });
    }
    Ok(())
}

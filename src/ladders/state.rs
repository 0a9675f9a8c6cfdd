//! Per-session Snake & Ladders state.
//!
//! ## GameState
//!
//! Everything the display layer shows:
//! - Position, last roll, roll count
//! - Rolling and won flags
//! - The narration of the latest transition
//! - Full roll history
//!
//! States are values: the engine takes a state and returns the next one.
//! History uses an `im` persistent vector so that each step clones in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Jump;
use crate::core::DieFace;
use crate::rules::{GameKind, GameResult, MiniGame, SessionId};

/// Cell every game starts on.
pub const START_CELL: u32 = 1;

pub const MSG_START: &str = "Roll the die to start!";
pub const MSG_ROLLING: &str = "Rolling...";

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Awaiting a roll.
    Ready,
    /// Die animation in progress, rolls are rejected.
    Rolling,
    /// Final cell reached. Terminal until reset.
    Won,
}

/// One resolved roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// Face drawn.
    pub die: DieFace,
    /// Position before the roll.
    pub from: u32,
    /// Cell reached by movement alone, capped at the final cell.
    pub landed: u32,
    /// Position after applying any jump.
    pub to: u32,
    /// Jump applied on `landed`, if any.
    pub jump: Option<Jump>,
    /// Whether this roll won the game.
    pub won: bool,
}

impl RollRecord {
    /// Describe the roll. A win takes precedence over the movement.
    #[must_use]
    pub fn narrate(&self) -> String {
        if self.won {
            return format!(
                "Congratulations! You reached position {} and won the game!",
                self.to
            );
        }
        self.narrate_movement()
    }

    /// Describe the movement alone, ignoring any win.
    #[must_use]
    pub fn narrate_movement(&self) -> String {
        match self.jump {
            Some(Jump::Snake { to, .. }) => {
                format!("Oh no! You hit a snake! Slide down to position {}.", to)
            }
            Some(Jump::Ladder { to, .. }) => {
                format!("Great! You found a ladder! Climb up to position {}.", to)
            }
            None => format!("You moved {} spaces to position {}.", self.die, self.to),
        }
    }
}

/// Mutable per-session record of a single-player game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Session this state belongs to.
    pub session: SessionId,

    /// Current cell (1..=size).
    pub position: u32,

    /// Last committed die face; `None` before the first roll.
    pub last_roll: Option<DieFace>,

    /// Completed rolls this session.
    pub rolls_taken: u32,

    /// True only while a roll animation is running.
    pub is_rolling: bool,

    /// True once the final cell is reached.
    pub won: bool,

    /// Narration of the latest transition.
    pub message: String,

    /// Most recent resolved roll.
    pub last_move: Option<RollRecord>,

    /// Every resolved roll this session, oldest first.
    pub history: Vector<RollRecord>,
}

impl GameState {
    /// A fresh state on the start cell.
    #[must_use]
    pub fn new(session: SessionId) -> Self {
        Self {
            session,
            position: START_CELL,
            last_roll: None,
            rolls_taken: 0,
            is_rolling: false,
            won: false,
            message: MSG_START.to_string(),
            last_move: None,
            history: Vector::new(),
        }
    }

    /// Derive the lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.won {
            Phase::Won
        } else if self.is_rolling {
            Phase::Rolling
        } else {
            Phase::Ready
        }
    }

    /// Whether a new roll would be accepted.
    #[must_use]
    pub fn accepts_roll(&self) -> bool {
        self.phase() == Phase::Ready
    }
}

impl MiniGame for GameState {
    fn kind(&self) -> GameKind {
        GameKind::SnakeLadders
    }

    fn session(&self) -> SessionId {
        self.session
    }

    /// Snake & Ladders has no in-game score; only the roll count is reported.
    fn result(&self) -> Option<GameResult> {
        self.won.then_some(GameResult {
            turns: self.rolls_taken,
            score: 0,
        })
    }
}

//! Snake & Ladders.
//!
//! - `engine`: reset and roll resolution
//! - `state`: per-session state, roll records, narration
//! - `animation`: the timed rolling window before a roll is committed
//!
//! ## Lifecycle
//!
//! ```text
//! reset ──> Ready ──begin_roll──> Rolling ──commit_roll──> Ready | Won
//!             │                                              ▲
//!             └──────────────────roll────────────────────────┘
//! ```
//!
//! `Won` is terminal until the next `reset`.

mod animation;
mod engine;
mod state;

pub use animation::RollAnimation;
pub use engine::LaddersEngine;
pub use state::{GameState, Phase, RollRecord, MSG_ROLLING, MSG_START, START_CELL};

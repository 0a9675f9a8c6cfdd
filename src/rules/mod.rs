//! Mini-game trait for game implementations.
//!
//! Games implement `MiniGame` to expose:
//! - Their catalog identity
//! - The current session
//! - Win detection
//!
//! Point accounting calls into `MiniGame` but never interprets
//! game-specific state directly.

pub mod engine;

pub use engine::{GameKind, GameResult, MiniGame, SessionId};

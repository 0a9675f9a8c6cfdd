//! Memory Match: find the pairs in a shuffled deck.
//!
//! - Each attempt turns over two cards and counts one move
//! - A match scores and stays face up
//! - A mismatch stays face up until the display hides it after
//!   `MISMATCH_HIDE_DELAY`; no other card can be flipped meanwhile
//! - The game is won when every card is matched

mod game;

pub use game::{FlipOutcome, MemoryMatch, MISMATCH_HIDE_DELAY};

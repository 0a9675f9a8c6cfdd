//! Board topology for Snake & Ladders.
//!
//! A `Board` is built once from a `BoardConfig`, validated, and then never
//! changes. Games share it by reference.

mod topology;

pub use topology::{Board, CellKind, Jump};

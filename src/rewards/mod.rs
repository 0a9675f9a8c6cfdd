//! Game catalog and points accounting.
//!
//! The points balance is shared by every game but owned by none of them:
//! games expose a `GameResult` through `MiniGame` and the `PointsLedger`
//! credits the catalog reward.

mod catalog;
mod ledger;

pub use catalog::{Difficulty, GameCatalog, GameInfo};
pub use ledger::{Award, PointsLedger};

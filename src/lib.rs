//! Minimum-coin change by bottom-up tabulation.
//!
//! [`min_coins`] is the integer surface (`-1` when the amount can't be formed),
//! [`MinCoinSolver`] the configurable one. The `usize` functions in
//! [`cs::dynamic::coin_change`] are the unchecked core.

pub mod cs;
pub mod error;
pub mod events;

pub use cs::dynamic;
pub use cs::dynamic::*;
pub use error::{Error, Result};
pub use events::EventEmitter;

//! Repair operators that reinsert vertices removed by a destroy step.
//!
//! - [`repair_weighted_regret`] — Weighted regret reinsertion into the shorter cycle
//! - [`RegretRepair`] — The same operation as a configured operator

mod regret;

pub use regret::{repair_weighted_regret, RegretRepair};

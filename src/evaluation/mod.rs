//! Cycle cost and insertion evaluation.
//!
//! - [`cycle_cost`] — closed length of one cycle
//! - [`insertion_cost`] — cost of splicing a vertex into an edge
//! - [`cheapest_insertion`] — greedy selection over all positions and vertices
//! - [`max_regret_insertion`] — regret-based selection

mod insertion;

pub use insertion::{
    cheapest_insertion, cycle_cost, insertion_cost, max_regret_insertion, rank_insertion,
    Insertion, RankedInsertion, RegretScore,
};

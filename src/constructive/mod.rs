//! Constructive heuristics that build a tour pair from scratch.
//!
//! - [`construct_random`] — Uniform random split, O(n)
//! - [`construct_nearest_neighbor`] — Alternating tail growth, O(n²)
//! - [`construct_greedy_cycle`] — Alternating cheapest insertion, O(n³)
//! - [`construct_weighted_regret`] — Alternating regret-2 insertion, O(n³)
//!
//! Every randomized heuristic draws its start vertex from the `rng` passed in;
//! the rest of the construction is deterministic.

mod greedy_cycle;
mod nearest_neighbor;
mod random_split;
mod seeding;
mod weighted_regret;

pub use greedy_cycle::construct_greedy_cycle;
pub use nearest_neighbor::construct_nearest_neighbor;
pub use random_split::construct_random;
pub use weighted_regret::{construct_weighted_regret, DEFAULT_ALPHA};

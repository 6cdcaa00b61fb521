//! Greedy-cycle cheapest-insertion heuristic.
//!
//! # Algorithm
//!
//! Both cycles are seeded with two vertices (see [`seed_pair`]). Turns then
//! alternate strictly between the cycles. On each turn every edge of the
//! active cycle and every remaining vertex are evaluated, and the pair with
//! the smallest insertion cost is applied:
//!
//! ```text
//! Δ(i, v) = d(c[i], v) + d(v, c[i+1]) − d(c[i], c[i+1])
//! ```
//!
//! # Complexity
//!
//! O(n² · m) where m is the average cycle length, O(n³) worst case.

use rand::Rng;
use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::error::TourError;
use crate::evaluation::cheapest_insertion;
use crate::models::TourPair;

use super::seeding::{grow_alternating, seed_pair};

/// Constructs a tour pair by alternating cheapest insertions.
///
/// Equal costs resolve to the earliest edge, then the lowest vertex.
///
/// # Errors
///
/// Returns [`TourError::NoInsertionCandidate`] if vertices remain while the
/// active cycle offers no edge. This cannot happen for a well-formed matrix.
///
/// # Examples
///
/// ```
/// use two_tsp::distance::DistanceMatrix;
/// use two_tsp::constructive::construct_greedy_cycle;
/// use two_tsp::random::create_rng;
///
/// let mut dm = DistanceMatrix::new(6);
/// for i in 0..6 {
///     for j in 0..6 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
///
/// let pair = construct_greedy_cycle(&dm, &mut create_rng(42)).expect("constructs");
/// assert!(pair.validate(6).is_ok());
/// ```
pub fn construct_greedy_cycle<R: Rng>(
    distances: &DistanceMatrix,
    rng: &mut R,
) -> Result<TourPair, TourError> {
    debug!(
        event = "construction_start",
        strategy = "greedy_cycle",
        vertices = distances.size()
    );

    let (pair, remaining) = seed_pair(distances, rng);
    let pair = grow_alternating(pair, remaining, distances, cheapest_insertion)?;

    debug!(
        event = "construction_end",
        strategy = "greedy_cycle",
        first = pair.first().len(),
        second = pair.second().len(),
        cost = pair.total_cost(distances),
    );
    Ok(pair)
}

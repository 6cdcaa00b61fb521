//! Regret-2 insertion heuristic with an optional greedy-cost term.
//!
//! # Algorithm
//!
//! Seeding matches the greedy-cycle heuristic. On each turn, for every
//! remaining vertex the best and second-best insertion costs into the active
//! cycle are computed. The vertex with the highest score is inserted at its
//! own best position, and the turn passes to the other cycle.
//!
//! ```text
//! weighted:   score(v) = α·(second − best) − (1 − α)·best
//! unweighted: score(v) = second − best
//! ```
//!
//! A high `α` favours vertices that become expensive if deferred; a low `α`
//! favours vertices that are cheap to insert now. `α = 0` reduces to
//! cheapest insertion.
//!
//! # Complexity
//!
//! O(n² · m) where m is the average cycle length.
//!
//! # Reference
//!
//! Potvin, J.-Y. & Rousseau, J.-M. (1993). "A parallel route building
//! algorithm for the vehicle routing and scheduling problem with time
//! windows", *European Journal of Operational Research* 66(3), 331-340.

use rand::Rng;
use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::error::{check_alpha, TourError};
use crate::evaluation::{max_regret_insertion, RegretScore};
use crate::models::TourPair;

use super::seeding::{grow_alternating, seed_pair};

/// Default regret weight.
pub const DEFAULT_ALPHA: f64 = 0.75;

/// Constructs a tour pair with (weighted) regret insertion.
///
/// Equal scores resolve to the lowest vertex; a vertex's equal-cost
/// positions resolve to the earliest edge.
///
/// # Errors
///
/// - [`TourError::InvalidAlpha`] if `weighted` is `true` and `alpha` is NaN
///   or infinite. Unweighted regret ignores `alpha`.
/// - [`TourError::NoInsertionCandidate`] if vertices remain while the active
///   cycle is empty.
///
/// # Examples
///
/// ```
/// use two_tsp::distance::DistanceMatrix;
/// use two_tsp::constructive::{construct_weighted_regret, DEFAULT_ALPHA};
/// use two_tsp::random::create_rng;
///
/// let mut dm = DistanceMatrix::new(5);
/// for i in 0..5 {
///     for j in 0..5 {
///         dm.set(i, j, ((i * i) as f64 - (j * j) as f64).abs());
///     }
/// }
///
/// let pair = construct_weighted_regret(&dm, true, DEFAULT_ALPHA, &mut create_rng(7))
///     .expect("constructs");
/// assert!(pair.validate(5).is_ok());
/// ```
pub fn construct_weighted_regret<R: Rng>(
    distances: &DistanceMatrix,
    weighted: bool,
    alpha: f64,
    rng: &mut R,
) -> Result<TourPair, TourError> {
    if weighted {
        check_alpha(alpha)?;
    }
    debug!(
        event = "construction_start",
        strategy = "weighted_regret",
        vertices = distances.size(),
        weighted,
        alpha,
    );

    let score = RegretScore::new(weighted, alpha);
    let (pair, remaining) = seed_pair(distances, rng);
    let pair = grow_alternating(pair, remaining, distances, |cycle, candidates, dm| {
        max_regret_insertion(cycle, candidates, dm, score)
    })?;

    debug!(
        event = "construction_end",
        strategy = "weighted_regret",
        first = pair.first().len(),
        second = pair.second().len(),
        cost = pair.total_cost(distances),
    );
    Ok(pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::construct_greedy_cycle;
    use crate::random::create_rng;

    fn line(n: usize) -> DistanceMatrix {
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                dm.set(i, j, (i as f64 - j as f64).abs());
            }
        }
        dm
    }

    /// Pseudo-random asymmetric matrix with distinct entries.
    fn scrambled(n: usize) -> DistanceMatrix {
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    dm.set(i, j, ((i * 37 + j * 101) % 97) as f64 + 1.0 + j as f64 * 1e-3);
                }
            }
        }
        dm
    }

    #[test]
    fn test_regret_degenerate() {
        let mut rng = create_rng(2);
        let pair = construct_weighted_regret(&line(0), true, DEFAULT_ALPHA, &mut rng).expect("ok");
        assert_eq!(pair.into_cycles(), (vec![], vec![]));

        let pair = construct_weighted_regret(&line(1), true, DEFAULT_ALPHA, &mut rng).expect("ok");
        assert_eq!(pair.into_cycles(), (vec![0], vec![]));
    }

    #[test]
    fn test_regret_rejects_non_finite_alpha() {
        let mut rng = create_rng(2);
        assert_eq!(
            construct_weighted_regret(&line(4), true, f64::INFINITY, &mut rng),
            Err(TourError::InvalidAlpha(f64::INFINITY))
        );
        assert!(matches!(
            construct_weighted_regret(&line(4), true, f64::NAN, &mut rng),
            Err(TourError::InvalidAlpha(a)) if a.is_nan()
        ));
    }

    #[test]
    fn test_unweighted_ignores_alpha() {
        let dm = scrambled(9);
        let reference =
            construct_weighted_regret(&dm, false, DEFAULT_ALPHA, &mut create_rng(3)).expect("ok");
        for alpha in [2.0, -1.0, f64::NAN] {
            let pair = construct_weighted_regret(&dm, false, alpha, &mut create_rng(3))
                .expect("alpha unused without weighting");
            assert_eq!(pair, reference);
        }
    }

    #[test]
    fn test_weighted_accepts_alpha_outside_unit_range() {
        let dm = scrambled(10);
        for alpha in [1.5, -0.25] {
            let pair = construct_weighted_regret(&dm, true, alpha, &mut create_rng(6)).expect("finite");
            assert!(pair.validate(10).is_ok());
        }
    }

    #[test]
    fn test_regret_partitions() {
        for n in 0..18 {
            for weighted in [true, false] {
                let pair =
                    construct_weighted_regret(&scrambled(n), weighted, 0.5, &mut create_rng(n as u64))
                        .expect("ok");
                assert!(pair.validate(n).is_ok());
            }
        }
    }

    #[test]
    fn test_alpha_zero_matches_greedy_cycle() {
        // With α = 0 every turn picks the cheapest insertion, the same choice
        // greedy-cycle makes when all costs are distinct.
        for seed in 0..5 {
            let dm = scrambled(11);
            let regret = construct_weighted_regret(&dm, true, 0.0, &mut create_rng(seed))
                .expect("ok");
            let greedy = construct_greedy_cycle(&dm, &mut create_rng(seed)).expect("ok");
            assert_eq!(regret, greedy);
        }
    }

    #[test]
    fn test_regret_reproducible() {
        let dm = scrambled(14);
        let a = construct_weighted_regret(&dm, true, DEFAULT_ALPHA, &mut create_rng(4)).expect("ok");
        let b = construct_weighted_regret(&dm, true, DEFAULT_ALPHA, &mut create_rng(4)).expect("ok");
        assert_eq!(a, b);
    }
}

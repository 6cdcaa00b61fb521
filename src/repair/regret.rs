//! Weighted regret reinsertion.
//!
//! Every iteration targets the currently shorter cycle (by vertex count,
//! equal lengths go to the first cycle), so the cycles stay balanced while
//! the batch drains. Within the target, the batch vertex with the highest
//! weighted regret is inserted at its best position.
//!
//! # Reference
//!
//! Ropke, S. & Pisinger, D. (2006). "An Adaptive Large Neighborhood Search
//! Heuristic for the Pickup and Delivery Problem with Time Windows",
//! *Transportation Science* 40(4), 455-472.

use tracing::{debug, trace};

use crate::constructive::DEFAULT_ALPHA;
use crate::distance::DistanceMatrix;
use crate::error::{check_alpha, TourError};
use crate::evaluation::{max_regret_insertion, RegretScore};
use crate::models::{mark_vertices, Cycle, TourPair};

/// Reinserts a batch of removed vertices into two cycles.
///
/// Takes ownership of the cycles and the batch; the returned pair contains
/// every vertex from all three. The shorter cycle is re-evaluated after each
/// insertion. When that cycle is empty, the lowest-index batch vertex is
/// appended to it directly.
///
/// An empty batch returns the cycles unchanged.
///
/// # Errors
///
/// - [`TourError::InvalidAlpha`] if `alpha` is NaN or infinite.
/// - [`TourError::VertexOutOfRange`] / [`TourError::DuplicateVertex`] if the
///   cycles and the batch do not hold distinct vertices of the matrix.
/// - [`TourError::NoInsertionCandidate`] if no insertion can be found while
///   the batch is non-empty.
///
/// # Examples
///
/// ```
/// use two_tsp::distance::DistanceMatrix;
/// use two_tsp::repair::repair_weighted_regret;
///
/// let mut dm = DistanceMatrix::new(6);
/// for i in 0..6 {
///     for j in 0..6 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
///
/// let pair = repair_weighted_regret(vec![0, 1], vec![5], vec![2, 3, 4], &dm, 0.75)
///     .expect("repairs");
/// assert!(pair.validate(6).is_ok());
/// ```
pub fn repair_weighted_regret(
    first: Cycle,
    second: Cycle,
    mut removed: Vec<usize>,
    distances: &DistanceMatrix,
    alpha: f64,
) -> Result<TourPair, TourError> {
    check_alpha(alpha)?;
    let mut seen = vec![false; distances.size()];
    mark_vertices(
        first.iter().chain(&second).chain(&removed).copied(),
        &mut seen,
    )?;

    debug!(
        event = "repair_start",
        first = first.len(),
        second = second.len(),
        removed = removed.len(),
        alpha,
    );

    removed.sort_unstable();
    let score = RegretScore::Weighted(alpha);
    let mut pair = TourPair::new(first, second);

    while !removed.is_empty() {
        let side = pair.shorter();
        let cycle = pair.cycle_mut(side);

        if cycle.is_empty() {
            let v = removed.remove(0);
            debug!(side = ?side, vertex = v, "bootstrapped empty cycle");
            cycle.push(v);
            continue;
        }

        let insertion = max_regret_insertion(cycle, &removed, distances, score).ok_or(
            TourError::NoInsertionCandidate {
                remaining: removed.len(),
            },
        )?;

        cycle.insert(insertion.position, insertion.vertex);
        removed.remove(insertion.candidate);
        trace!(
            side = ?side,
            vertex = insertion.vertex,
            position = insertion.position,
            cost = insertion.cost,
            "reinserted vertex"
        );
    }

    debug!(
        event = "repair_end",
        first = pair.first().len(),
        second = pair.second().len(),
        cost = pair.total_cost(distances),
    );
    Ok(pair)
}

/// Weighted regret repair as a reusable operator.
///
/// # Examples
///
/// ```
/// use two_tsp::distance::DistanceMatrix;
/// use two_tsp::models::TourPair;
/// use two_tsp::repair::RegretRepair;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.0],
///     vec![2.0, 1.0, 0.0],
/// ]).expect("square");
///
/// let op = RegretRepair::default();
/// let pair = op.repair(TourPair::new(vec![0], vec![]), vec![1, 2], &dm).expect("repairs");
/// assert_eq!(pair.num_vertices(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegretRepair {
    alpha: f64,
}

impl RegretRepair {
    /// Creates a repair operator with the given regret weight.
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    /// Regret weight used by this operator.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Operator name for logs and statistics.
    pub fn name(&self) -> &str {
        "weighted_regret_repair"
    }

    /// Reinserts `removed` into `pair`.
    pub fn repair(
        &self,
        pair: TourPair,
        removed: Vec<usize>,
        distances: &DistanceMatrix,
    ) -> Result<TourPair, TourError> {
        let (first, second) = pair.into_cycles();
        repair_weighted_regret(first, second, removed, distances, self.alpha)
    }
}

impl Default for RegretRepair {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::cycle_cost;

    fn line(n: usize) -> DistanceMatrix {
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                dm.set(i, j, (i as f64 - j as f64).abs());
            }
        }
        dm
    }

    #[test]
    fn test_repair_inserts_all() {
        let dm = line(8);
        let pair =
            repair_weighted_regret(vec![0, 1, 2], vec![7], vec![3, 4, 5, 6], &dm, DEFAULT_ALPHA)
                .expect("repairs");
        assert!(pair.validate(8).is_ok());
    }

    #[test]
    fn test_repair_targets_shorter_cycle() {
        let dm = line(8);
        // Second cycle has one vertex, first has three: the first two
        // insertions go to the second cycle, then lengths tie and the first
        // cycle takes a turn.
        let pair = repair_weighted_regret(vec![0, 1, 2], vec![7], vec![3, 4, 5], &dm, 0.5)
            .expect("repairs");
        assert_eq!(pair.first().len(), 4);
        assert_eq!(pair.second().len(), 3);
    }

    #[test]
    fn test_repair_bootstraps_empty_cycles() {
        let dm = line(5);
        let pair = repair_weighted_regret(vec![], vec![], vec![4, 2, 0, 3, 1], &dm, DEFAULT_ALPHA)
            .expect("repairs");
        assert!(pair.validate(5).is_ok());
        // Lowest vertex bootstraps the first cycle, then the second cycle is
        // empty and shorter, so it bootstraps next.
        assert_eq!(pair.first()[0], 0);
        assert_eq!(pair.second()[0], 1);
        assert_eq!(pair.first().len(), 3);
        assert_eq!(pair.second().len(), 2);
    }

    #[test]
    fn test_repair_empty_batch_is_identity() {
        let dm = line(4);
        let pair = repair_weighted_regret(vec![0, 1], vec![2, 3], vec![], &dm, DEFAULT_ALPHA)
            .expect("repairs");
        assert_eq!(pair, TourPair::new(vec![0, 1], vec![2, 3]));
    }

    #[test]
    fn test_repair_picks_cheapest_with_alpha_zero() {
        let dm = line(10);
        // Lengths tie, so the first cycle [0, 9] is the target. With α = 0 the
        // cheapest vertex wins: 3 and 7 both cost 0 on the 0→9 edge, so the
        // lower index goes first. The second cycle is then shorter and takes 7.
        let pair = repair_weighted_regret(vec![0, 9], vec![4, 5], vec![3, 7], &dm, 0.0)
            .expect("repairs");
        assert_eq!(pair.first(), &[0, 3, 9]);
        assert_eq!(pair.second().len(), 3);
    }

    #[test]
    fn test_repair_rejects_invalid_input() {
        let dm = line(4);
        assert_eq!(
            repair_weighted_regret(vec![0, 1], vec![2], vec![1], &dm, DEFAULT_ALPHA),
            Err(TourError::DuplicateVertex(1))
        );
        assert_eq!(
            repair_weighted_regret(vec![0, 1], vec![2], vec![9], &dm, DEFAULT_ALPHA),
            Err(TourError::VertexOutOfRange { vertex: 9, size: 4 })
        );
        assert_eq!(
            repair_weighted_regret(vec![0, 1], vec![2], vec![3], &dm, f64::NEG_INFINITY),
            Err(TourError::InvalidAlpha(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn test_repair_accepts_alpha_outside_unit_range() {
        let dm = line(5);
        for alpha in [1.25, -0.5] {
            let pair = repair_weighted_regret(vec![0, 1], vec![2], vec![3, 4], &dm, alpha)
                .expect("finite alpha");
            assert!(pair.validate(5).is_ok());
        }
    }

    #[test]
    fn test_repair_does_not_worsen_line_order() {
        let dm = line(6);
        let pair = repair_weighted_regret(vec![0, 2], vec![3, 5], vec![1, 4], &dm, DEFAULT_ALPHA)
            .expect("repairs");
        // 1 fits between 0 and 2 for free, 4 between 3 and 5
        assert_eq!(cycle_cost(pair.first(), &dm), 4.0);
        assert_eq!(cycle_cost(pair.second(), &dm), 4.0);
    }

    #[test]
    fn test_operator() {
        let op = RegretRepair::new(0.3);
        assert_eq!(op.alpha(), 0.3);
        assert_eq!(op.name(), "weighted_regret_repair");
        assert_eq!(RegretRepair::default().alpha(), DEFAULT_ALPHA);

        let dm = line(5);
        let pair = op
            .repair(TourPair::new(vec![0, 1], vec![4]), vec![2, 3], &dm)
            .expect("repairs");
        assert!(pair.validate(5).is_ok());
    }
}

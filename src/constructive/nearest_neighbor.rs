//! Nearest-neighbor constructive heuristic for two cycles.
//!
//! Both cycles grow at their tail, one vertex per turn, alternating between
//! cycles. The second cycle starts from the vertex farthest from the first
//! start so the two cycles tend to cover different regions.
//!
//! # Complexity
//!
//! O(n²) where n = number of vertices.

use rand::Rng;
use tracing::{debug, trace};

use crate::distance::DistanceMatrix;
use crate::models::{Side, TourPair};

use super::seeding::random_start;

/// Constructs a tour pair with the nearest-neighbor heuristic.
///
/// Picks a random start `s1` for the first cycle and the unvisited vertex
/// farthest from it as `s2` for the second. Then, alternating cycles and
/// starting with the first, appends the unvisited vertex nearest to the
/// active cycle's last vertex. Ties go to the lowest vertex index.
///
/// # Examples
///
/// ```
/// use two_tsp::distance::DistanceMatrix;
/// use two_tsp::constructive::construct_nearest_neighbor;
/// use two_tsp::random::create_rng;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![3.0, 2.0, 1.0, 0.0],
/// ]).expect("square");
///
/// let pair = construct_nearest_neighbor(&dm, &mut create_rng(42));
/// assert!(pair.validate(4).is_ok());
/// assert_eq!(pair.first().len(), 2);
/// ```
pub fn construct_nearest_neighbor<R: Rng>(distances: &DistanceMatrix, rng: &mut R) -> TourPair {
    let n = distances.size();
    debug!(event = "construction_start", strategy = "nearest_neighbor", vertices = n);

    let Some((s1, mut unvisited)) = random_start(n, rng) else {
        return TourPair::default();
    };

    let Some(far) = distances.farthest(s1, &unvisited) else {
        return TourPair::new(vec![s1], Vec::new());
    };
    let s2 = unvisited.remove(far);
    let mut pair = TourPair::new(vec![s1], vec![s2]);

    // Tail of each cycle, indexed First = 0, Second = 1.
    let mut tails = [s1, s2];
    let mut side = Side::First;
    while let Some(pos) = distances.nearest(tails[side as usize], &unvisited) {
        let from = tails[side as usize];
        let next = unvisited.remove(pos);
        trace!(side = ?side, from, vertex = next, "appended vertex");
        pair.cycle_mut(side).push(next);
        tails[side as usize] = next;
        side = side.flip();
    }

    debug!(
        event = "construction_end",
        strategy = "nearest_neighbor",
        first = pair.first().len(),
        second = pair.second().len(),
    );
    pair
}

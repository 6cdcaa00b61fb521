//! Seeding and alternating growth shared by the insertion heuristics.

use rand::Rng;
use tracing::trace;

use crate::distance::DistanceMatrix;
use crate::error::TourError;
use crate::evaluation::Insertion;
use crate::models::{Side, TourPair};

/// Picks a uniformly random start vertex and returns it together with the
/// remaining vertices in ascending order.
///
/// Returns `None` when there are no vertices.
pub(super) fn random_start<R: Rng>(n: usize, rng: &mut R) -> Option<(usize, Vec<usize>)> {
    if n == 0 {
        return None;
    }
    let start = rng.random_range(0..n);
    let remaining = (0..n).filter(|&v| v != start).collect();
    Some((start, remaining))
}

/// Removes and returns the candidate chosen by `pick`, keeping the rest in
/// order.
fn take<F>(remaining: &mut Vec<usize>, pick: F) -> Option<usize>
where
    F: FnOnce(&[usize]) -> Option<usize>,
{
    let pos = pick(remaining.as_slice())?;
    Some(remaining.remove(pos))
}

/// Seeds both cycles with two vertices each.
///
/// The first cycle gets a random vertex and its nearest neighbour. The
/// second cycle starts from the vertex farthest from the first seed, plus
/// that vertex's nearest neighbour. Small instances leave later seeds out:
/// `n = 1` gives `([s1], [])`, `n = 2` gives `([s1, s1b], [])` and `n = 3`
/// gives `([s1, s1b], [s2])`.
pub(super) fn seed_pair<R: Rng>(
    distances: &DistanceMatrix,
    rng: &mut R,
) -> (TourPair, Vec<usize>) {
    let Some((s1, mut remaining)) = random_start(distances.size(), rng) else {
        return (TourPair::default(), Vec::new());
    };

    let mut first = vec![s1];
    let mut second = Vec::new();

    if let Some(s1b) = take(&mut remaining, |c| distances.nearest(s1, c)) {
        first.push(s1b);
        if let Some(s2) = take(&mut remaining, |c| distances.farthest(s1, c)) {
            second.push(s2);
            if let Some(s2b) = take(&mut remaining, |c| distances.nearest(s2, c)) {
                second.push(s2b);
            }
        }
    }

    (TourPair::new(first, second), remaining)
}

/// Grows both cycles by strictly alternating insertions, starting with the
/// first cycle, until no vertex remains.
///
/// `select` sees the active cycle and the remaining vertices and returns the
/// insertion to apply.
pub(super) fn grow_alternating<F>(
    mut pair: TourPair,
    mut remaining: Vec<usize>,
    distances: &DistanceMatrix,
    mut select: F,
) -> Result<TourPair, TourError>
where
    F: FnMut(&[usize], &[usize], &DistanceMatrix) -> Option<Insertion>,
{
    let mut side = Side::First;
    while !remaining.is_empty() {
        let cycle = pair.cycle_mut(side);
        let insertion = select(cycle.as_slice(), &remaining, distances).ok_or(
            TourError::NoInsertionCandidate {
                remaining: remaining.len(),
            },
        )?;

        cycle.insert(insertion.position, insertion.vertex);
        remaining.remove(insertion.candidate);
        trace!(
            side = ?side,
            vertex = insertion.vertex,
            position = insertion.position,
            cost = insertion.cost,
            "inserted vertex"
        );

        side = side.flip();
    }
    Ok(pair)
}

//! Insertion costs and regret scoring.
//!
//! Inserting `v` after position `i` of a cycle `c` of length `m` costs
//!
//! ```text
//! Δ(i, v) = d(c[i], v) + d(v, c[(i+1) mod m]) − d(c[i], c[(i+1) mod m])
//! ```
//!
//! Candidate scans run over vertex lists kept in ascending order and use
//! strict comparisons, so the earliest position and the lowest vertex win ties.

use crate::distance::DistanceMatrix;

/// Closed length of a cycle, including the edge from the last vertex back to
/// the first. An empty cycle costs zero.
///
/// # Examples
///
/// ```
/// use two_tsp::distance::DistanceMatrix;
/// use two_tsp::evaluation::cycle_cost;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 2.0,
///     1.0, 0.0, 1.0,
///     2.0, 1.0, 0.0,
/// ]).expect("3x3");
/// assert_eq!(cycle_cost(&[0, 1, 2], &dm), 4.0);
/// ```
pub fn cycle_cost(cycle: &[usize], distances: &DistanceMatrix) -> f64 {
    let m = cycle.len();
    (0..m)
        .map(|i| distances.get(cycle[i], cycle[(i + 1) % m]))
        .sum()
}

/// Cost of splicing `vertex` between `cycle[i]` and its successor.
///
/// # Panics
///
/// Panics if `i >= cycle.len()`.
#[inline]
pub fn insertion_cost(
    cycle: &[usize],
    i: usize,
    vertex: usize,
    distances: &DistanceMatrix,
) -> f64 {
    let a = cycle[i];
    let b = cycle[(i + 1) % cycle.len()];
    distances.get(a, vertex) + distances.get(vertex, b) - distances.get(a, b)
}

/// A single insertion move: put `vertex` at index `position` of the cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insertion {
    /// Index into the candidate list the vertex was taken from.
    pub candidate: usize,
    /// Vertex to insert.
    pub vertex: usize,
    /// Index the vertex takes in the cycle (one past the edge start).
    pub position: usize,
    /// Increase in cycle length.
    pub cost: f64,
}

/// Finds the globally cheapest `(position, vertex)` pair.
///
/// Positions are scanned in the outer loop and candidates in the inner loop.
/// Returns `None` if the cycle or the candidate list is empty.
pub fn cheapest_insertion(
    cycle: &[usize],
    candidates: &[usize],
    distances: &DistanceMatrix,
) -> Option<Insertion> {
    let mut best: Option<Insertion> = None;
    for i in 0..cycle.len() {
        for (candidate, &v) in candidates.iter().enumerate() {
            let cost = insertion_cost(cycle, i, v, distances);
            if best.is_none_or(|b| cost < b.cost) {
                best = Some(Insertion {
                    candidate,
                    vertex: v,
                    position: i + 1,
                    cost,
                });
            }
        }
    }
    best
}

/// Best and second-best insertion of one vertex into one cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedInsertion {
    /// Vertex being ranked.
    pub vertex: usize,
    /// Index the vertex takes when inserted at its best position.
    pub position: usize,
    /// Lowest insertion cost.
    pub best: f64,
    /// Second-lowest insertion cost, equal to `best` when the cycle has a
    /// single position.
    pub second: f64,
}

impl RankedInsertion {
    /// Plain regret: the penalty of falling back to the second-best position.
    pub fn regret(&self) -> f64 {
        self.second - self.best
    }
}

/// Ranks every position of `cycle` for `vertex`.
///
/// Equal costs resolve to the earliest position. Returns `None` for an empty
/// cycle.
pub fn rank_insertion(
    cycle: &[usize],
    vertex: usize,
    distances: &DistanceMatrix,
) -> Option<RankedInsertion> {
    if cycle.is_empty() {
        return None;
    }

    let mut best = f64::INFINITY;
    let mut second = f64::INFINITY;
    let mut position = 0;
    for i in 0..cycle.len() {
        let cost = insertion_cost(cycle, i, vertex, distances);
        if cost < best {
            second = best;
            best = cost;
            position = i + 1;
        } else if cost < second {
            second = cost;
        }
    }
    if cycle.len() == 1 {
        second = best;
    }

    Some(RankedInsertion {
        vertex,
        position,
        best,
        second,
    })
}

/// How a ranked insertion is turned into a selection score. Higher wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegretScore {
    /// `second − best`.
    Pure,
    /// `α·(second − best) − (1 − α)·best`.
    Weighted(f64),
}

impl RegretScore {
    /// Builds the score from the `weighted` switch and regret weight.
    pub fn new(weighted: bool, alpha: f64) -> Self {
        if weighted {
            RegretScore::Weighted(alpha)
        } else {
            RegretScore::Pure
        }
    }

    /// Scores one ranked insertion.
    pub fn score(&self, ranked: &RankedInsertion) -> f64 {
        match *self {
            RegretScore::Pure => ranked.regret(),
            RegretScore::Weighted(alpha) => alpha * ranked.regret() - (1.0 - alpha) * ranked.best,
        }
    }
}

/// Picks the candidate with the highest regret score and its best position.
///
/// Returns `None` if the cycle or the candidate list is empty.
pub fn max_regret_insertion(
    cycle: &[usize],
    candidates: &[usize],
    distances: &DistanceMatrix,
    score: RegretScore,
) -> Option<Insertion> {
    let mut best: Option<(f64, Insertion)> = None;
    for (candidate, &v) in candidates.iter().enumerate() {
        let Some(ranked) = rank_insertion(cycle, v, distances) else {
            continue;
        };
        let s = score.score(&ranked);
        if best.is_none_or(|(bs, _)| s > bs) {
            best = Some((
                s,
                Insertion {
                    candidate,
                    vertex: v,
                    position: ranked.position,
                    cost: ranked.best,
                },
            ));
        }
    }
    best.map(|(_, insertion)| insertion)
}

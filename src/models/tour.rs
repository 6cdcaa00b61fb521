//! Cycle and tour-pair types.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::TourError;
use crate::evaluation::cycle_cost;

/// An ordered, duplicate-free vertex sequence. The last vertex connects back
/// to the first.
pub type Cycle = Vec<usize>;

/// Which of the two cycles an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The first cycle.
    First,
    /// The second cycle.
    Second,
}

impl Side {
    /// Returns the other side.
    pub fn flip(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Two vertex-disjoint cycles that together cover every vertex.
///
/// # Examples
///
/// ```
/// use two_tsp::models::TourPair;
///
/// let pair = TourPair::new(vec![0, 2], vec![1, 3]);
/// assert_eq!(pair.num_vertices(), 4);
/// assert!(pair.validate(4).is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourPair {
    first: Cycle,
    second: Cycle,
}

impl TourPair {
    /// Creates a tour pair from two cycles.
    pub fn new(first: Cycle, second: Cycle) -> Self {
        Self { first, second }
    }

    /// Returns the first cycle.
    pub fn first(&self) -> &[usize] {
        &self.first
    }

    /// Returns the second cycle.
    pub fn second(&self) -> &[usize] {
        &self.second
    }

    /// Returns the cycle on the given side.
    pub fn cycle(&self, side: Side) -> &[usize] {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    /// Returns a mutable reference to the cycle on the given side.
    pub fn cycle_mut(&mut self, side: Side) -> &mut Cycle {
        match side {
            Side::First => &mut self.first,
            Side::Second => &mut self.second,
        }
    }

    /// The side holding fewer vertices. Equal lengths resolve to the first cycle.
    pub fn shorter(&self) -> Side {
        if self.second.len() < self.first.len() {
            Side::Second
        } else {
            Side::First
        }
    }

    /// Consumes the pair, returning `(first, second)`.
    pub fn into_cycles(self) -> (Cycle, Cycle) {
        (self.first, self.second)
    }

    /// Total number of vertices across both cycles.
    pub fn num_vertices(&self) -> usize {
        self.first.len() + self.second.len()
    }

    /// Sum of both closed cycle lengths.
    pub fn total_cost(&self, distances: &DistanceMatrix) -> f64 {
        cycle_cost(&self.first, distances) + cycle_cost(&self.second, distances)
    }

    /// Checks that the cycles partition `{0, …, n-1}`.
    pub fn validate(&self, n: usize) -> Result<(), TourError> {
        let mut seen = vec![false; n];
        mark_vertices(self.first.iter().chain(&self.second).copied(), &mut seen)?;
        match seen.iter().position(|&s| !s) {
            Some(missing) => Err(TourError::MissingVertex(missing)),
            None => Ok(()),
        }
    }
}

impl From<(Cycle, Cycle)> for TourPair {
    fn from((first, second): (Cycle, Cycle)) -> Self {
        Self::new(first, second)
    }
}

/// Marks each vertex in `seen`, failing on out-of-range or repeated vertices.
pub(crate) fn mark_vertices(
    vertices: impl IntoIterator<Item = usize>,
    seen: &mut [bool],
) -> Result<(), TourError> {
    let size = seen.len();
    for v in vertices {
        match seen.get_mut(v) {
            None => return Err(TourError::VertexOutOfRange { vertex: v, size }),
            Some(true) => return Err(TourError::DuplicateVertex(v)),
            Some(slot) => *slot = true,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_partition() {
        let pair = TourPair::new(vec![3, 1], vec![0, 2, 4]);
        assert!(pair.validate(5).is_ok());
    }

    #[test]
    fn test_validate_errors() {
        let dup = TourPair::new(vec![0, 1], vec![1, 2]);
        assert_eq!(dup.validate(3), Err(TourError::DuplicateVertex(1)));

        let missing = TourPair::new(vec![0], vec![2]);
        assert_eq!(missing.validate(3), Err(TourError::MissingVertex(1)));

        let out = TourPair::new(vec![0, 5], vec![]);
        assert_eq!(
            out.validate(2),
            Err(TourError::VertexOutOfRange { vertex: 5, size: 2 })
        );
    }

    #[test]
    fn test_empty_pair() {
        let pair = TourPair::default();
        assert_eq!(pair.num_vertices(), 0);
        assert!(pair.validate(0).is_ok());
        assert_eq!(pair.into_cycles(), (vec![], vec![]));
    }

    #[test]
    fn test_shorter_prefers_first_on_tie() {
        assert_eq!(TourPair::new(vec![0, 1], vec![2, 3]).shorter(), Side::First);
        assert_eq!(TourPair::new(vec![0, 1], vec![2]).shorter(), Side::Second);
        assert_eq!(TourPair::new(vec![0], vec![1, 2]).shorter(), Side::First);
        assert_eq!(TourPair::new(vec![], vec![]).shorter(), Side::First);
    }

    #[test]
    fn test_total_cost() {
        let dm = DistanceMatrix::from_rows(&[
            vec![0.0, 1.0, 2.0, 3.0],
            vec![1.0, 0.0, 1.0, 2.0],
            vec![2.0, 1.0, 0.0, 1.0],
            vec![3.0, 2.0, 1.0, 0.0],
        ])
        .expect("square");
        let pair = TourPair::new(vec![0, 1], vec![2, 3]);
        // 0→1→0 = 2, 2→3→2 = 2
        assert!((pair.total_cost(&dm) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_cycle_access_by_side() {
        let mut pair = TourPair::new(vec![0], vec![1]);
        pair.cycle_mut(Side::Second).push(2);
        assert_eq!(pair.cycle(Side::Second), &[1, 2]);
        assert_eq!(pair.cycle(Side::First), &[0]);
        assert_eq!(Side::First.flip(), Side::Second);
    }
}

//! Dense distance matrix.

use serde::{Deserialize, Serialize};

use crate::error::TourError;

/// A dense n×n distance matrix stored in row-major order.
///
/// Distances are expected to be non-negative and finite. The matrix does not
/// need to be symmetric: `get(i, j)` is the cost of travelling from `i` to `j`.
///
/// # Examples
///
/// ```
/// use two_tsp::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 3.0, 4.0],
///     vec![3.0, 0.0, 5.0],
///     vec![4.0, 5.0, 0.0],
/// ])
/// .expect("square");
/// assert_eq!(dm.get(1, 2), 5.0);
/// assert_eq!(dm.size(), 3);
/// ```
///
/// Deserialized payloads go through the same shape check as
/// [`from_data`](Self::from_data) and fail with [`TourError::MatrixShape`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

/// Unchecked wire form of [`DistanceMatrix`].
#[derive(Deserialize)]
struct RawMatrix {
    data: Vec<f64>,
    size: usize,
}

impl TryFrom<RawMatrix> for DistanceMatrix {
    type Error = TourError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        let (size, len) = (raw.size, raw.data.len());
        DistanceMatrix::from_data(size, raw.data).ok_or(TourError::MatrixShape { size, len })
    }
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from an explicit n×n grid in row-major order.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// Returns `None` unless every row has exactly `rows.len()` entries.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        let data = rows.iter().flatten().copied().collect();
        Some(Self { data, size })
    }

    /// Returns the distance from vertex `from` to vertex `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from vertex `from` to vertex `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of vertices in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix has no vertices.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the position in `candidates` of the vertex nearest to `from`.
    ///
    /// Ties go to the earliest candidate. Returns `None` if `candidates` is empty.
    pub fn nearest(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (pos, &v) in candidates.iter().enumerate() {
            let d = self.get(from, v);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((pos, d));
            }
        }
        best.map(|(pos, _)| pos)
    }

    /// Returns the position in `candidates` of the vertex farthest from `from`.
    ///
    /// Ties go to the earliest candidate. Returns `None` if `candidates` is empty.
    pub fn farthest(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (pos, &v) in candidates.iter().enumerate() {
            let d = self.get(from, v);
            if best.is_none_or(|(_, bd)| d > bd) {
                best = Some((pos, d));
            }
        }
        best.map(|(pos, _)| pos)
    }
}

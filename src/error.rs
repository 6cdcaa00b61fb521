//! Error types for construction and repair.

use thiserror::Error;

/// Errors raised by construction and repair operations.
///
/// `NoInsertionCandidate` signals a broken invariant and is never retried.
/// Degenerate inputs (no vertices, a single vertex, an empty target cycle
/// during repair) are handled as regular cases and do not produce errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TourError {
    /// Vertices remain but the active cycle offers no insertion position.
    #[error("no insertion candidate found with {remaining} vertices remaining")]
    NoInsertionCandidate {
        /// Number of vertices still waiting for insertion.
        remaining: usize,
    },

    /// Regret weight is NaN or infinite.
    #[error("regret weight must be finite, got {0}")]
    InvalidAlpha(f64),

    /// A vertex index does not exist in the distance matrix.
    #[error("vertex {vertex} is out of range for a matrix of size {size}")]
    VertexOutOfRange {
        /// Offending vertex.
        vertex: usize,
        /// Matrix dimension.
        size: usize,
    },

    /// A vertex occurs more than once across the cycles and the batch.
    #[error("vertex {0} appears more than once")]
    DuplicateVertex(usize),

    /// Matrix data does not hold `size * size` entries.
    #[error("matrix of size {size} needs {} entries, got {len}", size * size)]
    MatrixShape {
        /// Declared dimension.
        size: usize,
        /// Number of entries supplied.
        len: usize,
    },

    /// A vertex is in neither cycle.
    #[error("vertex {0} is not covered by either cycle")]
    MissingVertex(usize),
}

/// Checks that a regret weight is usable. Any finite value is accepted.
pub(crate) fn check_alpha(alpha: f64) -> Result<(), TourError> {
    if alpha.is_finite() {
        Ok(())
    } else {
        Err(TourError::InvalidAlpha(alpha))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_alpha() {
        assert!(check_alpha(0.0).is_ok());
        assert!(check_alpha(0.75).is_ok());
        assert!(check_alpha(1.0).is_ok());
        assert!(check_alpha(1.5).is_ok());
        assert!(check_alpha(-0.1).is_ok());
        assert!(check_alpha(f64::NAN).is_err());
        assert_eq!(
            check_alpha(f64::INFINITY),
            Err(TourError::InvalidAlpha(f64::INFINITY))
        );
    }

    #[test]
    fn test_display() {
        let err = TourError::VertexOutOfRange { vertex: 7, size: 5 };
        assert_eq!(
            err.to_string(),
            "vertex 7 is out of range for a matrix of size 5"
        );
        let err = TourError::NoInsertionCandidate { remaining: 3 };
        assert!(err.to_string().contains("3 vertices"));
        let err = TourError::MatrixShape { size: 3, len: 4 };
        assert_eq!(err.to_string(), "matrix of size 3 needs 9 entries, got 4");
    }
}

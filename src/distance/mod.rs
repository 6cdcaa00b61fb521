//! Distance matrix consumed by every construction and repair strategy.
//!
//! How the matrix is filled (coordinates, instance files) is up to the caller.

mod matrix;

pub use matrix::DistanceMatrix;

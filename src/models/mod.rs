//! Domain model types for the two-cycle problem.
//!
//! Vertices are plain `usize` indices into the distance matrix. A solution is
//! a [`TourPair`] of two disjoint [`Cycle`]s.

mod tour;

pub(crate) use tour::mark_vertices;
pub use tour::{Cycle, Side, TourPair};

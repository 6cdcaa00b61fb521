//! # two-tsp
//!
//! Starting solutions for the two-cycle Traveling Salesman Problem: split
//! `n` vertices into two vertex-disjoint cycles that together visit every
//! vertex exactly once.
//!
//! ## Modules
//!
//! - [`distance`] — Dense distance matrix
//! - [`models`] — Cycle and tour-pair types
//! - [`evaluation`] — Cycle cost, insertion cost, regret scoring
//! - [`constructive`] — Random split, nearest neighbor, greedy cycle, weighted regret
//! - [`repair`] — Weighted regret reinsertion of removed vertices
//! - [`config`] — TOML-backed strategy selection
//! - [`random`] — Seeded generators
//!
//! ## Example
//!
//! ```
//! use two_tsp::constructive::construct_greedy_cycle;
//! use two_tsp::distance::DistanceMatrix;
//! use two_tsp::random::create_rng;
//! use two_tsp::repair::repair_weighted_regret;
//!
//! let mut dm = DistanceMatrix::new(8);
//! for i in 0..8 {
//!     for j in 0..8 {
//!         dm.set(i, j, (i as f64 - j as f64).abs());
//!     }
//! }
//!
//! let pair = construct_greedy_cycle(&dm, &mut create_rng(42)).unwrap();
//! let (mut first, second) = pair.into_cycles();
//!
//! // An external destroy step removes some vertices...
//! let removed = first.split_off(2);
//!
//! // ...and the repair puts them back.
//! let repaired = repair_weighted_regret(first, second, removed, &dm, 0.75).unwrap();
//! assert!(repaired.validate(8).is_ok());
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod random;
pub mod repair;

pub use error::TourError;

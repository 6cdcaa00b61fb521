//! Construction configuration.
//!
//! Selects the construction strategy and its parameters from TOML so an outer
//! optimizer can switch heuristics without code changes.
//!
//! # Examples
//!
//! ```
//! use two_tsp::config::{ConstructionConfig, Strategy};
//!
//! let config = ConstructionConfig::from_toml_str(r#"
//!     strategy = "weighted_regret"
//!     alpha = 0.5
//!     random_seed = 42
//! "#).unwrap();
//!
//! assert_eq!(config.strategy, Strategy::WeightedRegret);
//! assert!(config.weighted);
//! assert_eq!(config.random_seed, Some(42));
//! ```

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constructive::{
    construct_greedy_cycle, construct_nearest_neighbor, construct_random,
    construct_weighted_regret, DEFAULT_ALPHA,
};
use crate::distance::DistanceMatrix;
use crate::error::{check_alpha, TourError};
use crate::models::TourPair;
use crate::random::{create_rng, entropy_rng};
use crate::repair::RegretRepair;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Construction heuristic to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Uniform random split.
    Random,
    /// Alternating nearest-neighbor growth.
    NearestNeighbor,
    /// Alternating cheapest insertion.
    GreedyCycle,
    /// Alternating regret insertion.
    #[default]
    WeightedRegret,
}

impl Strategy {
    /// Name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::NearestNeighbor => "nearest_neighbor",
            Strategy::GreedyCycle => "greedy_cycle",
            Strategy::WeightedRegret => "weighted_regret",
        }
    }
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

fn default_weighted() -> bool {
    true
}

/// Construction and repair settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConstructionConfig {
    /// Heuristic used by [`construct`](Self::construct).
    #[serde(default)]
    pub strategy: Strategy,

    /// Regret weight for weighted regret construction and repair.
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Whether regret construction adds the greedy-cost term.
    #[serde(default = "default_weighted")]
    pub weighted: bool,

    /// Random seed for reproducible results. Seeds from the OS when absent.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for ConstructionConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            alpha: DEFAULT_ALPHA,
            weighted: true,
            random_seed: None,
        }
    }
}

impl ConstructionConfig {
    /// Creates a default configuration using the given strategy.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Loads and validates configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes this configuration to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Checks that `alpha` is finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_alpha(self.alpha).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the regret weight.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Runs the configured strategy with a generator built from `random_seed`.
    pub fn construct(&self, distances: &DistanceMatrix) -> Result<TourPair, TourError> {
        match self.random_seed {
            Some(seed) => self.construct_with_rng(distances, &mut create_rng(seed)),
            None => self.construct_with_rng(distances, &mut entropy_rng()),
        }
    }

    /// Runs the configured strategy with a caller-supplied generator.
    pub fn construct_with_rng<R: Rng>(
        &self,
        distances: &DistanceMatrix,
        rng: &mut R,
    ) -> Result<TourPair, TourError> {
        match self.strategy {
            Strategy::Random => Ok(construct_random(distances.size(), rng)),
            Strategy::NearestNeighbor => Ok(construct_nearest_neighbor(distances, rng)),
            Strategy::GreedyCycle => construct_greedy_cycle(distances, rng),
            Strategy::WeightedRegret => {
                construct_weighted_regret(distances, self.weighted, self.alpha, rng)
            }
        }
    }

    /// Builds the repair operator with this configuration's regret weight.
    pub fn repair_operator(&self) -> RegretRepair {
        RegretRepair::new(self.alpha)
    }
}

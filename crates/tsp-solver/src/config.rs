use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tsp_core::VisitedSet;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Which exact algorithm runs a solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Held-Karp for small N, branch-and-bound above that.
    #[default]
    Auto,
    BranchAndBound,
    HeldKarp,
    HeldKarpMemoized,
    BruteForce,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Auto => "auto",
            Strategy::BranchAndBound => "branch_and_bound",
            Strategy::HeldKarp => "held_karp",
            Strategy::HeldKarpMemoized => "held_karp_memoized",
            Strategy::BruteForce => "brute_force",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "auto" => Ok(Strategy::Auto),
            "branch_and_bound" | "bnb" => Ok(Strategy::BranchAndBound),
            "held_karp" | "dp" => Ok(Strategy::HeldKarp),
            "held_karp_memoized" => Ok(Strategy::HeldKarpMemoized),
            "brute_force" => Ok(Strategy::BruteForce),
            other => Err(format!(
                "unknown strategy `{other}`; expected auto, branch_and_bound, held_karp, held_karp_memoized or brute_force"
            )),
        }
    }
}

/// Solver configuration, loadable from JSON. Missing fields take their defaults.
///
/// ```
/// use tsp_solver::{SolverConfig, Strategy};
///
/// let config = SolverConfig::from_json_str(r#"{ "strategy": "held_karp", "threads": 4 }"#).unwrap();
/// assert_eq!(config.strategy, Strategy::HeldKarp);
/// assert_eq!(config.held_karp_max_cities, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SolverConfig {
    pub strategy: Strategy,
    /// Largest N the Held-Karp tables may be built for.
    pub held_karp_max_cities: usize,
    /// Largest N for which `auto` picks Held-Karp.
    pub auto_held_karp_up_to: usize,
    /// Branch-and-bound workers; 1 runs the sequential search.
    pub threads: usize,
    /// Largest N the brute-force enumerator accepts.
    pub brute_force_max_cities: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            held_karp_max_cities: tsp_held_karp::DEFAULT_MAX_CITIES,
            auto_held_karp_up_to: 16,
            threads: 1,
            brute_force_max_cities: tsp_brute_force::DEFAULT_MAX_CITIES,
        }
    }
}

impl SolverConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == 0 {
            return Err(ConfigError::Invalid("threads must be at least 1".into()));
        }
        if self.held_karp_max_cities > tsp_held_karp::MAX_SUPPORTED_CITIES {
            return Err(ConfigError::Invalid(format!(
                "held_karp_max_cities {} is above the supported maximum of {}",
                self.held_karp_max_cities,
                tsp_held_karp::MAX_SUPPORTED_CITIES
            )));
        }
        if self.brute_force_max_cities >= VisitedSet::MAX_CITIES {
            return Err(ConfigError::Invalid(format!(
                "brute_force_max_cities {} is not a sensible limit",
                self.brute_force_max_cities
            )));
        }
        Ok(())
    }
}

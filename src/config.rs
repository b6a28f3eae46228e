//! Configuration options for equity queries.
//!
//! This module provides the configuration struct that controls how the
//! equity engine runs: exact enumeration or Monte Carlo sampling, the
//! number of trials, the random seed and the degree of parallelism.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default number of Monte Carlo trials.
pub const DEFAULT_ITERATIONS: u64 = 100_000;

/// Default number of Monte Carlo trials per seeded chunk.
pub const DEFAULT_CHUNK_SIZE: u64 = 4_096;

/// Configuration for the equity engine.
///
/// # Example
/// ```
/// use poker_equity::EquityConfig;
///
/// let config = EquityConfig::monte_carlo(20_000).with_seed(42);
/// assert!(config.use_monte_carlo);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquityConfig {
    /// Sample random completions instead of enumerating all of them.
    pub use_monte_carlo: bool,

    /// Number of Monte Carlo trials. Ignored in exact mode.
    pub iterations: u64,

    /// Random seed for reproducibility.
    ///
    /// If set, identical inputs produce identical Monte Carlo results
    /// regardless of thread count. If `None`, a random seed is drawn per
    /// query.
    pub seed: Option<u64>,

    /// Number of worker threads.
    ///
    /// Set to `None` to use the global rayon pool (all available cores).
    pub num_threads: Option<usize>,

    /// Monte Carlo trials per chunk. Each chunk owns a generator seeded
    /// from the base seed and its chunk index.
    pub chunk_size: u64,
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            use_monte_carlo: false,
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            num_threads: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl EquityConfig {
    /// Create a new EquityConfig with default settings (exact mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact enumeration of every board completion.
    pub fn exact() -> Self {
        Self::default()
    }

    /// Monte Carlo sampling with the given number of trials.
    pub fn monte_carlo(iterations: u64) -> Self {
        Self {
            use_monte_carlo: true,
            iterations,
            ..Default::default()
        }
    }

    /// Builder method: set whether to sample.
    pub fn with_monte_carlo(mut self, enable: bool) -> Self {
        self.use_monte_carlo = enable;
        self
    }

    /// Builder method: set number of trials.
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Builder method: set number of threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = Some(threads);
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set trials per chunk.
    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.use_monte_carlo && self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }

        if self.num_threads == Some(0) {
            return Err(ConfigError::ZeroThreads);
        }

        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EquityConfig::default();
        assert!(!config.use_monte_carlo);
        assert_eq!(config.iterations, DEFAULT_ITERATIONS);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = EquityConfig::new()
            .with_monte_carlo(true)
            .with_iterations(500)
            .with_threads(2)
            .with_seed(9)
            .with_chunk_size(64);
        assert!(config.use_monte_carlo);
        assert_eq!(config.iterations, 500);
        assert_eq!(config.num_threads, Some(2));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.chunk_size, 64);
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            EquityConfig::monte_carlo(0).validate(),
            Err(ConfigError::ZeroIterations)
        );
        // Exact mode ignores iterations
        assert!(EquityConfig::exact().with_iterations(0).validate().is_ok());
        assert_eq!(
            EquityConfig::default().with_threads(0).validate(),
            Err(ConfigError::ZeroThreads)
        );
        assert_eq!(
            EquityConfig::default().with_chunk_size(0).validate(),
            Err(ConfigError::ZeroChunkSize)
        );
    }

    #[test]
    fn test_json_round_trip_with_missing_fields() {
        let config: EquityConfig =
            serde_json::from_str(r#"{"use_monte_carlo": true, "seed": 7}"#).unwrap();
        assert!(config.use_monte_carlo);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.iterations, DEFAULT_ITERATIONS);

        let json = serde_json::to_string(&config).unwrap();
        let back: EquityConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}

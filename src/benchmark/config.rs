//! Configuration for benchmark runs

use super::error::{BenchmarkError, Result};
use std::path::PathBuf;

/// Matrix sides swept by default, ascending
pub const DEFAULT_SIZES: [usize; 8] = [4, 8, 16, 32, 64, 128, 256, 512];
/// Target duration of one adaptive timing window, in milliseconds
pub const DEFAULT_TARGET_MS: u64 = 100;
/// Default CSV report path
pub const DEFAULT_OUTPUT: &str = "benchmark_results.csv";

/// Configuration for a benchmark run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// CSV report path
    pub output: PathBuf,
    /// Matrix sides, benchmarked in ascending order
    pub sizes: Vec<usize>,
    /// Adaptive timing target in milliseconds
    pub target_ms: u64,
    /// Generator seed (None = seeded from OS entropy)
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            sizes: DEFAULT_SIZES.to_vec(),
            target_ms: DEFAULT_TARGET_MS,
            seed: None,
        }
    }
}

impl BenchmarkConfig {
    pub fn new(output: impl Into<PathBuf>, sizes: Vec<usize>, target_ms: u64, seed: Option<u64>) -> Self {
        Self {
            output: output.into(),
            sizes,
            target_ms,
            seed,
        }
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let defaults = Self::default();

        let output = matches
            .get_one::<PathBuf>("output")
            .cloned()
            .unwrap_or(defaults.output);

        let sizes = matches
            .get_many::<usize>("sizes")
            .map(|values| values.copied().collect())
            .unwrap_or(defaults.sizes);

        let target_ms = matches
            .get_one::<u64>("target-ms")
            .copied()
            .unwrap_or(defaults.target_ms);

        let seed = matches.get_one::<u64>("seed").copied();

        Self::new(output, sizes, target_ms, seed)
    }

    /// Check the configuration and return the sizes in ascending order
    pub fn validated_sizes(&self) -> Result<Vec<usize>> {
        if self.sizes.is_empty() {
            return Err(BenchmarkError::InvalidConfig(
                "at least one matrix size is required".to_string(),
            ));
        }
        // Strassen runs on every size and only halves powers of two cleanly
        if let Some(bad) = self.sizes.iter().find(|n| !n.is_power_of_two()) {
            return Err(BenchmarkError::InvalidConfig(format!(
                "matrix size {} is not a power of two",
                bad
            )));
        }
        if self.target_ms == 0 {
            return Err(BenchmarkError::InvalidConfig(
                "target duration must be positive".to_string(),
            ));
        }

        let mut sizes = self.sizes.clone();
        sizes.sort_unstable();
        sizes.dedup();
        Ok(sizes)
    }
}

//! Result types produced by the benchmark harness

use crate::algorithms::Algorithm;
use crate::matrix::MatrixShape;
use crate::scalar::ScalarKind;
use crate::stats::OperationStats;
use std::fmt;

/// Fixed CSV header of the benchmark report
pub const CSV_HEADER: &str =
    "DataType Type,Size,Algorithm,Additions,Multiplications,Time(ms),Reps,Memory(KB),Error";

/// One measured (kind, shape, size, algorithm) combination
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRow {
    pub kind: ScalarKind,
    pub shape: MatrixShape,
    pub size: usize,
    pub algorithm: Algorithm,
    /// Counts of exactly one logical invocation
    pub stats: OperationStats,
    pub average_ms: f64,
    pub repetitions: usize,
    pub memory_kb: f64,
    pub error: f64,
}

impl BenchmarkRow {
    /// `DataType Type` column, e.g. `Int Random`
    pub fn category(&self) -> String {
        format!("{} {}", self.kind.label(), self.shape.label())
    }
}

/// Renders the row as one CSV line (no trailing newline)
impl fmt::Display for BenchmarkRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {},{},{},{},{},{},{},{},{}",
            self.kind.label(),
            self.shape.label(),
            self.size,
            self.algorithm.name(),
            self.stats.additions,
            self.stats.multiplications,
            self.average_ms,
            self.repetitions,
            self.memory_kb,
            self.error
        )
    }
}

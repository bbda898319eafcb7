//! Error types for benchmark runs

use crate::matrix::MatrixError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a benchmark run
#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// The CSV output file could not be created
    #[error("Failed to open {} for writing: {source}", path.display())]
    OutputUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing a report line failed
    #[error("Failed to write benchmark output: {0}")]
    Write(#[from] std::io::Error),

    /// An algorithm rejected its operands
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// The run configuration cannot produce a benchmark
    #[error("Invalid benchmark configuration: {0}")]
    InvalidConfig(String),
}

/// Type alias for Result with BenchmarkError
pub type Result<T> = std::result::Result<T, BenchmarkError>;

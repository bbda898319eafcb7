//! Empirical comparison of dense matrix multiplication algorithms
//!
//! Naive, Strassen, Winograd and an optional optimized gemm backend are run
//! over integer, real and complex matrices of random, symmetric and identity
//! shape. Each combination reports operation counts, adaptive timing, an
//! analytic memory estimate and the error against a naive reference.

pub mod algorithms;
pub mod args;
pub mod benchmark;
pub mod matrix;
pub mod reporters;
pub mod scalar;
pub mod stats;

pub use algorithms::Algorithm;
pub use args::parse_args;
pub use matrix::{Matrix, MatrixError, MatrixShape};
pub use scalar::{Scalar, ScalarKind};
pub use stats::OperationStats;

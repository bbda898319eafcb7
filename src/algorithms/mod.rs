//! Matrix multiplication strategies
//!
//! All strategies compute `C(i, j) = Σ_k A(i, k) · B(k, j)` and record the
//! elementary additions and multiplications they perform into the
//! [`OperationStats`] passed by the caller:
//!
//! - [`naive_multiply`]: schoolbook triple loop, the reference result
//! - [`strassen_multiply`]: seven-product recursive divide-and-conquer
//! - [`winograd_multiply`]: row/column factor precomputation, fewer multiplications
//! - [`blas_multiply`]: optimized gemm backend (feature `blas`), naive otherwise

pub(crate) mod backend;
mod naive;
mod strassen;
mod winograd;

pub use backend::{backend_available, blas_multiply};
pub use naive::naive_multiply;
pub use strassen::{strassen_multiply, STRASSEN_BASE_SIZE};
pub use winograd::winograd_multiply;

use crate::matrix::{Matrix, Result};
use crate::scalar::Scalar;
use crate::stats::OperationStats;
use std::fmt;

/// Multiplication strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Naive,
    Strassen,
    Winograd,
    Blas,
}

impl Algorithm {
    /// Every strategy, in report order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Naive,
        Algorithm::Strassen,
        Algorithm::Winograd,
        Algorithm::Blas,
    ];

    /// Strategies the benchmark runs: BLAS only when the backend is compiled in
    pub fn available() -> Vec<Algorithm> {
        Self::ALL
            .into_iter()
            .filter(|algorithm| *algorithm != Algorithm::Blas || backend_available())
            .collect()
    }

    /// Name used in the report's `Algorithm` column
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Naive => "Naive",
            Algorithm::Strassen => "Strassen",
            Algorithm::Winograd => "Winograd",
            Algorithm::Blas => "BLAS",
        }
    }

    /// Naive and BLAS are the ground truth, so their error is 0 by convention
    pub fn is_reference(&self) -> bool {
        matches!(self, Algorithm::Naive | Algorithm::Blas)
    }

    /// Run this strategy on `a · b`
    pub fn multiply<T: Scalar>(
        &self,
        a: &Matrix<T>,
        b: &Matrix<T>,
        stats: &mut OperationStats,
    ) -> Result<Matrix<T>> {
        match self {
            Algorithm::Naive => naive_multiply(a, b, stats),
            Algorithm::Strassen => strassen_multiply(a, b, stats),
            Algorithm::Winograd => winograd_multiply(a, b, stats),
            Algorithm::Blas => blas_multiply(a, b, stats),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

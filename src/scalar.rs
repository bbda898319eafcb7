//! Scalar kinds the benchmark sweeps over
//!
//! The benchmark compares algorithms on three element types:
//! - **Integer**: `i32`, drawn from 0..=9
//! - **Real**: `f64`, drawn from -10.0..10.0
//! - **Complex**: [`Complex64`], both parts drawn from -10.0..10.0
//!
//! The [`Scalar`] trait carries everything the matrix model and the
//! algorithms need from an element type, including the optional
//! optimized-backend capability ([`Scalar::backend_multiply`]).

use crate::matrix::Matrix;
use num_complex::Complex64;
use num_traits::{One, Zero};
use rand::Rng;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Lower bound of the uniform range used for real and complex draws
pub const REAL_RANGE_MIN: f64 = -10.0;
/// Upper bound (exclusive) of the uniform range used for real and complex draws
pub const REAL_RANGE_MAX: f64 = 10.0;
/// Inclusive upper bound of integer draws (lower bound is 0)
pub const INTEGER_RANGE_MAX: i32 = 9;

/// Element type family of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Integer,
    Real,
    Complex,
}

impl ScalarKind {
    /// All kinds in benchmark order
    pub const ALL: [ScalarKind; 3] = [ScalarKind::Integer, ScalarKind::Real, ScalarKind::Complex];

    /// Prefix used in the report's `DataType Type` column
    pub fn label(&self) -> &'static str {
        match self {
            ScalarKind::Integer => "Int",
            ScalarKind::Real => "Double",
            ScalarKind::Complex => "Complex",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Numeric element of a [`Matrix`]
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + Send
    + Sync
    + 'static
{
    const KIND: ScalarKind;

    /// Draw one value from the kind's fixed generator range
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Absolute difference `|self - other|` as a real number
    fn distance(self, other: Self) -> f64;

    /// Multiply through an optimized backend, if one is available for this kind.
    ///
    /// Shapes are validated by the caller. `None` means the kind has no
    /// backend mapping (or the backend is not compiled in) and the caller
    /// falls back to the naive algorithm.
    fn backend_multiply(_a: &Matrix<Self>, _b: &Matrix<Self>) -> Option<Matrix<Self>> {
        None
    }
}

impl Scalar for i32 {
    const KIND: ScalarKind = ScalarKind::Integer;

    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.random_range(0..=INTEGER_RANGE_MAX)
    }

    fn distance(self, other: Self) -> f64 {
        (i64::from(self) - i64::from(other)).abs() as f64
    }

    #[cfg(feature = "blas")]
    fn backend_multiply(a: &Matrix<Self>, b: &Matrix<Self>) -> Option<Matrix<Self>> {
        Some(crate::algorithms::backend::gemm_i32(a, b))
    }
}

impl Scalar for f64 {
    const KIND: ScalarKind = ScalarKind::Real;

    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.random_range(REAL_RANGE_MIN..REAL_RANGE_MAX)
    }

    fn distance(self, other: Self) -> f64 {
        (self - other).abs()
    }

    #[cfg(feature = "blas")]
    fn backend_multiply(a: &Matrix<Self>, b: &Matrix<Self>) -> Option<Matrix<Self>> {
        Some(crate::algorithms::backend::gemm_f64(a, b))
    }
}

impl Scalar for Complex64 {
    const KIND: ScalarKind = ScalarKind::Complex;

    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let re = rng.random_range(REAL_RANGE_MIN..REAL_RANGE_MAX);
        let im = rng.random_range(REAL_RANGE_MIN..REAL_RANGE_MAX);
        Complex64::new(re, im)
    }

    fn distance(self, other: Self) -> f64 {
        (self - other).norm()
    }

    #[cfg(feature = "blas")]
    fn backend_multiply(a: &Matrix<Self>, b: &Matrix<Self>) -> Option<Matrix<Self>> {
        Some(crate::algorithms::backend::gemm_c64(a, b))
    }
}

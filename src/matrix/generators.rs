//! Matrix generators for the benchmark's shape categories

use super::Matrix;
use crate::scalar::Scalar;
use rand::Rng;
use std::fmt;

/// Shape category of the benchmark's input matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixShape {
    /// Independent uniform draws per element
    Random,
    /// One draw per unordered index pair, mirrored across the diagonal
    Symmetric,
    /// Multiplicative identity
    Identity,
}

impl MatrixShape {
    /// All shapes in benchmark order
    pub const ALL: [MatrixShape; 3] = [
        MatrixShape::Random,
        MatrixShape::Symmetric,
        MatrixShape::Identity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MatrixShape::Random => "Random",
            MatrixShape::Symmetric => "Symmetric",
            MatrixShape::Identity => "Identity",
        }
    }
}

impl fmt::Display for MatrixShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<T: Scalar> Matrix<T> {
    /// `rows x cols` matrix of independent draws from the kind's range
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let data = (0..rows * cols).map(|_| T::sample(rng)).collect();
        Self::from_parts(rows, cols, data)
    }

    /// `n x n` matrix with `M(i, j) == M(j, i)`
    pub fn symmetric<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut matrix = Self::new(n, n);
        for i in 0..n {
            for j in i..n {
                let value = T::sample(rng);
                matrix.set(i, j, value);
                matrix.set(j, i, value);
            }
        }
        matrix
    }

    /// `n x n` matrix of the requested shape category
    pub fn generate<R: Rng + ?Sized>(shape: MatrixShape, n: usize, rng: &mut R) -> Self {
        match shape {
            MatrixShape::Random => Self::random(n, n, rng),
            MatrixShape::Symmetric => Self::symmetric(n, rng),
            MatrixShape::Identity => Self::identity(n),
        }
    }
}

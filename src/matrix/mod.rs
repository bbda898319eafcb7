//! Dense row-major matrices
//!
//! Provides:
//! - [`Matrix`], a fixed-shape container over any [`Scalar`]
//! - Counted elementwise addition and subtraction
//! - Quadrant split/join used by Strassen
//! - Generators for the benchmark's shape categories ([`MatrixShape`])
//!
//! Every arithmetic and quadrant operation produces or fills an independently
//! owned matrix. Split and join always copy, so the memory and timing figures
//! the benchmark reports include the copy cost.

mod error;
mod generators;

pub use error::{MatrixError, Result};
pub use generators::MatrixShape;

use crate::scalar::Scalar;
use crate::stats::OperationStats;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense matrix stored as a flat row-major buffer
///
/// Invariant: `data.len() == rows * cols`. Dimensions never change after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Create a zero-valued matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Wrap an existing row-major buffer
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let expected = rows * cols;
        if data.len() != expected {
            return Err(MatrixError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix from nested rows, mainly for tests and small fixtures
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let data: Vec<T> = rows.iter().flatten().copied().collect();
        Self::from_vec(rows.len(), cols, data)
    }

    /// Wrap a buffer whose length the caller has already established
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Square matrix with the multiplicative identity on the diagonal
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        for i in 0..n {
            matrix.set(i, i, T::one());
        }
        matrix
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Row-major view of the elements
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Elementwise sum, one addition recorded per element pair
    pub fn add(&self, other: &Self, stats: &mut OperationStats) -> Self {
        self.zip_counted(other, stats, |a, b| a + b)
    }

    /// Elementwise difference, counted as additions
    pub fn subtract(&self, other: &Self, stats: &mut OperationStats) -> Self {
        self.zip_counted(other, stats, |a, b| a - b)
    }

    fn zip_counted(&self, other: &Self, stats: &mut OperationStats, op: impl Fn(T, T) -> T) -> Self {
        debug_assert_eq!(self.shape(), other.shape(), "elementwise operands must match");
        let data: Vec<T> = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| op(a, b))
            .collect();
        stats.record_additions(data.len() as u64);
        Self::from_parts(self.rows, self.cols, data)
    }

    /// Copy the four quadrants out as `[top-left, top-right, bottom-left, bottom-right]`
    ///
    /// Only meaningful for square matrices with an even side; callers must
    /// guarantee that precondition.
    pub fn split(&self) -> [Self; 4] {
        let half = self.rows / 2;
        let mut quadrants = [
            Self::new(half, half),
            Self::new(half, half),
            Self::new(half, half),
            Self::new(half, half),
        ];
        for i in 0..half {
            let top = &self.data[i * self.cols..(i + 1) * self.cols];
            let bottom = &self.data[(i + half) * self.cols..(i + half + 1) * self.cols];
            let dst = i * half..(i + 1) * half;
            quadrants[0].data[dst.clone()].copy_from_slice(&top[..half]);
            quadrants[1].data[dst.clone()].copy_from_slice(&top[half..2 * half]);
            quadrants[2].data[dst.clone()].copy_from_slice(&bottom[..half]);
            quadrants[3].data[dst].copy_from_slice(&bottom[half..2 * half]);
        }
        quadrants
    }

    /// Write four half-side quadrants back into this matrix (inverse of [`Self::split`])
    pub fn join(&mut self, quadrants: &[Self; 4]) {
        let half = quadrants[0].rows;
        let cols = self.cols;
        for i in 0..half {
            let src = i * half..(i + 1) * half;
            let top = i * cols;
            let bottom = (i + half) * cols;
            self.data[top..top + half].copy_from_slice(&quadrants[0].data[src.clone()]);
            self.data[top + half..top + 2 * half].copy_from_slice(&quadrants[1].data[src.clone()]);
            self.data[bottom..bottom + half].copy_from_slice(&quadrants[2].data[src.clone()]);
            self.data[bottom + half..bottom + 2 * half].copy_from_slice(&quadrants[3].data[src]);
        }
    }

    /// Sum of absolute elementwise differences against `reference`
    pub fn error_against(&self, reference: &Self) -> f64 {
        debug_assert_eq!(self.shape(), reference.shape());
        reference
            .data
            .iter()
            .zip(&self.data)
            .map(|(&r, &c)| r.distance(c))
            .sum()
    }
}

impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.cols + col]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.cols + col]
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols.max(1)).take(self.rows) {
            for value in row {
                write!(f, "{} ", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

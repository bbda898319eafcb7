//! Optimized gemm backend with naive fallback
//!
//! With the `blas` feature the "BLAS" strategy dispatches to the
//! `matrixmultiply` kernels through [`Scalar::backend_multiply`]:
//! - `f64` uses `dgemm` directly
//! - `Complex64` uses `zgemm` on the interleaved `[re, im]` layout
//! - `i32` is widened to `f64`, multiplied with `dgemm` and rounded back.
//!   Exact only while every partial sum fits in the 53-bit mantissa.
//!
//! The backend does not expose elementary operation counts, so the
//! theoretical `m·n·k` is recorded for both additions and multiplications.
//! Without the feature the strategy is exactly [`naive_multiply`].

use super::naive::naive_multiply;
use crate::matrix::{Matrix, MatrixError, Result};
use crate::scalar::Scalar;
use crate::stats::OperationStats;
use log::trace;

/// Whether the optimized backend is compiled in
pub fn backend_available() -> bool {
    cfg!(feature = "blas")
}

/// Backend product, or the naive product when no backend handles `T`
pub fn blas_multiply<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    stats: &mut OperationStats,
) -> Result<Matrix<T>> {
    if a.cols() != b.rows() {
        return Err(MatrixError::dimension_mismatch(a.shape(), b.shape()));
    }

    match T::backend_multiply(a, b) {
        Some(c) => {
            let volume = (a.rows() * a.cols() * b.cols()) as u64;
            stats.record_additions(volume);
            stats.record_multiplications(volume);
            Ok(c)
        }
        None => {
            trace!("no gemm backend for {}, using naive", T::KIND);
            naive_multiply(a, b, stats)
        }
    }
}

#[cfg(feature = "blas")]
fn dgemm_row_major(m: usize, k: usize, n: usize, lhs: &[f64], rhs: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0f64; m * n];
    // SAFETY: all three buffers are contiguous row-major with the lengths
    // implied by m, k and n, and `out` does not alias the inputs.
    unsafe {
        matrixmultiply::dgemm(
            m,
            k,
            n,
            1.0,
            lhs.as_ptr(),
            k as isize,
            1,
            rhs.as_ptr(),
            n as isize,
            1,
            0.0,
            out.as_mut_ptr(),
            n as isize,
            1,
        );
    }
    out
}

#[cfg(feature = "blas")]
pub(crate) fn gemm_f64(a: &Matrix<f64>, b: &Matrix<f64>) -> Matrix<f64> {
    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    Matrix::from_parts(m, n, dgemm_row_major(m, k, n, a.as_slice(), b.as_slice()))
}

#[cfg(feature = "blas")]
pub(crate) fn gemm_i32(a: &Matrix<i32>, b: &Matrix<i32>) -> Matrix<i32> {
    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    let lhs: Vec<f64> = a.as_slice().iter().map(|&v| f64::from(v)).collect();
    let rhs: Vec<f64> = b.as_slice().iter().map(|&v| f64::from(v)).collect();
    let out = dgemm_row_major(m, k, n, &lhs, &rhs)
        .into_iter()
        .map(|v| v.round() as i32)
        .collect();
    Matrix::from_parts(m, n, out)
}

#[cfg(feature = "blas")]
pub(crate) fn gemm_c64(
    a: &Matrix<num_complex::Complex64>,
    b: &Matrix<num_complex::Complex64>,
) -> Matrix<num_complex::Complex64> {
    use matrixmultiply::CGemmOption;
    use num_complex::Complex64;

    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    let lhs: &[[f64; 2]] = bytemuck::cast_slice(a.as_slice());
    let rhs: &[[f64; 2]] = bytemuck::cast_slice(b.as_slice());
    let mut out = vec![[0.0f64; 2]; m * n];
    // SAFETY: same layout argument as `dgemm_row_major`; Complex64 is
    // `repr(C)` `{ re, im }`, matching the `[f64; 2]` element zgemm expects.
    unsafe {
        matrixmultiply::zgemm(
            CGemmOption::Standard,
            CGemmOption::Standard,
            m,
            k,
            n,
            [1.0, 0.0],
            lhs.as_ptr(),
            k as isize,
            1,
            rhs.as_ptr(),
            n as isize,
            1,
            [0.0, 0.0],
            out.as_mut_ptr(),
            n as isize,
            1,
        );
    }
    let data = out.into_iter().map(|[re, im]| Complex64::new(re, im)).collect();
    Matrix::from_parts(m, n, data)
}

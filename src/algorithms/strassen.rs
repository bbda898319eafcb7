//! Strassen's divide-and-conquer multiplication

use super::naive::naive_multiply;
use crate::matrix::{Matrix, MatrixError, Result};
use crate::scalar::Scalar;
use crate::stats::OperationStats;

/// Side length at or below which the recursion falls back to naive
pub const STRASSEN_BASE_SIZE: usize = 1;

/// Strassen product of two equal, square, power-of-two sided matrices
///
/// Operands that cannot be halved cleanly down to the base case are
/// rejected with [`MatrixError::UnsupportedStrassenShape`]; no padding is
/// applied. Quadrant sums and differences go through the counted
/// [`Matrix::add`] / [`Matrix::subtract`], and all recursive branches record
/// into the same `stats`.
pub fn strassen_multiply<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    stats: &mut OperationStats,
) -> Result<Matrix<T>> {
    let n = a.rows();
    let halvable = n <= STRASSEN_BASE_SIZE || n.is_power_of_two();
    if !a.is_square() || a.shape() != b.shape() || !halvable {
        return Err(MatrixError::unsupported_strassen_shape(a.shape(), b.shape()));
    }
    strassen_recursive(a, b, stats)
}

fn strassen_recursive<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    stats: &mut OperationStats,
) -> Result<Matrix<T>> {
    let n = a.rows();
    if n <= STRASSEN_BASE_SIZE {
        return naive_multiply(a, b, stats);
    }

    let [a11, a12, a21, a22] = a.split();
    let [b11, b12, b21, b22] = b.split();

    let m1 = strassen_recursive(&a11.add(&a22, stats), &b11.add(&b22, stats), stats)?;
    let m2 = strassen_recursive(&a21.add(&a22, stats), &b11, stats)?;
    let m3 = strassen_recursive(&a11, &b12.subtract(&b22, stats), stats)?;
    let m4 = strassen_recursive(&a22, &b21.subtract(&b11, stats), stats)?;
    let m5 = strassen_recursive(&a11.add(&a12, stats), &b22, stats)?;
    let m6 = strassen_recursive(&a21.subtract(&a11, stats), &b11.add(&b12, stats), stats)?;
    let m7 = strassen_recursive(&a12.subtract(&a22, stats), &b21.add(&b22, stats), stats)?;

    let c11 = m1
        .add(&m4, stats)
        .subtract(&m5, stats)
        .add(&m7, stats);
    let c12 = m3.add(&m5, stats);
    let c21 = m2.add(&m4, stats);
    let c22 = m1
        .subtract(&m2, stats)
        .add(&m3, stats)
        .add(&m6, stats);

    let mut c = Matrix::new(n, n);
    c.join(&[c11, c12, c21, c22]);
    Ok(c)
}

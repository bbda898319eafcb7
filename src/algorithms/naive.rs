//! Schoolbook multiplication

use crate::matrix::{Matrix, MatrixError, Result};
use crate::scalar::Scalar;
use crate::stats::OperationStats;

/// Triple-loop product in (i, k, j) order
///
/// Counting: one multiplication per (i, k, j). One addition per (i, k, j)
/// except k == 0, where the first product lands in a zeroed cell. An n x n
/// product therefore records n³ multiplications and n²(n - 1) additions.
pub fn naive_multiply<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    stats: &mut OperationStats,
) -> Result<Matrix<T>> {
    if a.cols() != b.rows() {
        return Err(MatrixError::dimension_mismatch(a.shape(), b.shape()));
    }

    let (m, inner, n) = (a.rows(), a.cols(), b.cols());
    let lhs = a.as_slice();
    let rhs = b.as_slice();
    let mut out = vec![T::zero(); m * n];

    for i in 0..m {
        let c_row = &mut out[i * n..(i + 1) * n];
        for k in 0..inner {
            let a_ik = lhs[i * inner + k];
            let b_row = &rhs[k * n..(k + 1) * n];
            for (c, &b_kj) in c_row.iter_mut().zip(b_row) {
                *c += a_ik * b_kj;
            }
        }
    }

    let products = (m * inner * n) as u64;
    stats.record_multiplications(products);
    stats.record_additions((m * inner.saturating_sub(1) * n) as u64);

    Ok(Matrix::from_parts(m, n, out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_product() {
        let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let b = Matrix::from_vec(3, 2, vec![7, 8, 9, 10, 11, 12]).unwrap();
        let mut stats = OperationStats::new();
        let c = naive_multiply(&a, &b, &mut stats).unwrap();
        assert_eq!(c.as_slice(), &[58, 64, 139, 154]);
        assert_eq!(stats.multiplications, 12);
        assert_eq!(stats.additions, 8);
    }

    #[test]
    fn test_empty_inner_dimension_records_no_additions() {
        let a: Matrix<i32> = Matrix::new(2, 0);
        let b: Matrix<i32> = Matrix::new(0, 2);
        let mut stats = OperationStats::new();
        let c = naive_multiply(&a, &b, &mut stats).unwrap();
        assert_eq!(c, Matrix::new(2, 2));
        assert_eq!(stats, OperationStats::default());
    }
}

//! Error types for matrix construction and multiplication

use thiserror::Error;

/// Errors raised by the matrix model and the multiplication algorithms
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Inner dimensions of a product do not agree (`left.cols != right.rows`)
    #[error(
        "Matrix dimensions mismatch: cannot multiply {left_rows}x{left_cols} by {right_rows}x{right_cols}"
    )]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Strassen needs two square operands of the same power-of-two side
    #[error(
        "Strassen requires equal square operands with a power-of-two side, got {left_rows}x{left_cols} and {right_rows}x{right_cols}"
    )]
    UnsupportedStrassenShape {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Backing buffer length does not equal `rows * cols`
    #[error("Buffer holds {actual} elements, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

impl MatrixError {
    pub(crate) fn dimension_mismatch(left: (usize, usize), right: (usize, usize)) -> Self {
        MatrixError::DimensionMismatch {
            left_rows: left.0,
            left_cols: left.1,
            right_rows: right.0,
            right_cols: right.1,
        }
    }

    pub(crate) fn unsupported_strassen_shape(left: (usize, usize), right: (usize, usize)) -> Self {
        MatrixError::UnsupportedStrassenShape {
            left_rows: left.0,
            left_cols: left.1,
            right_rows: right.0,
            right_cols: right.1,
        }
    }
}

/// Type alias for Result with MatrixError
pub type Result<T> = std::result::Result<T, MatrixError>;

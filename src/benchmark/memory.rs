//! Analytic memory footprint estimates
//!
//! Not measured. Each strategy is charged a fixed number of n x n-scale
//! buffers:
//! - Naive / BLAS: A, B and C, `3n²` elements
//! - Winograd: `3n² + 2n` (row and column factor vectors)
//! - Strassen: `7.75n²`, approximating the quadrant copies and the seven
//!   products allocated across the recursion levels

use crate::algorithms::Algorithm;

/// Estimated number of elements `algorithm` keeps live for an `n x n` product
pub fn estimated_elements(algorithm: Algorithm, n: usize) -> f64 {
    let n = n as f64;
    let n_squared = n * n;
    match algorithm {
        Algorithm::Naive | Algorithm::Blas => 3.0 * n_squared,
        Algorithm::Winograd => 3.0 * n_squared + 2.0 * n,
        Algorithm::Strassen => 7.75 * n_squared,
    }
}

/// Estimated footprint in KB for elements of `element_size` bytes
pub fn estimate_memory_kb(algorithm: Algorithm, n: usize, element_size: usize) -> f64 {
    estimated_elements(algorithm, n) * element_size as f64 / 1024.0
}

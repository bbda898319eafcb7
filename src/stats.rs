//! Operation counting for matrix multiplication algorithms
//!
//! Every counted primitive (matrix add/subtract and all multiplication
//! strategies) takes an `&mut OperationStats` and records the elementary
//! additions and multiplications it performs. Nothing is global: callers that
//! need to keep a nested computation out of the reported numbers take a
//! [`OperationStats::snapshot`] before it and [`OperationStats::restore`] after.

use std::fmt;

/// Accumulated elementary operation counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationStats {
    pub additions: u64,
    pub multiplications: u64,
}

impl OperationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero both counters
    pub fn reset(&mut self) {
        self.additions = 0;
        self.multiplications = 0;
    }

    /// Copy of the current counts, to be handed back to [`Self::restore`]
    pub fn snapshot(&self) -> Self {
        *self
    }

    /// Overwrite the counters with a previously taken snapshot
    pub fn restore(&mut self, snapshot: Self) {
        *self = snapshot;
    }

    #[inline]
    pub fn record_additions(&mut self, count: u64) {
        self.additions += count;
    }

    #[inline]
    pub fn record_multiplications(&mut self, count: u64) {
        self.multiplications += count;
    }

    /// Record one fused multiply-accumulate step
    #[inline]
    pub fn record_multiply_add(&mut self) {
        self.additions += 1;
        self.multiplications += 1;
    }
}

impl fmt::Display for OperationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} additions, {} multiplications",
            self.additions, self.multiplications
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_zeroes_counters() {
        let mut stats = OperationStats::new();
        stats.record_additions(7);
        stats.record_multiplications(3);
        stats.reset();
        assert_eq!(stats.additions, 0);
        assert_eq!(stats.multiplications, 0);
    }

    #[test]
    fn test_snapshot_restore_discards_intermediate_counts() {
        let mut stats = OperationStats::new();
        stats.record_additions(2);
        let saved = stats.snapshot();

        stats.record_additions(100);
        stats.record_multiply_add();
        stats.restore(saved);

        assert_eq!(stats.additions, 2);
        assert_eq!(stats.multiplications, 0);
    }

    #[test]
    fn test_display() {
        let stats = OperationStats {
            additions: 48,
            multiplications: 64,
        };
        assert_eq!(stats.to_string(), "48 additions, 64 multiplications");
    }
}

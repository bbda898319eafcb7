//! Silent reporter for benchmark runs
//!
//! Provides a no-output implementation for tests and `--quiet` runs.

use super::{BenchmarkReporter, Reporter};
use crate::benchmark::BenchmarkRow;
use crate::scalar::ScalarKind;

/// Silent implementation for benchmark runs
#[derive(Default)]
pub struct SilentBenchmarkReporter;

impl SilentBenchmarkReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for SilentBenchmarkReporter {
    fn report_progress(&self, _message: &str, _progress: f64) {}
    fn report_error(&self, _error: &str) {}
    fn report_complete(&self, _message: &str) {}
}

impl BenchmarkReporter for SilentBenchmarkReporter {
    fn report_benchmark_start(&self, _header: &str) {}
    fn report_kind_switch(&self, _kind: ScalarKind) {}
    fn report_row(&self, _row: &BenchmarkRow) {}
}

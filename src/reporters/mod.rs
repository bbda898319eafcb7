//! Progress and output reporting for benchmark runs
//!
//! This module provides traits and implementations for reporting progress and
//! result rows while the harness runs. It keeps the measuring logic decoupled
//! from console formatting; the CSV file itself is written by
//! [`crate::benchmark::CsvOutput`].

mod console;
mod silent;

pub use console::ConsoleBenchmarkReporter;
pub use silent::SilentBenchmarkReporter;

use crate::benchmark::BenchmarkRow;
use crate::scalar::ScalarKind;

/// Base trait for all reporters
pub trait Reporter: Send + Sync {
    /// Report general progress with a message and completion fraction
    fn report_progress(&self, message: &str, progress: f64);

    /// Report an error that aborted the operation
    fn report_error(&self, error: &str);

    /// Report successful completion of an operation
    fn report_complete(&self, message: &str);
}

/// Trait for reporting benchmark progress and rows
///
/// Extends the base Reporter trait with benchmark-specific methods
pub trait BenchmarkReporter: Reporter {
    /// Report the start of a run, with the report header
    fn report_benchmark_start(&self, header: &str);

    /// Report moving on to the next scalar kind
    fn report_kind_switch(&self, kind: ScalarKind);

    /// Report one finished result row
    fn report_row(&self, row: &BenchmarkRow);
}

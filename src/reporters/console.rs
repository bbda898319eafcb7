//! Console reporter for benchmark runs
//!
//! Echoes the report header and every row to stdout, so the console output
//! mirrors the CSV file. Progress goes to stderr to keep stdout parseable.

use super::{BenchmarkReporter, Reporter};
use crate::benchmark::BenchmarkRow;
use crate::scalar::ScalarKind;

/// Console implementation for benchmark runs
#[derive(Default)]
pub struct ConsoleBenchmarkReporter;

impl ConsoleBenchmarkReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleBenchmarkReporter {
    fn report_progress(&self, message: &str, progress: f64) {
        eprintln!("{} ({:.1}%)", message, progress * 100.0);
    }

    fn report_error(&self, error: &str) {
        eprintln!("Error: {}", error);
    }

    fn report_complete(&self, message: &str) {
        println!("{}", message);
    }
}

impl BenchmarkReporter for ConsoleBenchmarkReporter {
    fn report_benchmark_start(&self, header: &str) {
        println!("Starting Benchmark...");
        println!("{}", header);
    }

    fn report_kind_switch(&self, kind: ScalarKind) {
        println!("--- Switching to {} ---", kind.label());
    }

    fn report_row(&self, row: &BenchmarkRow) {
        println!("{}", row);
    }
}

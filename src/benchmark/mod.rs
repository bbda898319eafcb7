//! Benchmark harness
//!
//! For every (scalar kind × shape × size × algorithm) combination the harness:
//!
//! 1. generates the two operands of the requested shape
//! 2. computes the naive reference, snapshotting and restoring the counters
//!    around it so it never shows up in a measured row
//! 3. runs the algorithm once for its counts and its error against the reference
//! 4. times it adaptively (see [`timing`])
//! 5. estimates its memory footprint (see [`memory`])
//! 6. emits a [`BenchmarkRow`] to the CSV sink and the reporter
//!
//! Everything runs on the calling thread; the counters are owned by the
//! runner and handed to each algorithm by `&mut`.

mod config;
mod error;
pub mod memory;
mod output;
pub mod timing;
mod types;

pub use config::{BenchmarkConfig, DEFAULT_OUTPUT, DEFAULT_SIZES, DEFAULT_TARGET_MS};
pub use error::{BenchmarkError, Result};
pub use output::CsvOutput;
pub use types::{BenchmarkRow, CSV_HEADER};

use crate::algorithms::{naive_multiply, Algorithm};
use crate::matrix::{Matrix, MatrixShape};
use crate::reporters::BenchmarkReporter;
use crate::scalar::{Scalar, ScalarKind};
use crate::stats::OperationStats;
use log::{debug, info};
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use std::io::Write;
use timing::{as_millis_f64, measure_time, repetitions_for, Timing};

/// Drives a full benchmark sweep
pub struct BenchmarkRunner<'a> {
    config: BenchmarkConfig,
    reporter: &'a dyn BenchmarkReporter,
    rng: StdRng,
    stats: OperationStats,
}

impl<'a> BenchmarkRunner<'a> {
    pub fn new(config: BenchmarkConfig, reporter: &'a dyn BenchmarkReporter) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            reporter,
            rng,
            stats: OperationStats::new(),
        }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Run the sweep, writing the report to the configured CSV path
    pub fn run(&mut self) -> Result<Vec<BenchmarkRow>> {
        self.config.validated_sizes()?;
        let path = self.config.output.clone();
        let mut output = CsvOutput::create(&path)?;
        let rows = self.run_to(&mut output)?;
        self.reporter
            .report_complete(&format!("Benchmark results written to {}", path.display()));
        Ok(rows)
    }

    /// Run the sweep into an arbitrary CSV sink
    pub fn run_to<W: Write>(&mut self, output: &mut CsvOutput<W>) -> Result<Vec<BenchmarkRow>> {
        let sizes = self.config.validated_sizes()?;
        info!(
            "Benchmarking sizes {:?} with algorithms {:?}",
            sizes,
            Algorithm::available()
        );

        output.write_header()?;
        self.reporter.report_benchmark_start(CSV_HEADER);

        let mut rows = Vec::new();
        for (index, kind) in ScalarKind::ALL.into_iter().enumerate() {
            if index > 0 {
                self.reporter.report_kind_switch(kind);
            }
            match kind {
                ScalarKind::Integer => self.run_kind::<i32, W>(&sizes, output, &mut rows)?,
                ScalarKind::Real => self.run_kind::<f64, W>(&sizes, output, &mut rows)?,
                ScalarKind::Complex => self.run_kind::<Complex64, W>(&sizes, output, &mut rows)?,
            }
        }
        Ok(rows)
    }

    fn run_kind<T: Scalar, W: Write>(
        &mut self,
        sizes: &[usize],
        output: &mut CsvOutput<W>,
        rows: &mut Vec<BenchmarkRow>,
    ) -> Result<()> {
        info!("Benchmarking {} matrices", T::KIND);
        let kind_index = ScalarKind::ALL.iter().position(|k| *k == T::KIND).unwrap_or(0);

        for (shape_index, shape) in MatrixShape::ALL.into_iter().enumerate() {
            let done = kind_index * MatrixShape::ALL.len() + shape_index;
            let total = ScalarKind::ALL.len() * MatrixShape::ALL.len();
            self.reporter.report_progress(
                &format!("{} {}", T::KIND.label(), shape.label()),
                done as f64 / total as f64,
            );

            for &n in sizes {
                let a = Matrix::<T>::generate(shape, n, &mut self.rng);
                let b = Matrix::<T>::generate(shape, n, &mut self.rng);

                // Reference must not leak into any measured row
                let saved = self.stats.snapshot();
                let reference = naive_multiply(&a, &b, &mut self.stats)?;
                self.stats.restore(saved);

                for algorithm in Algorithm::available() {
                    let row = self.benchmark_algorithm(algorithm, shape, &a, &b, &reference)?;
                    debug!("{}", row);
                    output.write_row(&row)?;
                    self.reporter.report_row(&row);
                    rows.push(row);
                }
            }
        }
        Ok(())
    }

    /// Measure one algorithm on one operand pair
    pub fn benchmark_algorithm<T: Scalar>(
        &mut self,
        algorithm: Algorithm,
        shape: MatrixShape,
        a: &Matrix<T>,
        b: &Matrix<T>,
        reference: &Matrix<T>,
    ) -> Result<BenchmarkRow> {
        self.stats.reset();
        let result = algorithm.multiply(a, b, &mut self.stats)?;
        let error = if algorithm.is_reference() {
            0.0
        } else {
            result.error_against(reference)
        };

        let timing = self.time_adaptively(algorithm, a, b)?;
        let n = a.rows();

        Ok(BenchmarkRow {
            kind: T::KIND,
            shape,
            size: n,
            algorithm,
            stats: self.stats,
            average_ms: timing.average_ms,
            repetitions: timing.repetitions,
            memory_kb: memory::estimate_memory_kb(algorithm, n, std::mem::size_of::<T>()),
            error,
        })
    }

    /// Time `algorithm` with adaptive repetitions
    ///
    /// On return the counters hold the counts of exactly one invocation,
    /// however many repetitions were timed.
    fn time_adaptively<T: Scalar>(
        &mut self,
        algorithm: Algorithm,
        a: &Matrix<T>,
        b: &Matrix<T>,
    ) -> Result<Timing> {
        let (single, elapsed) = measure_time(|| algorithm.multiply(a, b, &mut self.stats));
        black_box(single?);

        let repetitions = repetitions_for(elapsed.as_millis(), self.config.target_ms);
        if repetitions == 1 {
            self.stats.reset();
            black_box(algorithm.multiply(a, b, &mut self.stats)?);
            return Ok(Timing {
                average_ms: as_millis_f64(elapsed),
                repetitions,
            });
        }

        self.stats.reset();
        black_box(algorithm.multiply(a, b, &mut self.stats)?);
        let counted = self.stats.snapshot();

        let (timed, total) = measure_time(|| -> Result<()> {
            for _ in 0..repetitions {
                black_box(algorithm.multiply(a, b, &mut self.stats)?);
            }
            Ok(())
        });
        timed?;
        self.stats.restore(counted);

        Ok(Timing {
            average_ms: as_millis_f64(total) / repetitions as f64,
            repetitions,
        })
    }
}

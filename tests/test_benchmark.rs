//! Integration tests for the benchmark harness and its CSV output

use matbench::benchmark::memory::estimate_memory_kb;
use matbench::benchmark::timing::{repetitions_for, MAX_REPS, MIN_REPS};
use matbench::benchmark::{
    BenchmarkConfig, BenchmarkError, BenchmarkRow, BenchmarkRunner, CsvOutput, CSV_HEADER,
};
use matbench::reporters::SilentBenchmarkReporter;
use matbench::{Algorithm, Matrix, MatrixShape, OperationStats, ScalarKind};
use std::path::PathBuf;
use tempfile::TempDir;

fn small_config(sizes: Vec<usize>) -> BenchmarkConfig {
    BenchmarkConfig::new("unused.csv", sizes, 1, Some(1234))
}

fn run_in_memory(config: BenchmarkConfig) -> (Vec<BenchmarkRow>, String) {
    let reporter = SilentBenchmarkReporter::new();
    let mut runner = BenchmarkRunner::new(config, &reporter);
    let mut output = CsvOutput::new(Vec::new());
    let rows = runner.run_to(&mut output).expect("benchmark run failed");
    let text = String::from_utf8(output.into_inner()).expect("CSV is UTF-8");
    (rows, text)
}

// =============================================================================
// Sweep structure
// =============================================================================

#[test]
fn test_sweep_order_and_row_count() {
    let (rows, _) = run_in_memory(small_config(vec![8, 4]));
    let algorithms = Algorithm::available();
    assert_eq!(rows.len(), 3 * 3 * 2 * algorithms.len());

    let mut expected = Vec::new();
    for kind in ScalarKind::ALL {
        for shape in MatrixShape::ALL {
            for size in [4usize, 8] {
                for &algorithm in &algorithms {
                    expected.push((kind, shape, size, algorithm));
                }
            }
        }
    }
    let actual: Vec<_> = rows
        .iter()
        .map(|r| (r.kind, r.shape, r.size, r.algorithm))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_csv_header_and_lines() {
    let (rows, text) = run_in_memory(small_config(vec![4]));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(
        lines[0],
        "DataType Type,Size,Algorithm,Additions,Multiplications,Time(ms),Reps,Memory(KB),Error"
    );
    assert_eq!(lines.len(), rows.len() + 1);
    assert!(lines[1].starts_with("Int Random,4,Naive,48,64,"));
    for (line, row) in lines[1..].iter().zip(&rows) {
        assert_eq!(*line, row.to_string());
        assert_eq!(line.split(',').count(), 9);
    }
    assert!(text.contains("Double Symmetric,4,Strassen,"));
    assert!(text.contains("Complex Identity,4,Winograd,"));
}

// =============================================================================
// Per-row measurements
// =============================================================================

#[test]
fn test_counts_reflect_one_invocation() {
    let (rows, _) = run_in_memory(small_config(vec![4, 8]));
    for row in &rows {
        let mut expected = OperationStats::new();
        let a: Matrix<i32> = Matrix::identity(row.size);
        row.algorithm.multiply(&a, &a, &mut expected).unwrap();
        assert_eq!(row.stats, expected, "{}", row);
        // Either a slow single run, or a clamped repetition count
        assert!(row.repetitions == 1 || (MIN_REPS..=MAX_REPS).contains(&row.repetitions));
    }
}

#[test]
fn test_reference_computation_does_not_leak_into_naive_counts() {
    let (rows, _) = run_in_memory(small_config(vec![4]));
    let naive = rows
        .iter()
        .find(|r| r.algorithm == Algorithm::Naive)
        .unwrap();
    assert_eq!(naive.stats.multiplications, 64);
    assert_eq!(naive.stats.additions, 48);
}

#[test]
fn test_errors_are_zero_for_integers_and_small_for_floats() {
    let (rows, _) = run_in_memory(small_config(vec![4, 16]));
    for row in &rows {
        if row.algorithm.is_reference() {
            assert_eq!(row.error, 0.0);
        }
        match row.kind {
            ScalarKind::Integer => assert_eq!(row.error, 0.0, "{}", row),
            _ => assert!(row.error < 1e-6, "{}", row),
        }
    }
}

#[test]
fn test_memory_estimates_use_element_size() {
    let (rows, _) = run_in_memory(small_config(vec![8]));
    for row in &rows {
        let element = match row.kind {
            ScalarKind::Integer => 4,
            ScalarKind::Real => 8,
            ScalarKind::Complex => 16,
        };
        assert_eq!(row.memory_kb, estimate_memory_kb(row.algorithm, 8, element));
    }
}

#[test]
fn test_benchmark_algorithm_directly() {
    let reporter = SilentBenchmarkReporter::new();
    let mut runner = BenchmarkRunner::new(small_config(vec![4]), &reporter);
    let a: Matrix<i32> = Matrix::identity(4);
    let reference = a.clone();
    let row = runner
        .benchmark_algorithm(Algorithm::Strassen, MatrixShape::Identity, &a, &a, &reference)
        .unwrap();
    assert_eq!(row.kind, ScalarKind::Integer);
    assert_eq!(row.size, 4);
    assert_eq!(row.stats.multiplications, 49);
    assert_eq!(row.error, 0.0);
    assert!(row.average_ms >= 0.0);
    assert_eq!(row.category(), "Int Identity");
}

#[test]
fn test_zero_duration_single_run_uses_one_hundred_repetitions() {
    assert_eq!(repetitions_for(0, 100), 100);
    assert!((MIN_REPS..=MAX_REPS).contains(&repetitions_for(0, 100)));
}

// =============================================================================
// Configuration and output errors
// =============================================================================

#[test]
fn test_default_config() {
    let config = BenchmarkConfig::default();
    assert_eq!(config.output, PathBuf::from("benchmark_results.csv"));
    assert_eq!(config.sizes, vec![4, 8, 16, 32, 64, 128, 256, 512]);
    assert_eq!(config.target_ms, 100);
    assert_eq!(config.seed, None);
}

#[test]
fn test_invalid_configs_are_rejected() {
    let reporter = SilentBenchmarkReporter::new();
    for config in [
        small_config(vec![]),
        small_config(vec![4, 6]),
        small_config(vec![0]),
        BenchmarkConfig::new("x.csv", vec![4], 0, None),
    ] {
        let mut runner = BenchmarkRunner::new(config, &reporter);
        let mut output = CsvOutput::new(Vec::new());
        let err = runner.run_to(&mut output).unwrap_err();
        assert!(matches!(err, BenchmarkError::InvalidConfig(_)), "{}", err);
        assert_eq!(output.rows_written(), 0);
    }
}

#[test]
fn test_validated_sizes_sorts_and_dedups() {
    let config = small_config(vec![16, 4, 8, 4]);
    assert_eq!(config.validated_sizes().unwrap(), vec![4, 8, 16]);
}

#[test]
fn test_run_writes_csv_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("results.csv");
    let config = BenchmarkConfig::new(&path, vec![4], 1, Some(7));

    let reporter = SilentBenchmarkReporter::new();
    let mut runner = BenchmarkRunner::new(config, &reporter);
    let rows = runner.run().unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), rows.len() + 1);
    assert!(contents.starts_with(CSV_HEADER));
}

#[test]
fn test_unwritable_output_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing_dir").join("results.csv");
    let config = BenchmarkConfig::new(&path, vec![4], 1, None);

    let reporter = SilentBenchmarkReporter::new();
    let mut runner = BenchmarkRunner::new(config, &reporter);
    let err = runner.run().unwrap_err();
    match &err {
        BenchmarkError::OutputUnavailable { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("unexpected error: {}", other),
    }
    assert!(err.to_string().starts_with("Failed to open"));
    assert!(!path.exists());
}

#[test]
fn test_same_seed_gives_same_counts_and_errors() {
    let (first, _) = run_in_memory(small_config(vec![4, 8]));
    let (second, _) = run_in_memory(small_config(vec![4, 8]));
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.stats, b.stats);
        assert_eq!(a.error, b.error);
    }
}

//! matbench binary - sweeps every algorithm over every kind, shape and size
//! and writes the CSV report

use anyhow::{Context, Result};
use matbench::benchmark::{BenchmarkConfig, BenchmarkRunner};
use matbench::reporters::{BenchmarkReporter, ConsoleBenchmarkReporter, SilentBenchmarkReporter};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = matbench::parse_args();
    let quiet = matches.get_flag("quiet");
    let config = BenchmarkConfig::from_args(&matches);

    let reporter: Box<dyn BenchmarkReporter> = if quiet {
        Box::new(SilentBenchmarkReporter::new())
    } else {
        Box::new(ConsoleBenchmarkReporter::new())
    };

    let output = config.output.clone();
    let mut runner = BenchmarkRunner::new(config, reporter.as_ref());
    let rows = runner
        .run()
        .with_context(|| format!("Benchmark run writing {} aborted", output.display()))?;

    log::info!("Wrote {} rows to {}", rows.len(), output.display());
    Ok(())
}

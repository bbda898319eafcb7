use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line definition of the `matbench` binary
pub fn build_cli() -> Command {
    Command::new("matbench")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Benchmark naive, Strassen, Winograd and BLAS matrix multiplication")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("CSV report path (default: benchmark_results.csv)")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("sizes")
                .short('s')
                .long("sizes")
                .help("Comma-separated power-of-two matrix sizes (default: 4,8,...,512)")
                .value_name("N,...")
                .value_delimiter(',')
                .num_args(1..)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("target-ms")
                .short('t')
                .long("target-ms")
                .help("Adaptive timing target in milliseconds (default: 100)")
                .value_name("MS")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for matrix generation (default: random)")
                .value_name("SEED")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Quiet mode - only write the CSV report")
                .action(ArgAction::SetTrue),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_cli().get_matches()
}

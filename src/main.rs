//! Custom CSV benchmark CLI
//!
//! Generates an edge-case-heavy CSV file (if missing), then times full reads
//! and full writes with the character-level codec and with the csv crate.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release
//! cargo run --release -- --rows 50000 --repeats 10
//! cargo run --release -- --strategy custom --delimiter ';'
//! RUST_LOG=debug cargo run --release
//! ```
//!
//! The report goes to stdout; diagnostics go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid dialect, unreadable data file, write failure, etc.)

use custom_csv::harness::{generate_test_data, load_data_for_write, run_benchmarks};
use custom_csv::{cli, create_strategy, CodecStrategy, CsvError};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &cli::CliArgs) -> Result<(), CsvError> {
    let dialect = args.to_dialect()?;

    // 1. Ensure test data exists
    generate_test_data(&args.to_generator_config(dialect))?;

    // 2. Load the rows every strategy will write
    let rows = load_data_for_write(&args.data_file, dialect)?;

    // 3. Time each strategy
    let strategies = args
        .strategies()
        .into_iter()
        .map(|strategy_type| create_strategy(strategy_type, dialect))
        .collect::<Result<Vec<Box<dyn CodecStrategy>>, _>>()?;
    let report = run_benchmarks(&args.to_bench_config(), &strategies, &rows)?;

    println!("{}", report);
    Ok(())
}

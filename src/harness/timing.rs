//! Benchmark driver
//!
//! Times repeated full reads of the data file and repeated full writes of a
//! preloaded row set for each codec strategy, and reports the averages.

use crate::strategy::{CodecStrategy, StandardCodec};
use crate::types::{CsvError, Dialect, Row};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Default number of timed repetitions per measurement
pub const DEFAULT_REPEATS: usize = 5;

/// Settings for [`run_benchmarks`]
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// File read by every read measurement
    pub data_file: PathBuf,
    /// Scratch file written by every write measurement, removed afterwards
    pub output_file: PathBuf,
    /// Repetitions averaged per measurement
    pub repeats: usize,
}

impl BenchConfig {
    /// Create a BenchConfig, falling back to the default for zero repeats
    pub fn new(data_file: impl Into<PathBuf>, output_file: impl Into<PathBuf>, repeats: usize) -> Self {
        let repeats = if repeats == 0 {
            tracing::warn!(
                "Invalid repeats ({}), using default ({})",
                repeats,
                DEFAULT_REPEATS
            );
            DEFAULT_REPEATS
        } else {
            repeats
        };

        Self {
            data_file: data_file.into(),
            output_file: output_file.into(),
            repeats,
        }
    }
}

/// Average timings of one strategy
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyTiming {
    pub name: &'static str,
    pub read: Duration,
    pub write: Duration,
}

/// Result of a benchmark run
#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport {
    /// Number of rows in the write data set
    pub rows: usize,
    pub repeats: usize,
    pub timings: Vec<StrategyTiming>,
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "--- Running Benchmarks ({} rows, Repeats: {}) ---",
            self.rows, self.repeats
        )?;
        writeln!(f)?;

        let width = self
            .timings
            .iter()
            .map(|t| t.name.len())
            .max()
            .unwrap_or(0);

        writeln!(f, "Time to Read:")?;
        for timing in &self.timings {
            writeln!(
                f,
                "  {:<width$} {:.4} seconds",
                format!("{}:", timing.name),
                timing.read.as_secs_f64(),
                width = width + 1
            )?;
        }
        writeln!(f, "{}", "-".repeat(30))?;

        writeln!(f, "Time to Write:")?;
        for timing in &self.timings {
            writeln!(
                f,
                "  {:<width$} {:.4} seconds",
                format!("{}:", timing.name),
                timing.write.as_secs_f64(),
                width = width + 1
            )?;
        }
        write!(f, "{}", "-".repeat(30))
    }
}

/// Load the rows used by the write measurements
///
/// Always uses the `csv` crate so that every strategy writes the same data.
pub fn load_data_for_write(path: &Path, dialect: Dialect) -> Result<Vec<Row>, CsvError> {
    let rows = StandardCodec::new(dialect)?.read_file(path)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded data for write benchmarks");
    Ok(rows)
}

/// Run `operation` `repeats` times and return the mean wall-clock time
///
/// Stops at the first failure.
pub fn average_duration<F>(repeats: usize, mut operation: F) -> Result<Duration, CsvError>
where
    F: FnMut() -> Result<(), CsvError>,
{
    let mut total = Duration::ZERO;
    for _ in 0..repeats {
        let start = Instant::now();
        operation()?;
        total += start.elapsed();
    }
    Ok(mean_duration(total, repeats))
}

/// `total / runs` for any run count; zero runs yields zero
fn mean_duration(total: Duration, runs: usize) -> Duration {
    if runs == 0 {
        return Duration::ZERO;
    }
    let nanos = total.as_nanos() / runs as u128;
    u64::try_from(nanos).map_or(Duration::MAX, Duration::from_nanos)
}

/// Time reads and writes for each strategy in order
///
/// The output file is removed once all measurements are done, even when one
/// of them failed.
pub fn run_benchmarks(
    config: &BenchConfig,
    strategies: &[Box<dyn CodecStrategy>],
    rows: &[Row],
) -> Result<BenchReport, CsvError> {
    let result = measure_all(config, strategies, rows);

    if config.output_file.exists() {
        if let Err(e) = std::fs::remove_file(&config.output_file) {
            tracing::warn!(path = %config.output_file.display(), "failed to remove benchmark output: {}", e);
        }
    }

    result
}

fn measure_all(
    config: &BenchConfig,
    strategies: &[Box<dyn CodecStrategy>],
    rows: &[Row],
) -> Result<BenchReport, CsvError> {
    let mut timings = Vec::with_capacity(strategies.len());

    for strategy in strategies {
        let read = average_duration(config.repeats, || {
            strategy.read_file(&config.data_file).map(|_| ())
        })?;
        let write = average_duration(config.repeats, || {
            strategy.write_file(rows, &config.output_file)
        })?;

        tracing::debug!(
            strategy = strategy.name(),
            read_secs = read.as_secs_f64(),
            write_secs = write.as_secs_f64(),
            "strategy measured"
        );
        timings.push(StrategyTiming {
            name: strategy.name(),
            read,
            write,
        });
    }

    Ok(BenchReport {
        rows: rows.len(),
        repeats: config.repeats,
        timings,
    })
}

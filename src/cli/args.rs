use crate::harness::{BenchConfig, GeneratorConfig};
use crate::types::{CsvError, Dialect};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Benchmark the character-level CSV codec against the csv crate
#[derive(Parser, Debug)]
#[command(name = "custom-csv-bench")]
#[command(about = "Benchmark the character-level CSV codec against the csv crate", long_about = None)]
pub struct CliArgs {
    /// Benchmark data file, generated when missing
    #[arg(
        long = "data-file",
        value_name = "PATH",
        default_value = "test_data.csv",
        help = "Benchmark data file (generated if it does not exist)"
    )]
    pub data_file: PathBuf,

    /// Scratch file for write measurements
    #[arg(
        long = "output-file",
        value_name = "PATH",
        default_value = "output_bench.csv",
        help = "Scratch file for write measurements (removed afterwards)"
    )]
    pub output_file: PathBuf,

    /// Number of data rows to generate
    #[arg(long = "rows", value_name = "COUNT", default_value_t = 10_000)]
    pub rows: usize,

    /// Number of timed repetitions per measurement
    #[arg(
        long = "repeats",
        value_name = "COUNT",
        default_value_t = 5,
        help = "Timed repetitions per measurement (default: 5)"
    )]
    pub repeats: usize,

    /// Field delimiter
    #[arg(long = "delimiter", value_name = "CHAR", default_value_t = ',')]
    pub delimiter: char,

    /// Quote character
    #[arg(long = "quotechar", value_name = "CHAR", default_value_t = '"')]
    pub quotechar: char,

    /// Restrict the run to one strategy
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        help = "Run only 'custom' or only 'standard' (default: both)"
    )]
    pub strategy: Option<StrategyType>,
}

/// Available codec strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    /// This crate's character-level reader and writer
    Custom,
    /// The `csv` crate
    Standard,
}

impl CliArgs {
    /// Build the dialect from `--delimiter` and `--quotechar`
    pub fn to_dialect(&self) -> Result<Dialect, CsvError> {
        Dialect::new(self.delimiter, self.quotechar)
    }

    pub fn to_generator_config(&self, dialect: Dialect) -> GeneratorConfig {
        GeneratorConfig::new(&self.data_file, self.rows, dialect)
    }

    pub fn to_bench_config(&self) -> BenchConfig {
        BenchConfig::new(&self.data_file, &self.output_file, self.repeats)
    }

    /// Strategies to run, in report order
    pub fn strategies(&self) -> Vec<StrategyType> {
        match self.strategy {
            Some(only) => vec![only],
            None => vec![StrategyType::Standard, StrategyType::Custom],
        }
    }
}

//! Benchmark harness
//!
//! Callers of the codec used to compare it against the `csv` crate:
//! - `generator` - Writes the edge-case-heavy benchmark data file
//! - `timing` - Times repeated full reads and writes per strategy

pub mod generator;
pub mod timing;

pub use generator::{generate_test_data, GenerationOutcome, GeneratorConfig};
pub use timing::{load_data_for_write, run_benchmarks, BenchConfig, BenchReport, StrategyTiming};

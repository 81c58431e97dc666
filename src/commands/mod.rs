//! Command implementations

pub mod benchmark;
pub mod lookup;
pub mod simple;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use lookup::{LookupResult, lookup_fragment};
pub use simple::{ReplCommand, run_simple};

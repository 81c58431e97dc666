//! Terminal output formatting
//!
//! Display utilities for game states, command results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_lookup_result, print_state};

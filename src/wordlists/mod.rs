//! Corpus sources
//!
//! An embedded default corpus compiled into the binary, plus a loader for
//! newline-separated word files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

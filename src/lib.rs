//! Word Builder
//!
//! Dictionary indexing and an incremental move engine for a word-building game:
//! starting from an empty answer, letters are added before or after it, and
//! after every edit the engine reports which letters can legally come next on
//! each side and which complete words are still reachable.
//!
//! # Quick Start
//!
//! ```rust
//! use word_builder::core::WordDictionary;
//! use word_builder::engine::Engine;
//!
//! let dict = WordDictionary::new(["band", "and", "an"]);
//! let engine = Engine::new(&dict);
//!
//! let state = engine.state_for_answer("an");
//! let transition = engine.add_letter(&state, 'd', "suffix").unwrap();
//! assert!(transition.state.is_valid_word());
//! println!("{}", transition.message);
//! ```

// Dictionary indices
pub mod core;

// Game engine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

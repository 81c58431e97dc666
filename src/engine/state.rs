//! Game state values
//!
//! A [`WordBuilderState`] is never edited in place: every transition builds a
//! new value, so an older state stays valid for undo or for concurrent readers.

use super::EngineError;
use crate::core::LetterSet;
use std::fmt;
use std::str::FromStr;

/// Completions kept in a [`StateSnapshot`]
pub const SNAPSHOT_COMPLETIONS: usize = 5;

/// Which end of the answer a letter is added to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Prefix,
    Suffix,
}

impl Position {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Suffix => "suffix",
        }
    }

    /// The other end
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Prefix => Self::Suffix,
            Self::Suffix => Self::Prefix,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = EngineError;

    /// Only the exact literals "prefix" and "suffix" are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prefix" => Ok(Self::Prefix),
            "suffix" => Ok(Self::Suffix),
            other => Err(EngineError::InvalidPosition(other.to_string())),
        }
    }
}

/// One session's game state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBuilderState {
    pub(crate) answer: String,
    pub(crate) prefix_set: LetterSet,
    pub(crate) suffix_set: LetterSet,
    pub(crate) step: usize,
    pub(crate) is_valid_word: bool,
    pub(crate) valid_completions: Vec<String>,
    pub(crate) suggestion: String,
}

impl WordBuilderState {
    /// The letters built so far
    #[inline]
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Letters that may be placed before the answer
    #[inline]
    #[must_use]
    pub const fn prefix_set(&self) -> &LetterSet {
        &self.prefix_set
    }

    /// Letters that may be placed after the answer
    #[inline]
    #[must_use]
    pub const fn suffix_set(&self) -> &LetterSet {
        &self.suffix_set
    }

    /// Number of successful edits since the last reset
    #[inline]
    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    #[inline]
    #[must_use]
    pub const fn is_valid_word(&self) -> bool {
        self.is_valid_word
    }

    #[must_use]
    pub fn valid_completions(&self) -> &[String] {
        &self.valid_completions
    }

    #[must_use]
    pub fn suggestion(&self) -> &str {
        &self.suggestion
    }

    /// The candidate set for one end of the answer
    #[must_use]
    pub const fn letters_for(&self, position: Position) -> &LetterSet {
        match position {
            Position::Prefix => &self.prefix_set,
            Position::Suffix => &self.suffix_set,
        }
    }

    /// Whether neither end accepts any letter
    #[must_use]
    pub fn is_dead_end(&self) -> bool {
        self.prefix_set.is_empty() && self.suffix_set.is_empty()
    }

    /// Project the state into plain, sorted collections
    ///
    /// # Examples
    /// ```
    /// use word_builder::core::WordDictionary;
    /// use word_builder::engine::Engine;
    ///
    /// let dict = WordDictionary::new(["cat", "car", "cart", "at"]);
    /// let engine = Engine::new(&dict);
    /// let snapshot = engine.reset().current_state();
    ///
    /// assert_eq!(snapshot.answer, "");
    /// assert_eq!(snapshot.suffix_set, vec!['a', 'c']);
    /// assert_eq!(snapshot.prefix_set, vec!['r', 't']);
    /// ```
    #[must_use]
    pub fn current_state(&self) -> StateSnapshot {
        StateSnapshot {
            answer: self.answer.clone(),
            prefix_set: self.prefix_set.sorted(),
            suffix_set: self.suffix_set.sorted(),
            step: self.step,
            is_valid_word: self.is_valid_word,
            valid_completions: self
                .valid_completions
                .iter()
                .take(SNAPSHOT_COMPLETIONS)
                .cloned()
                .collect(),
            suggestion: self.suggestion.clone(),
        }
    }
}

/// Read-only view of a [`WordBuilderState`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateSnapshot {
    pub answer: String,
    /// Sorted letters addable before the answer
    pub prefix_set: Vec<char>,
    /// Sorted letters addable after the answer
    pub suffix_set: Vec<char>,
    pub step: usize,
    pub is_valid_word: bool,
    /// At most five completions
    pub valid_completions: Vec<String>,
    pub suggestion: String,
}

//! Letter set types
//!
//! The candidate letters for each end of the answer are plain sets of `char`.
//! Iteration order of a [`LetterSet`] is unspecified; use [`LetterSet::sorted`]
//! whenever a stable order is needed (display, comparisons in tests).

use rustc_hash::FxHashSet;
use std::fmt;

/// A set of single letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSet(FxHashSet<char>);

impl LetterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a letter, returning `true` if it was not present yet
    pub fn insert(&mut self, letter: char) -> bool {
        self.0.insert(letter)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the letters in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    /// Set union, consuming both operands
    #[must_use]
    pub fn union(mut self, other: Self) -> Self {
        if self.0.len() < other.0.len() {
            return other.union(self);
        }
        self.0.extend(other.0);
        self
    }

    /// The letters in ascending order
    #[must_use]
    pub fn sorted(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.iter().collect();
        letters.sort_unstable();
        letters
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<char> for LetterSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.sorted().into_iter().collect();
        write!(f, "{{{letters}}}")
    }
}

/// Letters that start and end at least one corpus word
///
/// Computed once while an index is built and used to seed the candidate sets
/// of an empty answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeLetters {
    /// First letters of corpus words
    pub starts: LetterSet,
    /// Last letters of corpus words
    pub ends: LetterSet,
}

impl EdgeLetters {
    /// Record the first and last letter of `word`
    pub fn record(&mut self, word: &str) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            self.starts.insert(first);
            self.ends.insert(chars.next_back().unwrap_or(first));
        }
    }
}

/// Sorted, deduplicated letters adjacent to some query fragment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterGroups {
    /// Letters that may be placed before the fragment
    pub prepend: Vec<char>,
    /// Letters that may be placed after the fragment
    pub append: Vec<char>,
}

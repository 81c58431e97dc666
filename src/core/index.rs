//! The query surface shared by every dictionary index
//!
//! The engine only talks to a [`WordIndex`]; the trie-backed
//! [`WordDictionary`](super::WordDictionary) and the suffix-array backed
//! [`WordListDS`](super::WordListDS) are interchangeable behind it.

use super::{EdgeLetters, LetterGroups, LetterSet};
use std::collections::BTreeSet;

/// Read-only word index queried by the game engine
///
/// Implementations are immutable once built and must be `Sync`, since the
/// embedded scan shares `&self` across worker threads.
pub trait WordIndex: Sync {
    /// Number of indexed words, duplicates included
    fn word_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.word_count() == 0
    }

    /// Exact membership test
    fn contains_word(&self, word: &str) -> bool;

    /// All distinct words starting with `prefix` (order unspecified)
    fn find_words_with_prefix(&self, prefix: &str) -> Vec<String>;

    /// All distinct words ending with `suffix` (order unspecified)
    fn find_words_with_suffix(&self, suffix: &str) -> Vec<String>;

    /// Letters that follow `prefix` at the start of some word
    fn next_letters(&self, prefix: &str) -> LetterSet;

    /// Letters that precede `suffix` at the end of some word
    fn previous_letters(&self, suffix: &str) -> LetterSet;

    /// First and last letters over the whole corpus
    fn edge_letters(&self) -> &EdgeLetters;

    /// Scan the corpus for every occurrence of `fragment`
    ///
    /// The work is split into at most `workers` partitions scanned in
    /// parallel; each yields its own [`ScanOutcome`] and the partial results
    /// are merged once all partitions are done. An empty fragment matches
    /// nothing.
    fn scan_embedded(&self, fragment: &str, workers: usize) -> ScanOutcome;

    /// Classify the words containing `fragment` by where it sits in them
    fn suggestion_groups(&self, fragment: &str) -> SuggestionGroups;

    /// Up to `limit` words strictly longer than `prefix` that start with it,
    /// the first ones in lexicographic order
    fn prefix_completions(&self, prefix: &str, limit: usize) -> Vec<String> {
        let mut words = self.find_words_with_prefix(prefix);
        words.sort_unstable();
        words
            .into_iter()
            .filter(|word| word.len() > prefix.len())
            .take(limit)
            .collect()
    }

    /// Up to `limit` words strictly longer than `suffix` that end with it
    ///
    /// Ordered by reversed spelling, so words sharing a longer ending come
    /// first together. This is the walk order of a reverse trie.
    fn suffix_completions(&self, suffix: &str, limit: usize) -> Vec<String> {
        let mut words = self.find_words_with_suffix(suffix);
        words.sort_unstable_by(|a, b| a.chars().rev().cmp(b.chars().rev()));
        words
            .into_iter()
            .filter(|word| word.len() > suffix.len())
            .take(limit)
            .collect()
    }
}

/// Result of scanning (part of) a corpus for a fragment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Letters found immediately before an occurrence
    pub prefix: LetterSet,
    /// Letters found immediately after an occurrence
    pub suffix: LetterSet,
    /// Whether any occurrence was found at all
    pub found: bool,
}

impl ScanOutcome {
    /// Combine two partial outcomes
    ///
    /// Union and OR are commutative and associative, so the merged result does
    /// not depend on how the corpus was partitioned or in which order the
    /// partitions finished.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            prefix: self.prefix.union(other.prefix),
            suffix: self.suffix.union(other.suffix),
            found: self.found || other.found,
        }
    }

    /// Record the letters around an occurrence spanning `start..end` of `word`
    pub fn record(&mut self, word: &str, start: usize, end: usize) {
        self.found = true;
        if let Some(before) = word[..start].chars().next_back() {
            self.prefix.insert(before);
        }
        if let Some(after) = word[end..].chars().next() {
            self.suffix.insert(after);
        }
    }

    /// Sorted letter lists
    #[must_use]
    pub fn groups(&self) -> LetterGroups {
        LetterGroups {
            prepend: self.prefix.sorted(),
            append: self.suffix.sorted(),
        }
    }
}

/// Words containing a fragment, grouped by the fragment's position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionGroups {
    /// Words starting with the fragment, reachable by appending
    pub append: Vec<String>,
    /// Words ending with the fragment, reachable by prepending
    pub prepend: Vec<String>,
    /// Words containing the fragment strictly inside, or equal to it
    pub middle: Vec<String>,
}

impl SuggestionGroups {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.append.is_empty() && self.prepend.is_empty() && self.middle.is_empty()
    }
}

/// Accumulates [`SuggestionGroups`] occurrence by occurrence
#[derive(Debug, Default)]
pub(crate) struct GroupCollector {
    append: BTreeSet<String>,
    prepend: BTreeSet<String>,
    middle: BTreeSet<String>,
}

impl GroupCollector {
    /// Classify `word`, which contains `fragment` at byte offset `start`
    pub(crate) fn classify(&mut self, word: &str, fragment: &str, start: usize) {
        let group = if word == fragment {
            &mut self.middle
        } else if start == 0 {
            &mut self.append
        } else if start + fragment.len() == word.len() {
            &mut self.prepend
        } else {
            &mut self.middle
        };
        if !group.contains(word) {
            group.insert(word.to_string());
        }
    }

    pub(crate) fn finish(self) -> SuggestionGroups {
        SuggestionGroups {
            append: self.append.into_iter().collect(),
            prepend: self.prepend.into_iter().collect(),
            middle: self.middle.into_iter().collect(),
        }
    }
}

/// Byte offsets of every occurrence of `needle` in `haystack`, overlaps included
pub(crate) fn occurrences<'a>(haystack: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
    let mut from = 0;
    std::iter::from_fn(move || {
        if needle.is_empty() {
            return None;
        }
        let start = from + haystack[from..].find(needle)?;
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
        Some(start)
    })
}

/// Items per partition when splitting `len` items across `workers`
pub(crate) fn partition_size(len: usize, workers: usize) -> usize {
    len.div_ceil(workers.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occurrences_include_overlaps() {
        let found: Vec<usize> = occurrences("banana", "ana").collect();
        assert_eq!(found, vec![1, 3]);
    }

    #[test]
    fn occurrences_of_empty_needle() {
        assert_eq!(occurrences("band", "").count(), 0);
    }

    #[test]
    fn occurrences_absent() {
        assert_eq!(occurrences("band", "x").count(), 0);
        assert_eq!(occurrences("", "a").count(), 0);
    }

    #[test]
    fn record_reads_neighbours() {
        let mut outcome = ScanOutcome::default();
        outcome.record("band", 1, 3);
        assert!(outcome.found);
        assert_eq!(outcome.prefix.sorted(), vec!['b']);
        assert_eq!(outcome.suffix.sorted(), vec!['d']);
    }

    #[test]
    fn record_at_word_edges() {
        let mut outcome = ScanOutcome::default();
        outcome.record("an", 0, 2);
        assert!(outcome.found);
        assert!(outcome.prefix.is_empty());
        assert!(outcome.suffix.is_empty());
    }

    #[test]
    fn merge_unions_and_ors() {
        let mut left = ScanOutcome::default();
        left.record("band", 1, 3);
        let right = ScanOutcome::default();

        let merged = left.clone().merge(right.clone());
        assert_eq!(merged, right.merge(left));
        assert!(merged.found);
        assert_eq!(merged.groups().prepend, vec!['b']);
    }

    #[test]
    fn collector_classifies_positions() {
        let mut collector = GroupCollector::default();
        collector.classify("pen", "pen", 0);
        collector.classify("penguin", "pen", 0);
        collector.classify("open", "pen", 1);
        collector.classify("spent", "pen", 1);
        collector.classify("penguin", "pen", 0);

        let groups = collector.finish();
        assert_eq!(groups.append, vec!["penguin"]);
        assert_eq!(groups.prepend, vec!["open"]);
        assert_eq!(groups.middle, vec!["pen", "spent"]);
    }

    #[test]
    fn partition_size_covers_everything() {
        assert_eq!(partition_size(10, 3), 4);
        assert_eq!(partition_size(10, 0), 10);
        assert_eq!(partition_size(0, 4), 1);
        assert_eq!(partition_size(3, 8), 1);
    }
}

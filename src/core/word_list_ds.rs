//! Suffix-array word index for large corpora
//!
//! Every word is joined into one buffer with [`SEPARATOR`] between words and a
//! suffix array is built over it. All queries reduce to occurrence lookups in
//! that buffer, so no per-word tree is ever allocated.

use super::index::{GroupCollector, ScanOutcome, SuggestionGroups, WordIndex, partition_size};
use super::suffix_array::SuffixArray;
use super::{EdgeLetters, LetterGroups, LetterSet};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::time::Instant;
use tracing::{info, trace, warn};

/// Separator placed between words in the buffer
pub const SEPARATOR: char = '$';

const SEPARATOR_BYTE: u8 = SEPARATOR as u8;

/// Word index backed by a suffix array over the joined corpus
#[derive(Debug, Clone, Default)]
pub struct WordListDS {
    data: String,
    index: SuffixArray,
    initial_groups: LetterGroups,
    edges: EdgeLetters,
    word_count: usize,
    /// No word byte sorts below the separator, so suffix order is word order
    ordered: bool,
}

impl WordListDS {
    /// Build the index from a corpus
    ///
    /// Words are lower-cased. Empty words and words containing the separator
    /// are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_builder::core::WordListDS;
    ///
    /// let ds = WordListDS::new(["pen", "penguin", "open"]);
    /// assert!(ds.contains("pen"));
    /// assert!(!ds.contains("peng"));
    ///
    /// let groups = ds.get_groups("pen");
    /// assert_eq!(groups.prepend, vec!['o']);
    /// assert_eq!(groups.append, vec!['g']);
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let started = Instant::now();
        let mut data = String::new();
        let mut word_count = 0_usize;
        let mut skipped = 0_usize;
        let mut edges = EdgeLetters::default();
        let mut prepend = BTreeSet::new();
        let mut append = BTreeSet::new();

        for word in words {
            let word = word.as_ref().to_lowercase();
            if word.is_empty() || word.contains(SEPARATOR) {
                skipped += 1;
                continue;
            }

            let letters: Vec<char> = word.chars().collect();
            for (i, &letter) in letters.iter().enumerate() {
                if i + 1 < letters.len() {
                    prepend.insert(letter);
                }
                if i > 0 {
                    append.insert(letter);
                }
            }
            edges.record(&word);

            if word_count > 0 {
                data.push(SEPARATOR);
            }
            data.push_str(&word);
            word_count += 1;
        }

        if skipped > 0 {
            warn!("skipped {skipped} empty or separator-containing corpus entries");
        }

        let index = SuffixArray::new(data.as_bytes());
        let ordered = data.bytes().all(|b| b >= SEPARATOR_BYTE);
        info!(
            "built suffix-array index: {word_count} words, {} bytes in {:.3}s",
            data.len(),
            started.elapsed().as_secs_f64()
        );

        Self {
            data,
            index,
            initial_groups: LetterGroups {
                prepend: prepend.into_iter().collect(),
                append: append.into_iter().collect(),
            },
            edges,
            word_count,
            ordered,
        }
    }

    /// The joined corpus buffer
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Letters adjacent to occurrences of `s`
    ///
    /// For an empty query this is the cached answer computed at construction:
    /// every letter that has a right neighbour inside its word (prepend group)
    /// and every letter that has a left neighbour (append group).
    #[must_use]
    pub fn get_groups(&self, s: &str) -> LetterGroups {
        if s.is_empty() {
            return self.initial_groups.clone();
        }
        self.scan_positions(&self.positions(s), s).groups()
    }

    /// Words containing `s`, grouped by where `s` sits in them
    #[must_use]
    pub fn get_suggestion_groups(&self, s: &str) -> SuggestionGroups {
        let mut collector = GroupCollector::default();
        for p in self.positions(s) {
            let (start, end) = self.word_bounds(p, p + s.len());
            collector.classify(&self.data[start..end], s, p - start);
        }
        collector.finish()
    }

    /// Whether `word` is one of the indexed words
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() || word.contains(SEPARATOR) {
            return false;
        }

        let pattern = format!("{word}{SEPARATOR}");
        if self
            .index
            .matching(self.data.as_bytes(), pattern.as_bytes())
            .iter()
            .any(|&p| self.is_word_start(p))
        {
            return true;
        }

        // The last word has no trailing separator
        self.data.ends_with(word) && self.is_word_start(self.data.len() - word.len())
    }

    /// Sorted occurrences of a fragment; one spanning a separator never counts
    fn positions(&self, fragment: &str) -> Vec<usize> {
        if fragment.contains(SEPARATOR) {
            return Vec::new();
        }
        self.index.occurrences(self.data.as_bytes(), fragment.as_bytes())
    }

    fn is_word_start(&self, p: usize) -> bool {
        p == 0 || self.data.as_bytes()[p - 1] == SEPARATOR_BYTE
    }

    fn is_word_end(&self, end: usize) -> bool {
        end == self.data.len() || self.data.as_bytes()[end] == SEPARATOR_BYTE
    }

    /// Bounds of the word containing the span `start..end`
    fn word_bounds(&self, start: usize, end: usize) -> (usize, usize) {
        let word_start = self.data[..start].rfind(SEPARATOR).map_or(0, |i| i + 1);
        let word_end = self.data[end..].find(SEPARATOR).map_or(self.data.len(), |i| end + i);
        (word_start, word_end)
    }

    fn word_at(&self, start: usize, end: usize) -> &str {
        let (word_start, word_end) = self.word_bounds(start, end);
        &self.data[word_start..word_end]
    }

    fn letter_before(&self, p: usize) -> Option<char> {
        self.data[..p].chars().next_back().filter(|&c| c != SEPARATOR)
    }

    fn letter_after(&self, end: usize) -> Option<char> {
        self.data[end..].chars().next().filter(|&c| c != SEPARATOR)
    }

    fn scan_positions(&self, positions: &[usize], fragment: &str) -> ScanOutcome {
        let mut outcome = ScanOutcome {
            found: !positions.is_empty(),
            ..ScanOutcome::default()
        };
        for &p in positions {
            outcome.prefix.extend(self.letter_before(p));
            outcome.suffix.extend(self.letter_after(p + fragment.len()));
        }
        outcome
    }

    fn all_words(&self) -> BTreeSet<&str> {
        if self.data.is_empty() {
            return BTreeSet::new();
        }
        self.data.split(SEPARATOR).collect()
    }
}

impl WordIndex for WordListDS {
    fn word_count(&self) -> usize {
        self.word_count
    }

    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }

    fn find_words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let words: BTreeSet<&str> = if prefix.is_empty() {
            self.all_words()
        } else {
            self.positions(prefix)
                .into_iter()
                .filter(|&p| self.is_word_start(p))
                .map(|p| self.word_at(p, p + prefix.len()))
                .collect()
        };
        words.into_iter().map(String::from).collect()
    }

    fn find_words_with_suffix(&self, suffix: &str) -> Vec<String> {
        let words: BTreeSet<&str> = if suffix.is_empty() {
            self.all_words()
        } else {
            self.positions(suffix)
                .into_iter()
                .filter(|&p| self.is_word_end(p + suffix.len()))
                .map(|p| self.word_at(p, p + suffix.len()))
                .collect()
        };
        words.into_iter().map(String::from).collect()
    }

    fn next_letters(&self, prefix: &str) -> LetterSet {
        if prefix.is_empty() {
            return self.edges.starts.clone();
        }
        self.positions(prefix)
            .into_iter()
            .filter(|&p| self.is_word_start(p))
            .filter_map(|p| self.letter_after(p + prefix.len()))
            .collect()
    }

    fn previous_letters(&self, suffix: &str) -> LetterSet {
        if suffix.is_empty() {
            return self.edges.ends.clone();
        }
        self.positions(suffix)
            .into_iter()
            .filter(|&p| self.is_word_end(p + suffix.len()))
            .filter_map(|p| self.letter_before(p))
            .collect()
    }

    fn edge_letters(&self) -> &EdgeLetters {
        &self.edges
    }

    fn scan_embedded(&self, fragment: &str, workers: usize) -> ScanOutcome {
        let positions = self.positions(fragment);
        if positions.is_empty() {
            return ScanOutcome::default();
        }

        positions
            .par_chunks(partition_size(positions.len(), workers))
            .map(|part| {
                let outcome = self.scan_positions(part, fragment);
                trace!(occurrences = part.len(), "scanned partition for {fragment:?}");
                outcome
            })
            .reduce(ScanOutcome::default, ScanOutcome::merge)
    }

    fn suggestion_groups(&self, fragment: &str) -> SuggestionGroups {
        self.get_suggestion_groups(fragment)
    }

    fn prefix_completions(&self, prefix: &str, limit: usize) -> Vec<String> {
        if limit == 0 || prefix.contains(SEPARATOR) {
            return Vec::new();
        }
        if prefix.is_empty() || !self.ordered {
            return self
                .find_words_with_prefix(prefix)
                .into_iter()
                .filter(|word| word.len() > prefix.len())
                .take(limit)
                .collect();
        }

        // Copies of one word are adjacent in the range
        let mut words: Vec<&str> = Vec::with_capacity(limit);
        for &p in self.index.matching(self.data.as_bytes(), prefix.as_bytes()) {
            if !self.is_word_start(p) {
                continue;
            }
            let word = self.word_at(p, p + prefix.len());
            if word.len() > prefix.len() && words.last() != Some(&word) {
                words.push(word);
                if words.len() == limit {
                    break;
                }
            }
        }
        words.into_iter().map(String::from).collect()
    }

    fn suffix_completions(&self, suffix: &str, limit: usize) -> Vec<String> {
        if limit == 0 {
            return Vec::new();
        }
        let mut words: Vec<&str> = if suffix.is_empty() {
            self.all_words().into_iter().collect()
        } else {
            self.positions(suffix)
                .into_iter()
                .filter(|&p| self.is_word_end(p + suffix.len()))
                .map(|p| self.word_at(p, p + suffix.len()))
                .collect()
        };
        words.retain(|word| word.len() > suffix.len());
        words.sort_unstable_by(|a, b| a.chars().rev().cmp(b.chars().rev()));
        words.dedup();
        words.into_iter().take(limit).map(String::from).collect()
    }
}

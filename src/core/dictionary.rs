//! Trie-backed word dictionary
//!
//! Holds a membership set, a forward trie, a reverse trie and the ordered word
//! list. Built once and never mutated afterwards; loading a different corpus
//! means building a new dictionary.

use super::index::{GroupCollector, ScanOutcome, SuggestionGroups, WordIndex, occurrences, partition_size};
use super::trie::{Trie, reversed};
use super::{EdgeLetters, LetterSet};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::Instant;
use tracing::{info, trace, warn};

/// Word dictionary answering prefix, suffix and membership queries
#[derive(Debug, Clone, Default)]
pub struct WordDictionary {
    word_set: FxHashSet<String>,
    forward_trie: Trie,
    reverse_trie: Trie,
    word_list: Vec<String>,
    edges: EdgeLetters,
}

impl WordDictionary {
    /// Build a dictionary from a corpus
    ///
    /// Every word is lower-cased. The membership set and both tries are
    /// deduplicated, while the word list keeps duplicates in corpus order.
    /// Empty entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_builder::core::WordDictionary;
    ///
    /// let dict = WordDictionary::new(["Cat", "car", "cart"]);
    /// assert!(dict.contains_word("cat"));
    /// assert_eq!(dict.find_words_with_suffix("rt"), vec!["cart"]);
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let started = Instant::now();
        let mut dict = Self::default();
        let mut skipped = 0_usize;

        for word in words {
            let word = word.as_ref().to_lowercase();
            if word.is_empty() {
                skipped += 1;
                continue;
            }
            dict.forward_trie.insert(&word);
            dict.reverse_trie.insert(&reversed(&word));
            dict.edges.record(&word);
            dict.word_set.insert(word.clone());
            dict.word_list.push(word);
        }

        if skipped > 0 {
            warn!("skipped {skipped} empty corpus entries");
        }
        info!(
            "built trie dictionary: {} words ({} distinct) in {:.3}s",
            dict.word_list.len(),
            dict.word_set.len(),
            started.elapsed().as_secs_f64()
        );

        dict
    }

    /// Exact membership test
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.word_set.contains(word)
    }

    /// All words starting with `prefix`
    #[must_use]
    pub fn find_words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.forward_trie.keys_with_prefix(prefix)
    }

    /// All words ending with `suffix`
    #[must_use]
    pub fn find_words_with_suffix(&self, suffix: &str) -> Vec<String> {
        self.reverse_trie
            .keys_with_prefix(&reversed(suffix))
            .iter()
            .map(|word| reversed(word))
            .collect()
    }

    #[must_use]
    pub const fn forward_trie(&self) -> &Trie {
        &self.forward_trie
    }

    /// Trie over the reversed words
    #[must_use]
    pub const fn reverse_trie(&self) -> &Trie {
        &self.reverse_trie
    }

    /// The corpus in load order, duplicates included
    #[must_use]
    pub fn word_list(&self) -> &[String] {
        &self.word_list
    }
}

fn scan_partition(words: &[String], fragment: &str) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    for word in words {
        for start in occurrences(word, fragment) {
            outcome.record(word, start, start + fragment.len());
        }
    }
    outcome
}

impl WordIndex for WordDictionary {
    fn word_count(&self) -> usize {
        self.word_list.len()
    }

    fn contains_word(&self, word: &str) -> bool {
        Self::contains_word(self, word)
    }

    fn find_words_with_prefix(&self, prefix: &str) -> Vec<String> {
        Self::find_words_with_prefix(self, prefix)
    }

    fn find_words_with_suffix(&self, suffix: &str) -> Vec<String> {
        Self::find_words_with_suffix(self, suffix)
    }

    fn next_letters(&self, prefix: &str) -> LetterSet {
        self.forward_trie.next_letters(prefix)
    }

    fn previous_letters(&self, suffix: &str) -> LetterSet {
        self.reverse_trie.next_letters(&reversed(suffix))
    }

    fn edge_letters(&self) -> &EdgeLetters {
        &self.edges
    }

    fn scan_embedded(&self, fragment: &str, workers: usize) -> ScanOutcome {
        if fragment.is_empty() || self.word_list.is_empty() {
            return ScanOutcome::default();
        }

        self.word_list
            .par_chunks(partition_size(self.word_list.len(), workers))
            .map(|part| {
                let outcome = scan_partition(part, fragment);
                trace!(
                    words = part.len(),
                    found = outcome.found,
                    "scanned partition for {fragment:?}"
                );
                outcome
            })
            .reduce(ScanOutcome::default, ScanOutcome::merge)
    }

    fn suggestion_groups(&self, fragment: &str) -> SuggestionGroups {
        let mut collector = GroupCollector::default();
        for word in &self.word_list {
            for start in occurrences(word, fragment) {
                collector.classify(word, fragment, start);
            }
        }
        collector.finish()
    }

    fn prefix_completions(&self, prefix: &str, limit: usize) -> Vec<String> {
        // The prefix itself comes first when it is a word
        self.forward_trie
            .keys_with_prefix_limited(prefix, limit.saturating_add(1))
            .into_iter()
            .filter(|word| word.len() > prefix.len())
            .take(limit)
            .collect()
    }

    fn suffix_completions(&self, suffix: &str, limit: usize) -> Vec<String> {
        self.reverse_trie
            .keys_with_prefix_limited(&reversed(suffix), limit.saturating_add(1))
            .iter()
            .filter(|word| word.len() > suffix.len())
            .take(limit)
            .map(|word| reversed(word))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &[&str] = &[
        "cat", "car", "cart", "at", "band", "and", "an", "scan", "Banana", "cat",
    ];

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort();
        words
    }

    fn naive<F: Fn(&str) -> bool>(keep: F) -> Vec<String> {
        let mut words: Vec<String> = CORPUS
            .iter()
            .map(|w| w.to_lowercase())
            .filter(|w| keep(w))
            .collect();
        words.sort();
        words.dedup();
        words
    }

    #[test]
    fn contains_every_corpus_word() {
        let dict = WordDictionary::new(CORPUS);
        for word in CORPUS {
            assert!(dict.contains_word(&word.to_lowercase()), "missing {word}");
        }
    }

    #[test]
    fn rejects_absent_words() {
        let dict = WordDictionary::new(CORPUS);
        assert!(!dict.contains_word("ca"));
        assert!(!dict.contains_word("carts"));
        assert!(!dict.contains_word(""));
        assert!(!dict.contains_word("Banana"));
    }

    #[test]
    fn word_list_keeps_duplicates() {
        let dict = WordDictionary::new(CORPUS);
        assert_eq!(dict.word_list().len(), CORPUS.len());
        assert_eq!(dict.word_list()[8], "banana");
        assert_eq!(dict.forward_trie().len(), CORPUS.len() - 1);
    }

    #[test]
    fn prefix_queries_match_naive_filter() {
        let dict = WordDictionary::new(CORPUS);
        for prefix in ["", "c", "ca", "car", "cart", "b", "ban", "x", "an"] {
            let found = sorted(dict.find_words_with_prefix(prefix));
            assert!(found.iter().all(|w| w.starts_with(prefix)));
            assert_eq!(found, naive(|w| w.starts_with(prefix)), "prefix {prefix:?}");
        }
    }

    #[test]
    fn suffix_queries_match_naive_filter() {
        let dict = WordDictionary::new(CORPUS);
        for suffix in ["", "t", "at", "an", "nd", "na", "q", "cart"] {
            let found = sorted(dict.find_words_with_suffix(suffix));
            assert!(found.iter().all(|w| w.ends_with(suffix)));
            assert_eq!(found, naive(|w| w.ends_with(suffix)), "suffix {suffix:?}");
        }
    }

    #[test]
    fn next_and_previous_letters() {
        let dict = WordDictionary::new(CORPUS);
        assert_eq!(dict.next_letters("ca").sorted(), vec!['r', 't']);
        assert_eq!(dict.previous_letters("at").sorted(), vec!['c']);
        assert_eq!(dict.previous_letters("an").sorted(), vec!['c']);
        assert!(dict.previous_letters("zz").is_empty());
    }

    #[test]
    fn edge_letters_recorded_at_build() {
        let dict = WordDictionary::new(["cat", "car", "cart", "at"]);
        assert_eq!(dict.edge_letters().starts.sorted(), vec!['a', 'c']);
        assert_eq!(dict.edge_letters().ends.sorted(), vec!['r', 't']);
    }

    #[test]
    fn embedded_scan_finds_inner_neighbours() {
        let dict = WordDictionary::new(["band"]);
        let outcome = dict.scan_embedded("an", 4);
        assert!(outcome.found);
        assert_eq!(outcome.prefix.sorted(), vec!['b']);
        assert_eq!(outcome.suffix.sorted(), vec!['d']);
    }

    #[test]
    fn embedded_scan_independent_of_workers() {
        let dict = WordDictionary::new(CORPUS);
        for fragment in ["a", "an", "at", "n", "zz"] {
            let single = dict.scan_embedded(fragment, 1);
            for workers in [2, 3, 7, 64] {
                assert_eq!(single, dict.scan_embedded(fragment, workers), "{fragment} x{workers}");
            }
        }
    }

    #[test]
    fn embedded_scan_of_empty_fragment() {
        let dict = WordDictionary::new(CORPUS);
        assert_eq!(dict.scan_embedded("", 4), ScanOutcome::default());
        assert!(!WordDictionary::new(Vec::<String>::new()).scan_embedded("a", 4).found);
    }

    #[test]
    fn completions_are_strictly_longer() {
        let dict = WordDictionary::new(CORPUS);
        assert_eq!(dict.prefix_completions("car", 5), vec!["cart"]);
        assert_eq!(dict.prefix_completions("ca", 1), vec!["car"]);
        assert_eq!(sorted(dict.suffix_completions("an", 5)), vec!["scan"]);
        assert!(dict.suffix_completions("scan", 5).is_empty());
    }

    #[test]
    fn suggestion_groups_over_word_list() {
        let dict = WordDictionary::new(CORPUS);
        let groups = dict.suggestion_groups("an");
        assert_eq!(groups.append, vec!["and"]);
        assert_eq!(groups.prepend, vec!["scan"]);
        assert_eq!(groups.middle, vec!["an", "banana", "band"]);
    }
}

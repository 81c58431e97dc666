//! Runtime selection between the index implementations

use super::index::{ScanOutcome, SuggestionGroups, WordIndex};
use super::{EdgeLetters, LetterSet, WordDictionary, WordListDS};

/// Corpus size from which `auto` picks the suffix-array index
pub const SUFFIX_ARRAY_THRESHOLD: usize = 200_000;

/// Enum wrapper for all index types
///
/// Allows runtime selection of the index while keeping static dispatch.
#[derive(Debug, Clone)]
pub enum IndexType {
    /// Forward and reverse tries plus the word list
    Trie(WordDictionary),
    /// Suffix array over the joined corpus
    SuffixArray(WordListDS),
}

impl IndexType {
    /// Build an index from its name
    ///
    /// Supported names: "trie", "suffix-array", "auto".
    /// Defaults to auto if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, words: &[String]) -> Self {
        match name {
            "trie" => Self::Trie(WordDictionary::new(words)),
            "suffix-array" | "suffix" | "sa" => Self::SuffixArray(WordListDS::new(words)),
            _ => Self::auto(words),
        }
    }

    /// Pick the index by corpus size
    #[must_use]
    pub fn auto(words: &[String]) -> Self {
        if words.len() >= SUFFIX_ARRAY_THRESHOLD {
            Self::SuffixArray(WordListDS::new(words))
        } else {
            Self::Trie(WordDictionary::new(words))
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Trie(_) => "trie",
            Self::SuffixArray(_) => "suffix-array",
        }
    }
}

impl WordIndex for IndexType {
    fn word_count(&self) -> usize {
        match self {
            Self::Trie(index) => index.word_count(),
            Self::SuffixArray(index) => index.word_count(),
        }
    }

    fn contains_word(&self, word: &str) -> bool {
        match self {
            Self::Trie(index) => index.contains_word(word),
            Self::SuffixArray(index) => index.contains_word(word),
        }
    }

    fn find_words_with_prefix(&self, prefix: &str) -> Vec<String> {
        match self {
            Self::Trie(index) => index.find_words_with_prefix(prefix),
            Self::SuffixArray(index) => WordIndex::find_words_with_prefix(index, prefix),
        }
    }

    fn find_words_with_suffix(&self, suffix: &str) -> Vec<String> {
        match self {
            Self::Trie(index) => index.find_words_with_suffix(suffix),
            Self::SuffixArray(index) => WordIndex::find_words_with_suffix(index, suffix),
        }
    }

    fn next_letters(&self, prefix: &str) -> LetterSet {
        match self {
            Self::Trie(index) => index.next_letters(prefix),
            Self::SuffixArray(index) => index.next_letters(prefix),
        }
    }

    fn previous_letters(&self, suffix: &str) -> LetterSet {
        match self {
            Self::Trie(index) => index.previous_letters(suffix),
            Self::SuffixArray(index) => index.previous_letters(suffix),
        }
    }

    fn edge_letters(&self) -> &EdgeLetters {
        match self {
            Self::Trie(index) => index.edge_letters(),
            Self::SuffixArray(index) => index.edge_letters(),
        }
    }

    fn scan_embedded(&self, fragment: &str, workers: usize) -> ScanOutcome {
        match self {
            Self::Trie(index) => index.scan_embedded(fragment, workers),
            Self::SuffixArray(index) => index.scan_embedded(fragment, workers),
        }
    }

    fn suggestion_groups(&self, fragment: &str) -> SuggestionGroups {
        match self {
            Self::Trie(index) => index.suggestion_groups(fragment),
            Self::SuffixArray(index) => index.suggestion_groups(fragment),
        }
    }

    fn prefix_completions(&self, prefix: &str, limit: usize) -> Vec<String> {
        match self {
            Self::Trie(index) => index.prefix_completions(prefix, limit),
            Self::SuffixArray(index) => index.prefix_completions(prefix, limit),
        }
    }

    fn suffix_completions(&self, suffix: &str, limit: usize) -> Vec<String> {
        match self {
            Self::Trie(index) => index.suffix_completions(suffix, limit),
            Self::SuffixArray(index) => index.suffix_completions(suffix, limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<String> {
        ["cat", "car", "cart", "at", "scat"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn from_name_selects_index() {
        let words = corpus();
        assert_eq!(IndexType::from_name("trie", &words).name(), "trie");
        assert_eq!(IndexType::from_name("suffix-array", &words).name(), "suffix-array");
    }

    #[test]
    fn unknown_name_falls_back_to_auto() {
        let words = corpus();
        assert_eq!(IndexType::from_name("bogus", &words).name(), "trie");
        assert_eq!(IndexType::from_name("auto", &words).name(), "trie");
    }

    #[test]
    fn both_variants_answer_alike() {
        let words = corpus();
        let trie = IndexType::from_name("trie", &words);
        let sa = IndexType::from_name("suffix-array", &words);

        assert_eq!(trie.word_count(), sa.word_count());
        for query in ["", "c", "ca", "at", "t", "scat", "x"] {
            assert_eq!(trie.contains_word(query), sa.contains_word(query));
            assert_eq!(trie.next_letters(query), sa.next_letters(query));
            assert_eq!(trie.previous_letters(query), sa.previous_letters(query));
            assert_eq!(trie.scan_embedded(query, 2), sa.scan_embedded(query, 3));
            assert_eq!(
                trie.prefix_completions(query, 5),
                sa.prefix_completions(query, 5),
                "prefix completions {query:?}"
            );
            assert_eq!(
                trie.suffix_completions(query, 5),
                sa.suffix_completions(query, 5),
                "suffix completions {query:?}"
            );
        }
        assert_eq!(trie.edge_letters(), sa.edge_letters());
    }
}

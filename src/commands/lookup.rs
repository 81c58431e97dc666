//! Fragment lookup command
//!
//! Reports everything the index knows about a fragment: membership, words it
//! starts or ends, the letters around its occurrences and how the words
//! containing it group.

use crate::core::{IndexType, LetterGroups, SuggestionGroups, WordIndex};

/// Result of looking up a fragment
pub struct LookupResult {
    pub fragment: String,
    pub index_name: &'static str,
    pub is_word: bool,
    /// Words starting with the fragment, sorted and capped
    pub prefix_matches: Vec<String>,
    pub total_prefix_matches: usize,
    /// Words ending with the fragment, sorted and capped
    pub suffix_matches: Vec<String>,
    pub total_suffix_matches: usize,
    /// Letters found around any occurrence of the fragment
    pub groups: LetterGroups,
    pub suggestions: SuggestionGroups,
}

/// Look up a fragment in the index
///
/// The fragment is trimmed and lower-cased first. `limit` caps the listed
/// prefix and suffix matches; totals are always reported in full.
///
/// # Errors
///
/// Returns an error if the fragment is empty.
pub fn lookup_fragment(
    index: &IndexType,
    fragment: &str,
    limit: usize,
    workers: usize,
) -> Result<LookupResult, String> {
    let fragment = fragment.trim().to_lowercase();
    if fragment.is_empty() {
        return Err("Fragment must not be empty".to_string());
    }

    let (prefix_matches, total_prefix_matches) = capped(index.find_words_with_prefix(&fragment), limit);
    let (suffix_matches, total_suffix_matches) = capped(index.find_words_with_suffix(&fragment), limit);

    Ok(LookupResult {
        is_word: index.contains_word(&fragment),
        index_name: index.name(),
        prefix_matches,
        total_prefix_matches,
        suffix_matches,
        total_suffix_matches,
        groups: index.scan_embedded(&fragment, workers).groups(),
        suggestions: index.suggestion_groups(&fragment),
        fragment,
    })
}

fn capped(mut words: Vec<String>, limit: usize) -> (Vec<String>, usize) {
    let total = words.len();
    words.sort_unstable();
    words.truncate(limit);
    (words, total)
}

//! Recomputing the candidate sets of a state
//!
//! Three searches feed each update:
//!
//! 1. a forward walk from the answer as a word prefix, giving suffix letters
//! 2. a reverse walk from the answer as a word suffix, giving prefix letters
//! 3. an embedded scan of the whole corpus, giving the letters around every
//!    occurrence of the answer inside longer words
//!
//! The scan is partitioned across the configured workers and merged once all
//! partitions report back. The answer is a dead end only when all three come
//! back empty.

use super::{Engine, WordBuilderState};
use crate::core::WordIndex;
use rustc_hash::FxHashSet;
use std::time::Instant;
use tracing::debug;

/// Suggestion shown for a complete word or an answer nothing can extend
pub const DEAD_END_SUGGESTION: &str =
    "This isn't a valid prefix or suffix of any word. Try removing some letters.";

impl<D: WordIndex + ?Sized> Engine<'_, D> {
    /// Recompute sets, completions and suggestion for `state`'s answer
    ///
    /// Answer, step and validity are carried over unchanged; everything else is
    /// derived from scratch, so the result depends only on the answer and the
    /// index.
    #[must_use]
    pub fn update_sets(&self, state: &WordBuilderState) -> WordBuilderState {
        let started = Instant::now();
        let answer = state.answer.as_str();
        let mut next = WordBuilderState {
            answer: state.answer.clone(),
            step: state.step,
            is_valid_word: state.is_valid_word,
            ..WordBuilderState::default()
        };

        if answer.is_empty() {
            let edges = self.dictionary.edge_letters();
            next.suffix_set = edges.starts.clone();
            next.prefix_set = edges.ends.clone();
            debug!(
                prefix = next.prefix_set.len(),
                suffix = next.suffix_set.len(),
                "seeded empty answer from edge letters"
            );
            return next;
        }

        let limit = self.config.completion_limit;
        let mut completions = Vec::new();

        let forward = self.dictionary.next_letters(answer);
        let forward_found = !forward.is_empty();
        if forward_found {
            completions.extend(self.dictionary.prefix_completions(answer, limit));
        }

        let reverse = self.dictionary.previous_letters(answer);
        let reverse_found = !reverse.is_empty();
        if reverse_found {
            completions.extend(self.dictionary.suffix_completions(answer, limit));
        }

        let embedded = self.dictionary.scan_embedded(answer, self.config.workers);
        let found = forward_found || reverse_found || embedded.found;

        next.suffix_set = forward.union(embedded.suffix);
        next.prefix_set = reverse.union(embedded.prefix);

        let mut seen = FxHashSet::default();
        completions.retain(|word: &String| seen.insert(word.clone()));
        next.valid_completions = completions;

        if !next.valid_completions.is_empty() && !next.is_valid_word {
            next.valid_completions.sort_by_key(|word| word.chars().count());
            if let Some(suggestion) = suggest(&next.valid_completions[0], answer) {
                next.suggestion = suggestion;
            }
        }

        if next.is_valid_word || !found {
            next.suggestion = DEAD_END_SUGGESTION.to_string();
        }

        debug!(
            answer,
            prefix = next.prefix_set.len(),
            suffix = next.suffix_set.len(),
            completions = next.valid_completions.len(),
            found,
            "updated sets in {:.3}ms",
            started.elapsed().as_secs_f64() * 1000.0
        );

        next
    }
}

/// A one-letter hint towards the shortest completion
fn suggest(shortest: &str, answer: &str) -> Option<String> {
    if let Some(next) = shortest.strip_prefix(answer).and_then(|rest| rest.chars().next()) {
        return Some(format!("Try adding '{next}' as suffix"));
    }
    match shortest.find(answer) {
        Some(at) if at > 0 => shortest[..at]
            .chars()
            .next_back()
            .map(|before| format!("Try adding '{before}' as prefix")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{WordDictionary, WordListDS};
    use crate::engine::EngineConfig;

    #[test]
    fn suggest_prefers_suffix() {
        assert_eq!(suggest("cart", "car").as_deref(), Some("Try adding 't' as suffix"));
        assert_eq!(suggest("scat", "cat").as_deref(), Some("Try adding 's' as prefix"));
        assert_eq!(suggest("scats", "cat").as_deref(), Some("Try adding 's' as prefix"));
        assert_eq!(suggest("cat", "cat"), None);
        assert_eq!(suggest("dog", "cat"), None);
    }

    #[test]
    fn update_carries_answer_step_and_validity() {
        let dict = WordDictionary::new(["cat", "car", "cart"]);
        let engine = Engine::new(&dict);
        let state = WordBuilderState {
            answer: "car".into(),
            step: 7,
            is_valid_word: true,
            suggestion: "stale".into(),
            ..WordBuilderState::default()
        };

        let next = engine.update_sets(&state);
        assert_eq!(next.answer(), "car");
        assert_eq!(next.step(), 7);
        assert!(next.is_valid_word());
        assert_eq!(next.suffix_set().sorted(), vec!['t']);
        assert_eq!(next.valid_completions(), ["cart"]);
        assert_eq!(next.suggestion(), DEAD_END_SUGGESTION);
    }

    #[test]
    fn sets_never_padded_with_fallback_letters() {
        let dict = WordDictionary::new(["cat"]);
        let engine = Engine::new(&dict);
        let state = engine.state_for_answer("cat");

        assert!(state.prefix_set().is_empty());
        assert!(state.suffix_set().is_empty());
        assert_eq!(state.suggestion(), DEAD_END_SUGGESTION);
    }

    #[test]
    fn embedded_scan_alone_keeps_answer_alive() {
        let dict = WordDictionary::new(["scats"]);
        let engine = Engine::new(&dict);
        let state = engine.state_for_answer("cat");

        assert_eq!(state.prefix_set().sorted(), vec!['s']);
        assert_eq!(state.suffix_set().sorted(), vec!['s']);
        assert_eq!(state.suggestion(), "");
    }

    #[test]
    fn completion_limit_applies_per_direction() {
        let dict = WordDictionary::new(["ab", "ac", "ad", "ba", "ca", "da"]);
        let config = EngineConfig {
            completion_limit: 2,
            ..EngineConfig::with_workers(2)
        };
        let engine = Engine::with_config(&dict, config);
        let state = engine.state_for_answer("a");

        assert_eq!(state.valid_completions().len(), 4);
        assert_eq!(state.suffix_set().sorted(), vec!['b', 'c', 'd']);
        assert_eq!(state.prefix_set().sorted(), vec!['b', 'c', 'd']);
    }

    #[test]
    fn suffix_array_index_drives_engine() {
        let ds = WordListDS::new(["cat", "car", "cart", "at"]);
        let engine = Engine::new(&ds);

        let empty = engine.reset();
        assert_eq!(empty.suffix_set().sorted(), vec!['a', 'c']);
        assert_eq!(empty.prefix_set().sorted(), vec!['r', 't']);

        let ca = engine.state_for_answer("ca");
        assert_eq!(ca.suffix_set().sorted(), vec!['r', 't']);
        assert_eq!(ca.valid_completions(), ["car", "cat", "cart"]);
    }
}

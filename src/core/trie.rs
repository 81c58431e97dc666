//! Prefix tree over a word corpus
//!
//! Used twice by [`WordDictionary`](super::WordDictionary): once over the words
//! as written and once over the reversed words, so prefix and suffix queries are
//! answered by the same walk.

use super::LetterSet;
use std::collections::BTreeMap;

/// A trie node: its children keyed by letter plus a terminal flag
///
/// Children live in an ordered map, so every walk visits them in ascending
/// letter order and query results are stable for a fixed corpus.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    is_word: bool,
}

impl TrieNode {
    /// Whether a stored word ends at this node
    #[inline]
    #[must_use]
    pub const fn is_word(&self) -> bool {
        self.is_word
    }

    /// The letters leading to this node's children
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.children.keys().copied()
    }

    fn collect(&self, buffer: &mut String, limit: usize, results: &mut Vec<String>) {
        if results.len() >= limit {
            return;
        }
        if self.is_word {
            results.push(buffer.clone());
        }
        for (&letter, child) in &self.children {
            if results.len() >= limit {
                return;
            }
            buffer.push(letter);
            child.collect(buffer, limit, results);
            buffer.pop();
        }
    }
}

/// Prefix tree supporting insertion and prefix-anchored queries
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, creating missing nodes along its path
    ///
    /// Inserting the same word twice leaves the trie unchanged.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for letter in word.chars() {
            node = node.children.entry(letter).or_default();
        }
        if !node.is_word {
            node.is_word = true;
            self.len += 1;
        }
    }

    /// Check whether `word` was inserted
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.node(word).is_some_and(TrieNode::is_word)
    }

    /// Find the node reached by walking `prefix` from the root
    #[must_use]
    pub fn node(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, letter| node.children.get(&letter))
    }

    /// All stored words starting with `prefix`, in ascending order
    ///
    /// Returns an empty vector when no word starts with `prefix`.
    #[must_use]
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.keys_with_prefix_limited(prefix, usize::MAX)
    }

    /// Like [`Trie::keys_with_prefix`], stopping after `limit` words
    #[must_use]
    pub fn keys_with_prefix_limited(&self, prefix: &str, limit: usize) -> Vec<String> {
        let mut results = Vec::new();
        if let Some(node) = self.node(prefix) {
            let mut buffer = prefix.to_string();
            node.collect(&mut buffer, limit, &mut results);
        }
        results
    }

    /// The distinct letters that can follow `prefix`
    ///
    /// Empty when `prefix` is not on any stored path.
    #[must_use]
    pub fn next_letters(&self, prefix: &str) -> LetterSet {
        self.node(prefix)
            .map(|node| node.letters().collect())
            .unwrap_or_default()
    }

    /// Number of distinct stored words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        for word in iter {
            trie.insert(word.as_ref());
        }
        trie
    }
}

/// Reverse a string letter by letter
#[must_use]
pub fn reversed(word: &str) -> String {
    word.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie {
        ["cat", "car", "cart", "at", "dog"].into_iter().collect()
    }

    #[test]
    fn contains_only_complete_words() {
        let trie = sample();
        assert!(trie.contains("cat"));
        assert!(trie.contains("cart"));
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("carts"));
        assert!(!trie.contains(""));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut trie = sample();
        assert_eq!(trie.len(), 5);
        trie.insert("cat");
        trie.insert("cat");
        assert_eq!(trie.len(), 5);
        assert_eq!(trie.keys_with_prefix("cat"), vec!["cat"]);
    }

    #[test]
    fn keys_with_prefix_collects_subtree() {
        let trie = sample();
        let mut keys = trie.keys_with_prefix("ca");
        keys.sort();
        assert_eq!(keys, vec!["car", "cart", "cat"]);
    }

    #[test]
    fn keys_with_prefix_includes_prefix_itself() {
        let trie = sample();
        let keys = trie.keys_with_prefix("car");
        assert!(keys.contains(&"car".to_string()));
        assert!(keys.contains(&"cart".to_string()));
    }

    #[test]
    fn keys_with_absent_prefix_is_empty() {
        let trie = sample();
        assert!(trie.keys_with_prefix("x").is_empty());
        assert!(trie.keys_with_prefix("cats").is_empty());
    }

    #[test]
    fn keys_with_prefix_is_stable() {
        let trie = sample();
        assert_eq!(trie.keys_with_prefix(""), trie.keys_with_prefix(""));
        assert_eq!(trie.keys_with_prefix("").len(), 5);
    }

    #[test]
    fn limited_walk_stops_early() {
        let trie = sample();
        assert_eq!(trie.keys_with_prefix_limited("ca", 2).len(), 2);
        assert_eq!(trie.keys_with_prefix_limited("ca", 10).len(), 3);
        assert!(trie.keys_with_prefix_limited("ca", 0).is_empty());
    }

    #[test]
    fn next_letters_after_prefix() {
        let trie = sample();
        assert_eq!(trie.next_letters("ca").sorted(), vec!['r', 't']);
        assert_eq!(trie.next_letters("car").sorted(), vec!['t']);
        assert!(trie.next_letters("cart").is_empty());
        assert!(trie.next_letters("zz").is_empty());
        assert_eq!(trie.next_letters("").sorted(), vec!['a', 'c', 'd']);
    }

    #[test]
    fn reversed_round_trips() {
        assert_eq!(reversed("cart"), "trac");
        assert_eq!(reversed(&reversed("band")), "band");
        assert_eq!(reversed(""), "");
    }

    #[test]
    fn empty_trie() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert!(!trie.contains("a"));
        assert!(trie.keys_with_prefix("").is_empty());
        assert!(trie.next_letters("").is_empty());
    }
}

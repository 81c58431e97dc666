//! Dictionary indexing
//!
//! Letter-set types, the [`WordIndex`] query surface and its two
//! implementations: a trie-backed [`WordDictionary`] and the suffix-array
//! backed [`WordListDS`] for large corpora.

mod dictionary;
mod index;
mod index_type;
mod letters;
pub mod suffix_array;
pub mod trie;
mod word_list_ds;

pub use dictionary::WordDictionary;
pub use index::{ScanOutcome, SuggestionGroups, WordIndex};
pub use index_type::{IndexType, SUFFIX_ARRAY_THRESHOLD};
pub use letters::{EdgeLetters, LetterGroups, LetterSet};
pub use suffix_array::SuffixArray;
pub use trie::{Trie, TrieNode};
pub use word_list_ds::{SEPARATOR, WordListDS};

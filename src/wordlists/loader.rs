//! Word list loading utilities
//!
//! Provides functions to load a corpus from a file or from the embedded list.

use std::fs;
use std::io;
use std::path::Path;

/// Trim and lower-case a raw entry, rejecting blank ones
#[must_use]
pub fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Load words from a file, one per line
///
/// Lines are trimmed and lower-cased; blank lines are skipped. Order and
/// duplicates are kept.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_builder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(normalize_word).collect())
}

/// Normalize an embedded string slice
///
/// # Examples
/// ```
/// use word_builder::wordlists::loader::words_from_slice;
/// use word_builder::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|s| normalize_word(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_normalizes() {
        let input = &["Cat", "  car ", "cart"];
        let words = words_from_slice(input);
        assert_eq!(words, vec!["cat", "car", "cart"]);
    }

    #[test]
    fn words_from_slice_skips_blank() {
        let input = &["cat", "", "   ", "at"];
        assert_eq!(words_from_slice(input), vec!["cat", "at"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("word_builder_loader_{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "Band\n\n  and\r\nband").unwrap();
        drop(file);

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(words, vec!["band", "and", "band"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/nonexistent/word_builder/words.txt").is_err());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}

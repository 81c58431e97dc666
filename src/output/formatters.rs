//! Formatting utilities for terminal output

/// Letters separated by spaces, or a dash when there are none
#[must_use]
pub fn format_letters(letters: &[char]) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    let mut out = String::with_capacity(letters.len() * 2);
    for (i, letter) in letters.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(*letter);
    }
    out
}

/// The answer spread out over a row of character indices
///
/// Returns the letter row and the index row, aligned column by column, for
/// picking a removal index.
#[must_use]
pub fn answer_with_indices(answer: &str) -> (String, String) {
    let mut letters = String::new();
    let mut indices = String::new();
    for (i, letter) in answer.chars().enumerate() {
        let label = i.to_string();
        let width = label.len().max(1) + 1;
        letters.push_str(&format!("{letter:<width$}"));
        indices.push_str(&format!("{label:<width$}"));
    }
    (letters.trim_end().to_string(), indices.trim_end().to_string())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

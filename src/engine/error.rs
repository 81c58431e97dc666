//! Transition errors

use super::Position;

/// Result type of engine transitions
pub type Result<T, E = EngineError> = std::result::Result<T, E>;

/// A rejected edit
///
/// Every variant is a local validation failure; the state the edit was
/// attempted on is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The letter is not in the candidate set for that side
    #[error("Invalid letter '{letter}' for {position} position.")]
    InvalidLetter { letter: char, position: Position },

    /// The position tag is neither "prefix" nor "suffix"
    #[error("Invalid position '{0}'. Use 'prefix' or 'suffix'.")]
    InvalidPosition(String),

    /// The removal index is past the end of the answer
    #[error("Invalid index {index} for answer '{answer}'.")]
    InvalidIndex { index: usize, answer: String },
}

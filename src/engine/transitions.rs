//! The game engine: state transitions over a borrowed index

use super::{EngineConfig, EngineError, Position, Result, WordBuilderState};
use crate::core::WordIndex;

/// Outcome of a successful edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The state after the edit
    pub state: WordBuilderState,
    /// Human-readable report of the edit
    pub message: String,
}

/// Word-building engine
///
/// Borrows a read-only index for its whole lifetime and derives new
/// [`WordBuilderState`] values from old ones. The engine itself holds no game
/// state, so one engine can serve any number of sessions.
pub struct Engine<'a, D: WordIndex + ?Sized> {
    pub(crate) dictionary: &'a D,
    pub(crate) config: EngineConfig,
}

impl<'a, D: WordIndex + ?Sized> Engine<'a, D> {
    /// Create an engine with the default configuration
    #[must_use]
    pub fn new(dictionary: &'a D) -> Self {
        Self::with_config(dictionary, EngineConfig::default())
    }

    #[must_use]
    pub const fn with_config(dictionary: &'a D, config: EngineConfig) -> Self {
        Self { dictionary, config }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a D {
        self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// A fresh state: empty answer, step 0, sets seeded from the edge letters
    #[must_use]
    pub fn reset(&self) -> WordBuilderState {
        self.update_sets(&WordBuilderState::default())
    }

    /// A step-0 state for an arbitrary answer
    ///
    /// Used to resume a session or to inspect a fragment without building it
    /// letter by letter.
    #[must_use]
    pub fn state_for_answer(&self, answer: &str) -> WordBuilderState {
        let answer = answer.to_lowercase();
        let seed = WordBuilderState {
            is_valid_word: self.is_word(&answer),
            answer,
            ..WordBuilderState::default()
        };
        self.update_sets(&seed)
    }

    /// Whether the state's answer is a complete corpus word
    #[must_use]
    pub fn check_valid_word(&self, state: &WordBuilderState) -> bool {
        self.is_word(&state.answer)
    }

    /// Add `letter` at the end named by `position`
    ///
    /// # Errors
    /// - [`EngineError::InvalidPosition`] unless `position` is "prefix" or "suffix"
    /// - [`EngineError::InvalidLetter`] if the letter is not a candidate on that side
    pub fn add_letter(&self, state: &WordBuilderState, letter: char, position: &str) -> Result<Transition> {
        self.add_letter_at(state, letter, position.parse()?)
    }

    /// Add `letter` before or after the answer
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidLetter`] if the letter is not in the
    /// candidate set for `position`.
    ///
    /// # Examples
    /// ```
    /// use word_builder::core::WordDictionary;
    /// use word_builder::engine::{Engine, Position};
    ///
    /// let dict = WordDictionary::new(["cat", "at"]);
    /// let engine = Engine::new(&dict);
    /// let at = engine.state_for_answer("at");
    ///
    /// let transition = engine.add_letter_at(&at, 'c', Position::Prefix).unwrap();
    /// assert_eq!(transition.state.answer(), "cat");
    /// assert!(transition.state.is_valid_word());
    /// ```
    pub fn add_letter_at(&self, state: &WordBuilderState, letter: char, position: Position) -> Result<Transition> {
        let letter = letter.to_ascii_lowercase();
        if !state.letters_for(position).contains(letter) {
            return Err(EngineError::InvalidLetter { letter, position });
        }

        let mut answer = String::with_capacity(state.answer.len() + letter.len_utf8());
        match position {
            Position::Prefix => {
                answer.push(letter);
                answer.push_str(&state.answer);
            }
            Position::Suffix => {
                answer.push_str(&state.answer);
                answer.push(letter);
            }
        }

        let next = self.advance(answer, state.step);
        let mut message = format!(
            "Step {}: Added '{letter}' as {position} -> Answer: {}",
            next.step, next.answer
        );
        push_validity(&next, &mut message);
        if !next.valid_completions.is_empty() && !next.is_valid_word {
            let shown: Vec<&str> = next
                .valid_completions
                .iter()
                .take(self.config.message_completions)
                .map(String::as_str)
                .collect();
            message.push_str("\nPossible completions: ");
            message.push_str(&shown.join(", "));
        }

        Ok(Transition { state: next, message })
    }

    /// Remove the letter at character index `index`
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidIndex`] unless `index` is below the
    /// answer's length.
    pub fn remove_letter(&self, state: &WordBuilderState, index: usize) -> Result<Transition> {
        let Some((offset, _)) = state.answer.char_indices().nth(index) else {
            return Err(EngineError::InvalidIndex {
                index,
                answer: state.answer.clone(),
            });
        };

        let mut answer = state.answer.clone();
        let letter = answer.remove(offset);

        let next = self.advance(answer, state.step);
        let mut message = format!(
            "Step {}: Removed '{letter}' at index {index} -> Answer: {}",
            next.step, next.answer
        );
        push_validity(&next, &mut message);

        Ok(Transition { state: next, message })
    }

    fn is_word(&self, answer: &str) -> bool {
        !answer.is_empty() && self.dictionary.contains_word(answer)
    }

    fn advance(&self, answer: String, step: usize) -> WordBuilderState {
        let seed = WordBuilderState {
            is_valid_word: self.is_word(&answer),
            answer,
            step: step + 1,
            ..WordBuilderState::default()
        };
        self.update_sets(&seed)
    }
}

fn push_validity(state: &WordBuilderState, message: &mut String) {
    if state.is_valid_word {
        message.push_str("\n*** '");
        message.push_str(&state.answer);
        message.push_str("' is a valid word! ***");
    }
}

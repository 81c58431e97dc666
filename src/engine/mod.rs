//! Word-building game engine
//!
//! Pure transitions over immutable [`WordBuilderState`] values: adding a
//! letter at either end, removing a letter anywhere, resetting, and the full
//! recomputation of the candidate sets that follows every edit.

mod config;
mod error;
mod state;
mod transitions;
mod update;

pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use state::{Position, SNAPSHOT_COMPLETIONS, StateSnapshot, WordBuilderState};
pub use transitions::{Engine, Transition};
pub use update::DEAD_END_SUGGESTION;

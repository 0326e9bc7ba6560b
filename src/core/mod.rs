//! Core domain types for the assistant
//!
//! Words, feedback marks and patterns, observations and letter sets. Everything here
//! is validated on construction; the solver modules can assume well-formed input.

mod letters;
mod mark;
mod observation;
mod pattern;
mod word;

pub use letters::{ALPHABET_SIZE, LetterSet, letter_index};
pub use mark::Mark;
pub use observation::{Observation, ObservationError};
pub use pattern::{Pattern, PatternError};
pub use word::{WORD_LEN, Word, WordError};

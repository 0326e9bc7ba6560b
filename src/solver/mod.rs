//! Wordle assistant algorithms
//!
//! Constraint extraction, candidate filtering and eliminator ranking, plus the
//! [`Assistant`] facade that runs all three over a dictionary.

mod eliminator;
mod engine;
mod extractor;
mod filter;

pub use eliminator::{
    Category, EliminatorEntry, MAX_ELIMINATORS, differing_letters, rank_eliminators,
    wants_eliminators,
};
pub use engine::{Analysis, Assistant, Suggestion, SuggestionKind};
pub use extractor::{ConstraintSet, extract};
pub use filter::{InvalidWords, filter_candidates};

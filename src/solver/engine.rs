//! Main assistant interface

use super::eliminator::{EliminatorEntry, rank_eliminators, wants_eliminators};
use super::extractor::{ConstraintSet, extract};
use super::filter::{InvalidWords, filter_candidates};
use crate::core::{Observation, Word};

/// Everything the assistant derives from one game state
#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    pub constraints: ConstraintSet,
    /// Possible answers, ascending
    pub candidates: Vec<&'a Word>,
    /// Probe words, best first; empty when probes are not worth showing
    pub eliminators: Vec<EliminatorEntry>,
}

impl Analysis<'_> {
    /// True if no dictionary word fits the observations
    #[must_use]
    pub fn no_matches(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Why a word was suggested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    /// The word could be the answer
    Candidate,
    /// The word cannot be the answer but narrows the field
    Eliminator,
}

/// A suggested next guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    pub kind: SuggestionKind,
}

/// Main assistant
///
/// Bundles constraint extraction, candidate filtering and eliminator ranking over a
/// borrowed dictionary. Holds no game state: every call takes the history explicitly.
pub struct Assistant<'a> {
    dictionary: &'a [Word],
}

impl<'a> Assistant<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a [Word]) -> Self {
        Self { dictionary }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    /// Analyze a game state
    ///
    /// Eliminators are only ranked when [`wants_eliminators`] says they are useful.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Observation;
    /// use wordle_assist::solver::{Assistant, InvalidWords};
    /// use wordle_assist::wordlists::loader::words_from_slice;
    ///
    /// let dictionary = words_from_slice(&["crane", "salty", "batty", "fatty", "flout"]);
    /// let assistant = Assistant::new(&dictionary);
    /// let history = [Observation::parse("crane:AAMAA").unwrap()];
    ///
    /// let analysis = assistant.analyze(&history, &InvalidWords::new());
    /// assert_eq!(analysis.candidates.len(), 3);
    /// assert_eq!(analysis.eliminators[0].word, "flout");
    /// ```
    #[must_use]
    pub fn analyze(&self, observations: &[Observation], invalid: &InvalidWords) -> Analysis<'a> {
        let constraints = extract(observations);
        let candidates = filter_candidates(self.dictionary, &constraints, invalid);
        let eliminators = if wants_eliminators(candidates.len(), &constraints) {
            rank_eliminators(self.dictionary, &constraints, &candidates, invalid)
        } else {
            Vec::new()
        };

        Analysis {
            constraints,
            candidates,
            eliminators,
        }
    }

    /// Pick the next guess for an analyzed state
    ///
    /// - no candidates: nothing to suggest
    /// - one candidate, or the last attempt: play the first candidate
    /// - more than two candidates and a probe exists: play the best probe
    /// - otherwise: play the first candidate
    #[must_use]
    pub fn suggest(&self, analysis: &Analysis<'a>, attempts_left: usize) -> Option<Suggestion> {
        let first = analysis.candidates.first()?;
        let candidate = Suggestion {
            word: first.text().to_string(),
            kind: SuggestionKind::Candidate,
        };

        if analysis.candidates.len() == 1 || attempts_left <= 1 {
            return Some(candidate);
        }

        match analysis.eliminators.first() {
            Some(probe) if analysis.candidates.len() > 2 => Some(Suggestion {
                word: probe.word.clone(),
                kind: SuggestionKind::Eliminator,
            }),
            _ => Some(candidate),
        }
    }
}

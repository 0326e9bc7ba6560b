//! Candidate filtering
//!
//! Keeps the dictionary words that could still be the answer.

use super::extractor::ConstraintSet;
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Words the game refused to accept as guesses
///
/// Entries are stored trimmed and lowercased, so lookups are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidWords(FxHashSet<String>);

impl InvalidWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a rejected word; returns false if it was already known
    pub fn insert(&mut self, word: &str) -> bool {
        self.0.insert(word.trim().to_lowercase())
    }

    /// Check for a rejected word, ignoring case and surrounding whitespace
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let trimmed = word.trim();
        if trimmed.chars().any(char::is_uppercase) {
            self.0.contains(&trimmed.to_lowercase())
        } else {
            self.0.contains(trimmed)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Rejected words in ascending order
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.0.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl<S: AsRef<str>> FromIterator<S> for InvalidWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut invalid = Self::new();
        for word in iter {
            invalid.insert(word.as_ref());
        }
        invalid
    }
}

/// Filter the dictionary down to the words consistent with `constraints`
///
/// A word survives iff it was not rejected by the game and
/// [`ConstraintSet::admits`] it. The result is sorted ascending with duplicates removed.
///
/// # Examples
/// ```
/// use wordle_assist::core::Observation;
/// use wordle_assist::solver::{InvalidWords, extract, filter_candidates};
/// use wordle_assist::wordlists::loader::words_from_slice;
///
/// let dictionary = words_from_slice(&["trace", "prank", "crane", "drank"]);
/// let constraints = extract(&[Observation::parse("crane:ACCCA").unwrap()]);
///
/// let candidates = filter_candidates(&dictionary, &constraints, &InvalidWords::new());
/// let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["drank", "prank"]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(
    dictionary: &'a [Word],
    constraints: &ConstraintSet,
    invalid: &InvalidWords,
) -> Vec<&'a Word> {
    let mut candidates: Vec<&Word> = dictionary
        .iter()
        .filter(|word| !invalid.contains(word.text()) && constraints.admits(word))
        .collect();

    candidates.sort_unstable();
    candidates.dedup();

    tracing::debug!(
        dictionary = dictionary.len(),
        candidates = candidates.len(),
        "filtered candidates"
    );
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Observation, Pattern};
    use crate::solver::extract;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn texts<'a>(words: &[&'a Word]) -> Vec<&'a str> {
        words.iter().map(|&w| w.text()).collect()
    }

    fn constraints_for(items: &[&str]) -> ConstraintSet {
        let observations: Vec<Observation> = items
            .iter()
            .map(|item| Observation::parse(item).unwrap())
            .collect();
        extract(&observations)
    }

    #[test]
    fn fixed_and_excluded_letters() {
        // n fixed at 3 and c excluded: only PRANK survives
        let dictionary = words_from_slice(&["crane", "trace", "prank"]);
        let constraints = constraints_for(&["couch:AAAAA", "being:AAACA"]);
        assert_eq!(constraints.fixed_at(3), Some(b'n'));
        assert!(constraints.excluded().contains(b'c'));

        let candidates = filter_candidates(&dictionary, &constraints, &InvalidWords::new());
        assert_eq!(texts(&candidates), ["prank"]);
    }

    #[test]
    fn invalid_words_are_skipped_case_insensitively() {
        let dictionary = words_from_slice(&["drank", "prank", "frank"]);
        let constraints = constraints_for(&["crane:ACCCA"]);

        let invalid: InvalidWords = ["  PRANK "].into_iter().collect();
        let candidates = filter_candidates(&dictionary, &constraints, &invalid);
        assert_eq!(texts(&candidates), ["drank", "frank"]);
    }

    #[test]
    fn result_is_sorted_and_deduplicated() {
        let dictionary = words_from_slice(&["trunk", "drank", "prank", "drank", "Drank"]);
        let constraints = constraints_for(&[]);

        let candidates = filter_candidates(&dictionary, &constraints, &InvalidWords::new());
        assert_eq!(texts(&candidates), ["drank", "prank", "trunk"]);
        assert!(candidates.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn no_matches_is_an_empty_list() {
        let dictionary = words_from_slice(&["crane", "slate"]);
        let constraints = constraints_for(&["zzzzz:CCCCC"]);

        let candidates = filter_candidates(&dictionary, &constraints, &InvalidWords::new());
        assert!(candidates.is_empty());
    }

    #[test]
    fn honest_feedback_never_loses_the_target() {
        let dictionary = words_from_slice(WORDS);
        let guesses = ["moist", "lunch", "ready", "llama", "speed", "eerie"];

        for target in dictionary.iter().step_by(37) {
            let history: Vec<Observation> = guesses
                .iter()
                .map(|g| {
                    let guess = Word::new(*g).unwrap();
                    let pattern = Pattern::calculate(&guess, target);
                    Observation::new(guess, pattern)
                })
                .collect();
            let constraints = extract(&history);
            let candidates = filter_candidates(&dictionary, &constraints, &InvalidWords::new());

            assert!(
                candidates.contains(&target),
                "target {target} filtered out by {constraints}"
            );
        }
    }

    #[test]
    fn invalid_words_set_behaviour() {
        let mut invalid = InvalidWords::new();
        assert!(invalid.is_empty());
        assert!(invalid.insert("Xylyl"));
        assert!(!invalid.insert("xylyl"));
        assert!(invalid.insert("qajaq"));
        assert_eq!(invalid.len(), 2);
        assert!(invalid.contains("xylyl"));
        assert!(invalid.contains("XYLYL"));
        assert!(invalid.contains(" Qajaq\n"));
        assert!(!invalid.contains("crane"));
        assert_eq!(invalid.sorted(), ["qajaq", "xylyl"]);

        invalid.clear();
        assert!(invalid.is_empty());
    }
}

//! Eliminator (probe word) ranking
//!
//! When several candidates remain, the best next guess is often a word that cannot be
//! the answer but tests the letters that distinguish the candidates from one another.
//! Probes are scored in strict priority tiers:
//!
//! | tier | condition                        | score                       |
//! |------|----------------------------------|-----------------------------|
//! | 1    | 2+ differing letters             | 1000 + 100·D + 10·U         |
//! | 2    | 1 differing + 1+ untested        | 500 + 50·U                  |
//! | 3    | 1 differing                      | 300                         |
//! | 4    | 0 differing + 2+ untested        | 100 + 10·U                  |
//!
//! where D and U count the distinct differing and untested letters of the probe.

use super::extractor::ConstraintSet;
use super::filter::InvalidWords;
use crate::core::{LetterSet, WORD_LEN, Word};
use rustc_hash::FxHashSet;
use std::cmp::Reverse;
use std::fmt;

/// Maximum number of eliminator entries returned
pub const MAX_ELIMINATORS: usize = 15;

/// Which scoring tier a probe fell into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Two or more differing letters, plus any number of untested letters
    MultiDiffering { differing: usize, untested: usize },
    /// Exactly one differing letter and at least one untested letter
    DifferingWithUntested { untested: usize },
    /// Exactly one differing letter and nothing untested
    SingleDiffering,
    /// No differing letters but at least two untested letters
    UntestedOnly { untested: usize },
}

impl Category {
    /// Pick the tier for a probe testing `differing` differing letters and `untested`
    /// untested letters; `None` means the probe is not worth showing
    #[must_use]
    pub const fn classify(differing: usize, untested: usize) -> Option<Self> {
        match (differing, untested) {
            (2.., _) => Some(Self::MultiDiffering {
                differing,
                untested,
            }),
            (1, 1..) => Some(Self::DifferingWithUntested { untested }),
            (1, 0) => Some(Self::SingleDiffering),
            (0, 2..) => Some(Self::UntestedOnly { untested }),
            _ => None,
        }
    }

    /// Priority score; higher is better
    #[must_use]
    pub const fn score(self) -> u32 {
        match self {
            Self::MultiDiffering {
                differing,
                untested,
            } => 1000 + 100 * differing as u32 + 10 * untested as u32,
            Self::DifferingWithUntested { untested } => 500 + 50 * untested as u32,
            Self::SingleDiffering => 300,
            Self::UntestedOnly { untested } => 100 + 10 * untested as u32,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MultiDiffering {
                differing,
                untested: 0,
            } => write!(f, "{differing} differing"),
            Self::MultiDiffering {
                differing,
                untested,
            } => write!(f, "{differing} differing + {untested} untested"),
            Self::DifferingWithUntested { untested } => {
                write!(f, "1 differing + {untested} untested")
            }
            Self::SingleDiffering => write!(f, "1 differing"),
            Self::UntestedOnly { untested } => write!(f, "{untested} untested"),
        }
    }
}

/// A ranked probe word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EliminatorEntry {
    pub word: String,
    pub score: u32,
    pub category: Category,
    /// Distinct letters of the word that tell candidates apart
    pub differing: LetterSet,
    /// Distinct letters of the word never played before
    pub untested: LetterSet,
}

impl EliminatorEntry {
    /// Every letter this probe would newly test
    #[must_use]
    pub const fn tested_letters(&self) -> LetterSet {
        self.differing.union(self.untested)
    }
}

/// Letters that distinguish the candidates from each other
///
/// Every position where the candidates disagree contributes all of its letters.
/// Letters already known to be fixed or misplaced carry no new information and are
/// removed.
#[must_use]
pub fn differing_letters(candidates: &[&Word], constraints: &ConstraintSet) -> LetterSet {
    let mut by_position = [LetterSet::EMPTY; WORD_LEN];
    for candidate in candidates {
        for (slot, &letter) in by_position.iter_mut().zip(candidate.letters()) {
            slot.insert(letter);
        }
    }

    by_position
        .into_iter()
        .filter(|letters| letters.len() >= 2)
        .fold(LetterSet::EMPTY, LetterSet::union)
        .difference(constraints.known_present())
}

/// Whether probe words are worth showing for this many candidates
///
/// They are when more than one candidate remains, or when only a couple remain and
/// some letters have never been played.
#[must_use]
pub fn wants_eliminators(candidate_count: usize, constraints: &ConstraintSet) -> bool {
    candidate_count > 1 || (candidate_count <= 2 && !constraints.untested().is_empty())
}

/// Rank non-candidate dictionary words by how many ambiguous letters they would test
///
/// A probe must not be a candidate or a rejected word, must avoid excluded letters,
/// and must respect the fixed positions and the forbidden positions of misplaced
/// letters. Entries come back best first (score descending, then word ascending),
/// at most [`MAX_ELIMINATORS`] of them.
///
/// # Examples
/// ```
/// use wordle_assist::core::{Observation, Word};
/// use wordle_assist::solver::{InvalidWords, extract, rank_eliminators};
/// use wordle_assist::wordlists::loader::words_from_slice;
///
/// let dictionary = words_from_slice(&["llama", "lilac", "claim", "fuzzy"]);
/// let constraints = extract(&[Observation::parse("ghost:AAAAA").unwrap()]);
/// let candidates: Vec<&Word> = dictionary[..2].iter().collect();
///
/// let ranked = rank_eliminators(&dictionary, &constraints, &candidates, &InvalidWords::new());
/// assert_eq!(ranked[0].word, "claim");
/// assert!(ranked[0].score >= 1000);
/// assert_eq!(ranked[1].word, "fuzzy");
/// assert!(ranked[1].score <= 150);
/// ```
#[must_use]
pub fn rank_eliminators(
    dictionary: &[Word],
    constraints: &ConstraintSet,
    candidates: &[&Word],
    invalid: &InvalidWords,
) -> Vec<EliminatorEntry> {
    let differing = differing_letters(candidates, constraints);
    let untested = constraints.untested();
    let excluded = constraints.excluded();
    let candidate_set: FxHashSet<&str> = candidates.iter().map(|w| w.text()).collect();
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    tracing::debug!(
        candidates = candidates.len(),
        %differing,
        %untested,
        "ranking eliminators"
    );

    let mut entries: Vec<EliminatorEntry> = dictionary
        .iter()
        .filter(|word| {
            !invalid.contains(word.text())
                && !word.distinct().intersects(excluded)
                && !candidate_set.contains(word.text())
                && constraints.respects_positions(word)
                && seen.insert(word.text())
        })
        .filter_map(|word| {
            let word_differing = word.distinct().intersection(differing);
            let word_untested = word.distinct().intersection(untested);
            let category = Category::classify(word_differing.len(), word_untested.len())?;
            Some(EliminatorEntry {
                word: word.text().to_string(),
                score: category.score(),
                category,
                differing: word_differing,
                untested: word_untested,
            })
        })
        .collect();

    entries.sort_unstable_by(|a, b| {
        Reverse(a.score)
            .cmp(&Reverse(b.score))
            .then_with(|| a.word.cmp(&b.word))
    });
    entries.truncate(MAX_ELIMINATORS);

    for entry in entries.iter().take(5) {
        tracing::debug!(word = %entry.word, score = entry.score, category = %entry.category, "top eliminator");
    }
    entries
}

//! Constraint extraction
//!
//! Turns the guess history into a normalized [`ConstraintSet`]: which letters are
//! fixed where, which letters must appear away from a position, which letters are
//! ruled out, and which letters the player has not tried yet.

use crate::core::{ALPHABET_SIZE, LetterSet, Mark, Observation, WORD_LEN, Word, letter_index};
use std::fmt;

/// Constraints accumulated from a sequence of observations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    fixed: [Option<u8>; WORD_LEN],
    misplaced: Vec<(u8, usize)>,
    excluded: LetterSet,
    untested: LetterSet,
}

impl ConstraintSet {
    /// Letter fixed at a position by a Correct mark, if any
    #[inline]
    #[must_use]
    pub const fn fixed_at(&self, position: usize) -> Option<u8> {
        self.fixed[position]
    }

    /// All fixed positions as `(position, letter)` pairs, ascending by position
    pub fn fixed_positions(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.fixed
            .iter()
            .enumerate()
            .filter_map(|(position, letter)| letter.map(|l| (position, l)))
    }

    /// Required-but-misplaced `(letter, forbidden_position)` pairs, sorted and deduplicated
    #[inline]
    #[must_use]
    pub fn required_misplaced(&self) -> &[(u8, usize)] {
        &self.misplaced
    }

    /// Letters that were marked Absent every time they were played
    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }

    /// Letters that never appeared in any observation
    #[inline]
    #[must_use]
    pub const fn untested(&self) -> LetterSet {
        self.untested
    }

    /// Letters known to be in the target: fixed letters plus misplaced letters
    #[must_use]
    pub fn known_present(&self) -> LetterSet {
        self.fixed
            .iter()
            .flatten()
            .copied()
            .chain(self.misplaced.iter().map(|&(letter, _)| letter))
            .collect()
    }

    /// True if no observation has contributed anything yet
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.untested == LetterSet::ALPHABET
    }

    /// Check that `word` agrees with every fixed position and does not put a misplaced
    /// letter at its forbidden position
    ///
    /// This is the positional part of the candidate test; it does not require the
    /// misplaced letters to be present.
    #[must_use]
    pub fn respects_positions(&self, word: &Word) -> bool {
        let letters = word.letters();
        self.fixed_positions()
            .all(|(position, letter)| letters[position] == letter)
            && self
                .misplaced
                .iter()
                .all(|&(letter, position)| letters[position] != letter)
    }

    /// Check that `word` is a possible answer under these constraints
    ///
    /// A word is admitted iff it contains no excluded letter, agrees with every fixed
    /// position, and contains every misplaced letter but never at its forbidden position.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Observation, Word};
    /// use wordle_assist::solver::extract;
    ///
    /// let constraints = extract(&[Observation::parse("crane:AAMCA").unwrap()]);
    ///
    /// assert!(constraints.admits(&Word::new("gaunt").unwrap()));
    /// assert!(!constraints.admits(&Word::new("prank").unwrap())); // contains r
    /// ```
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        !word.distinct().intersects(self.excluded)
            && self.respects_positions(word)
            && self
                .misplaced
                .iter()
                .all(|&(letter, _)| word.has_letter(letter))
    }
}

impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern: String = self
            .fixed
            .iter()
            .map(|letter| letter.map_or('_', char::from))
            .collect();
        write!(f, "{pattern}")?;
        for &(letter, position) in &self.misplaced {
            write!(f, " {}!{position}", char::from(letter))?;
        }
        if !self.excluded.is_empty() {
            write!(f, " -{}", self.excluded)?;
        }
        Ok(())
    }
}

// Per-letter record of every mark a letter has received.
const SEEN_ABSENT: u8 = 1 << 0;
const SEEN_MISPLACED: u8 = 1 << 1;
const SEEN_CORRECT: u8 = 1 << 2;

const fn seen_bit(mark: Mark) -> u8 {
    match mark {
        Mark::Absent => SEEN_ABSENT,
        Mark::Misplaced => SEEN_MISPLACED,
        Mark::Correct => SEEN_CORRECT,
    }
}

/// Derive the constraint set from a sequence of observations
///
/// Correct marks fix a position (a later observation overwrites an earlier one at the
/// same position). Misplaced marks add a `(letter, position)` requirement. A letter is
/// excluded only if every mark it ever received was Absent, so a letter seen as Correct
/// or Misplaced anywhere is never excluded. Letters never played are untested.
///
/// # Examples
/// ```
/// use wordle_assist::core::Observation;
/// use wordle_assist::solver::extract;
///
/// let constraints = extract(&[Observation::parse("crane:AAMCA").unwrap()]);
///
/// assert_eq!(constraints.fixed_at(3), Some(b'n'));
/// assert_eq!(constraints.required_misplaced(), &[(b'a', 2)]);
/// assert_eq!(constraints.excluded().to_string(), "cer");
/// assert_eq!(constraints.untested().len(), 21);
/// ```
#[must_use]
pub fn extract(observations: &[Observation]) -> ConstraintSet {
    let mut seen = [0u8; ALPHABET_SIZE];
    let mut fixed = [None; WORD_LEN];
    let mut misplaced = Vec::new();

    for observation in observations {
        let marks = observation.pattern().marks();
        let letters = observation.word().letters();
        for (position, (&letter, mark)) in letters.iter().zip(marks).enumerate() {
            seen[letter_index(letter)] |= seen_bit(mark);
            match mark {
                Mark::Correct => fixed[position] = Some(letter),
                Mark::Misplaced => misplaced.push((letter, position)),
                Mark::Absent => {}
            }
        }
    }

    misplaced.sort_unstable();
    misplaced.dedup();

    let mut excluded = LetterSet::new();
    let mut untested = LetterSet::new();
    for (letter, &marks) in (b'a'..=b'z').zip(&seen) {
        match marks {
            0 => untested.insert(letter),
            SEEN_ABSENT => excluded.insert(letter),
            _ => {}
        }
    }

    let constraints = ConstraintSet {
        fixed,
        misplaced,
        excluded,
        untested,
    };
    tracing::debug!(
        observations = observations.len(),
        %constraints,
        untested = %constraints.untested,
        "extracted constraints"
    );
    constraints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;

    fn observations(items: &[&str]) -> Vec<Observation> {
        items
            .iter()
            .map(|item| Observation::parse(item).unwrap())
            .collect()
    }

    fn honest(guess: &str, answer: &str) -> Observation {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        let pattern = Pattern::calculate(&guess, &answer);
        Observation::new(guess, pattern)
    }

    #[test]
    fn empty_history_is_unconstrained() {
        let constraints = extract(&[]);
        assert!(constraints.is_unconstrained());
        assert_eq!(constraints.fixed_positions().count(), 0);
        assert!(constraints.required_misplaced().is_empty());
        assert!(constraints.excluded().is_empty());
        assert_eq!(constraints.untested(), LetterSet::ALPHABET);
    }

    #[test]
    fn crane_example() {
        let constraints = extract(&observations(&["crane:AAMCA"]));

        let fixed: Vec<(usize, u8)> = constraints.fixed_positions().collect();
        assert_eq!(fixed, vec![(3, b'n')]);
        assert_eq!(constraints.required_misplaced(), &[(b'a', 2)]);
        assert_eq!(constraints.excluded().to_chars(), vec!['c', 'e', 'r']);
        assert_eq!(
            constraints.untested().to_string(),
            "bdfghijklmopqstuvwxyz"
        );
        assert!(!constraints.is_unconstrained());
    }

    #[test]
    fn letter_seen_present_anywhere_is_never_excluded() {
        // 'e' absent in the first guess, misplaced in the second
        let constraints = extract(&observations(&["crane:AAAAA", "eight:MAAAA"]));
        assert!(!constraints.excluded().contains(b'e'));
        assert!(constraints.excluded().contains(b'c'));

        // Same facts in the other order
        let reversed = extract(&observations(&["eight:MAAAA", "crane:AAAAA"]));
        assert_eq!(reversed.excluded(), constraints.excluded());
    }

    #[test]
    fn duplicate_letter_in_one_guess() {
        // SPEED vs ERASE: second E misplaced, so E is not excluded despite no Absent E
        let constraints = extract(&[honest("speed", "erase")]);
        assert!(!constraints.excluded().contains(b'e'));
        assert_eq!(
            constraints.required_misplaced(),
            &[(b'e', 2), (b'e', 3), (b's', 0)]
        );
        assert_eq!(constraints.excluded().to_string(), "dp");

        // LLAMA vs LILAC: the last A is Absent but A is misplaced earlier
        let constraints = extract(&[honest("llama", "lilac")]);
        assert!(!constraints.excluded().contains(b'a'));
        assert_eq!(constraints.excluded().to_string(), "m");
        assert_eq!(constraints.fixed_at(0), Some(b'l'));
    }

    #[test]
    fn correct_and_absent_for_same_letter() {
        // EERIE vs CRANE: E correct at 4, absent at 0 and 1
        let constraints = extract(&[honest("eerie", "crane")]);
        assert_eq!(constraints.fixed_at(4), Some(b'e'));
        assert!(!constraints.excluded().contains(b'e'));
        assert!(constraints.excluded().contains(b'i'));
    }

    #[test]
    fn later_correct_mark_overwrites_position() {
        let constraints = extract(&observations(&["slate:AACAA", "grand:AACAA"]));
        assert_eq!(constraints.fixed_at(2), Some(b'a'));

        let constraints = extract(&observations(&["lunch:AAAAA", "crane:CAAAA", "abbey:CAAAA"]));
        assert_eq!(constraints.fixed_at(0), Some(b'a'));
    }

    #[test]
    fn misplaced_pairs_are_deduplicated() {
        let constraints = extract(&observations(&["crane:AAMAA", "plaza:AAMAA"]));
        assert_eq!(constraints.required_misplaced(), &[(b'a', 2)]);
    }

    #[test]
    fn extraction_is_order_independent() {
        let history = [
            honest("moist", "lilac"),
            honest("lunch", "lilac"),
            honest("ready", "lilac"),
        ];
        let forward = extract(&history);

        let mut reversed = history.to_vec();
        reversed.reverse();
        let backward = extract(&reversed);

        assert_eq!(forward, backward);
    }

    #[test]
    fn extraction_is_idempotent() {
        let history = observations(&["crane:AAMCA", "moist:AAMAA"]);
        assert_eq!(extract(&history), extract(&history));
    }

    #[test]
    fn excluded_never_overlaps_known_letters() {
        let targets = ["lilac", "erase", "floor", "crane", "mummy", "geese"];
        let guesses = ["llama", "speed", "robot", "eerie", "moist", "every"];
        for target in targets {
            let history: Vec<Observation> = guesses.iter().map(|g| honest(g, target)).collect();
            let constraints = extract(&history);
            assert!(
                !constraints.excluded().intersects(constraints.known_present()),
                "overlap for target {target}"
            );
        }
    }

    #[test]
    fn admits_checks_every_rule() {
        let constraints = extract(&observations(&["crane:AAMCA"]));

        // fixed n at 3, contains a (not at 2), no c/r/e
        assert!(constraints.admits(&Word::new("gaunt").unwrap()));
        assert!(constraints.admits(&Word::new("aping").unwrap()));
        // excluded letter
        assert!(!constraints.admits(&Word::new("prank").unwrap()));
        // misplaced letter at its forbidden position
        assert!(!constraints.admits(&Word::new("bland").unwrap()));
        // misplaced letter missing
        assert!(!constraints.admits(&Word::new("pound").unwrap()));
        // wrong letter at the fixed position
        assert!(!constraints.admits(&Word::new("salty").unwrap()));
    }

    #[test]
    fn respects_positions_ignores_presence() {
        let constraints = extract(&observations(&["crane:AAMCA"]));
        // no 'a' at all, but nothing placed wrongly
        assert!(constraints.respects_positions(&Word::new("pound").unwrap()));
        assert!(!constraints.respects_positions(&Word::new("bland").unwrap()));
    }

    #[test]
    fn display_summarizes_constraints() {
        let constraints = extract(&observations(&["crane:AAMCA"]));
        assert_eq!(constraints.to_string(), "___n_ a!2 -cer");
    }
}

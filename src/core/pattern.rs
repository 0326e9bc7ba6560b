//! Feedback pattern calculation and representation
//!
//! A pattern is the row of five marks the game shows after a guess. It is stored
//! packed as a base-3 number:
//! - 0 = Absent
//! - 1 = Misplaced
//! - 2 = Correct
//!
//! Each position contributes digit × 3^position, so the value ranges over 0-242.

use super::letters::letter_index;
use super::{Mark, WORD_LEN, Word};
use std::fmt;

/// Feedback pattern for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

/// Error type for unparseable pattern text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    InvalidLength(usize),
    InvalidMark(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Pattern must have exactly {WORD_LEN} marks, got {len}")
            }
            Self::InvalidMark(ch) => {
                write!(f, "Invalid mark '{ch}' (use C/M/A, G/Y/- or 🟩🟨⬜)")
            }
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// All marks Correct: the game is solved
    pub const SOLVED: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// All marks Absent
    pub const ALL_ABSENT: Self = Self(0);

    /// Create a pattern from its packed value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Build a pattern from five marks, position 0 first
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LEN]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for mark in marks {
            value += mark.digit() * multiplier;
            multiplier *= 3;
        }
        Self(value)
    }

    /// Get the packed value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Mark at a position (0-4)
    #[must_use]
    pub const fn mark_at(self, position: usize) -> Mark {
        let mut val = self.0;
        let mut i = 0;
        while i < position {
            val /= 3;
            i += 1;
        }
        Mark::from_digit(val % 3)
    }

    /// All five marks, position 0 first
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LEN] {
        std::array::from_fn(|position| self.mark_at(position))
    }

    /// Check if every mark is Correct
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.0 == Self::SOLVED.0
    }

    /// Count the marks of one kind
    #[must_use]
    pub fn count(self, mark: Mark) -> usize {
        self.marks().iter().filter(|&&m| m == mark).count()
    }

    /// Calculate the feedback the game gives when `guess` is played against `answer`
    ///
    /// Implements the standard duplicate-letter rules:
    /// 1. First pass: mark exact matches Correct and take them out of the letter pool
    /// 2. Second pass: mark remaining letters Misplaced while the pool still holds them
    /// 3. Everything else is Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    ///
    /// assert_eq!(Pattern::calculate(&guess, &answer).to_string(), "AACAC");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut available = answer.letter_counts();

        for (i, (g, a)) in guess.letters().iter().zip(answer.letters()).enumerate() {
            if g == a {
                marks[i] = Mark::Correct;
                available[letter_index(*g)] -= 1;
            }
        }

        for (i, &letter) in guess.letters().iter().enumerate() {
            if marks[i] == Mark::Correct {
                continue;
            }
            let count = &mut available[letter_index(letter)];
            if *count > 0 {
                marks[i] = Mark::Misplaced;
                *count -= 1;
            }
        }

        Self::from_marks(marks)
    }

    /// Parse a pattern from text like "AAMCA", "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `PatternError` if the text does not hold exactly five recognized marks.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Pattern;
    ///
    /// let p1 = Pattern::parse("CMA-y").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜⬜🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// assert!(Pattern::parse("CMAX").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        let chars: Vec<char> = s.trim().chars().collect();

        if chars.len() != WORD_LEN {
            return Err(PatternError::InvalidLength(chars.len()));
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        for (slot, ch) in marks.iter_mut().zip(chars) {
            *slot = Mark::from_char(ch).ok_or(PatternError::InvalidMark(ch))?;
        }

        Ok(Self::from_marks(marks))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Pattern;
    ///
    /// let p = Pattern::parse("CMACM").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks().iter().map(|m| m.as_emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{mark}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(guess: &str, answer: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        Pattern::calculate(&guess, &answer).to_string()
    }

    #[test]
    fn solved_constant() {
        assert_eq!(Pattern::SOLVED.value(), 242);
        assert!(Pattern::SOLVED.is_solved());
        assert_eq!(Pattern::SOLVED.count(Mark::Correct), 5);
        assert_eq!(Pattern::SOLVED.to_string(), "CCCCC");
        assert_eq!(Pattern::ALL_ABSENT.to_string(), "AAAAA");
    }

    #[test]
    fn marks_follow_positions() {
        let pattern = Pattern::parse("AAMCA").unwrap();
        assert_eq!(
            pattern.marks(),
            [
                Mark::Absent,
                Mark::Absent,
                Mark::Misplaced,
                Mark::Correct,
                Mark::Absent
            ]
        );
        // 1×9 + 2×27 = 63
        assert_eq!(pattern.value(), 63);
        assert_eq!(pattern.mark_at(3), Mark::Correct);
    }

    #[test]
    fn calculate_all_absent_and_all_correct() {
        assert_eq!(feedback("abcde", "fghij"), "AAAAA");
        assert_eq!(feedback("crane", "crane"), "CCCCC");
    }

    #[test]
    fn calculate_duplicate_letters_pool_is_shared() {
        // SPEED vs ERASE: both E's are misplaced, ERASE holds two
        assert_eq!(feedback("speed", "erase"), "MAMMA");
        // ROBOT vs FLOOR: first O misplaced, second O correct
        assert_eq!(feedback("robot", "floor"), "MMACA");
        // LLAMA vs LILAC: LILAC holds two L's but only one A
        assert_eq!(feedback("llama", "lilac"), "CMMAA");
    }

    #[test]
    fn calculate_green_takes_priority_over_yellow() {
        // The only E in the answer is matched exactly, so earlier E's get nothing
        assert_eq!(feedback("eerie", "crane"), "AAMAC");
    }

    #[test]
    fn parse_accepts_all_alphabets() {
        let board = Pattern::parse("CMAAM").unwrap();
        assert_eq!(Pattern::parse("cmaam").unwrap(), board);
        assert_eq!(Pattern::parse("GY--Y").unwrap(), board);
        assert_eq!(Pattern::parse("gy__y").unwrap(), board);
        assert_eq!(Pattern::parse(" 🟩🟨⬜⬜🟨 ").unwrap(), board);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(Pattern::parse("CMAAMC"), Err(PatternError::InvalidLength(6)));
        assert_eq!(Pattern::parse("CMA"), Err(PatternError::InvalidLength(3)));
        assert_eq!(Pattern::parse(""), Err(PatternError::InvalidLength(0)));
        assert_eq!(Pattern::parse("CMAXM"), Err(PatternError::InvalidMark('X')));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let pattern = Pattern::new(133);
        let text = pattern.to_string();
        assert_eq!(text.parse::<Pattern>().unwrap(), pattern);
    }
}

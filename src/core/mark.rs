//! Per-letter feedback marks

use std::fmt;

/// Feedback for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    /// Letter not in the target (subject to duplicate-letter rules)
    Absent,
    /// Letter in the target, but at another position
    Misplaced,
    /// Letter at exactly this position in the target
    Correct,
}

impl Mark {
    /// Base-3 digit used by the packed [`Pattern`](super::Pattern) encoding
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Misplaced => 1,
            Self::Correct => 2,
        }
    }

    /// Inverse of [`Mark::digit`]; any value above 1 is `Correct`
    #[inline]
    #[must_use]
    pub const fn from_digit(digit: u8) -> Self {
        match digit {
            0 => Self::Absent,
            1 => Self::Misplaced,
            _ => Self::Correct,
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts the board alphabet (`C`/`M`/`A`), the solver alphabet (`G`/`Y`/`-`/`_`)
    /// and the emoji squares. Letters are case-insensitive.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Mark;
    ///
    /// assert_eq!(Mark::from_char('c'), Some(Mark::Correct));
    /// assert_eq!(Mark::from_char('Y'), Some(Mark::Misplaced));
    /// assert_eq!(Mark::from_char('⬜'), Some(Mark::Absent));
    /// assert_eq!(Mark::from_char('x'), None);
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'C' | 'c' | 'G' | 'g' | '🟩' => Some(Self::Correct),
            'M' | 'm' | 'Y' | 'y' | '🟨' => Some(Self::Misplaced),
            'A' | 'a' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Canonical board letter: `C`, `M` or `A`
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Absent => 'A',
            Self::Misplaced => 'M',
            Self::Correct => 'C',
        }
    }

    /// Colored square for terminal output
    #[inline]
    #[must_use]
    pub const fn as_emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Misplaced => '🟨',
            Self::Correct => '🟩',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_round_trip() {
        for mark in [Mark::Absent, Mark::Misplaced, Mark::Correct] {
            assert_eq!(Mark::from_digit(mark.digit()), mark);
        }
    }

    #[test]
    fn board_and_solver_alphabets_agree() {
        assert_eq!(Mark::from_char('C'), Mark::from_char('G'));
        assert_eq!(Mark::from_char('M'), Mark::from_char('Y'));
        assert_eq!(Mark::from_char('A'), Mark::from_char('-'));
        assert_eq!(Mark::from_char('a'), Mark::from_char('_'));
    }

    #[test]
    fn rejects_unknown_characters() {
        assert_eq!(Mark::from_char('x'), None);
        assert_eq!(Mark::from_char('1'), None);
        assert_eq!(Mark::from_char(' '), None);
    }

    #[test]
    fn display_uses_board_letters() {
        assert_eq!(Mark::Correct.to_string(), "C");
        assert_eq!(Mark::Misplaced.to_string(), "M");
        assert_eq!(Mark::Absent.to_string(), "A");
    }
}

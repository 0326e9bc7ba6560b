//! Observations: one accepted guess and the feedback the board showed for it

use super::{Pattern, PatternError, Word, WordError};
use std::fmt;

/// A guess word paired with its feedback pattern
///
/// Both halves are validated on construction, so an `Observation` always has a
/// five-letter lowercase word and five marks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Observation {
    word: Word,
    pattern: Pattern,
}

/// Error type for unparseable observation text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservationError {
    MissingPattern,
    Word(WordError),
    Pattern(PatternError),
}

impl fmt::Display for ObservationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPattern => {
                write!(f, "Expected WORD:PATTERN, e.g. crane:AAMCA")
            }
            Self::Word(e) => write!(f, "Invalid word: {e}"),
            Self::Pattern(e) => write!(f, "Invalid pattern: {e}"),
        }
    }
}

impl std::error::Error for ObservationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingPattern => None,
            Self::Word(e) => Some(e),
            Self::Pattern(e) => Some(e),
        }
    }
}

impl From<WordError> for ObservationError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

impl From<PatternError> for ObservationError {
    fn from(e: PatternError) -> Self {
        Self::Pattern(e)
    }
}

impl Observation {
    #[must_use]
    pub const fn new(word: Word, pattern: Pattern) -> Self {
        Self { word, pattern }
    }

    /// Build an observation from raw word and pattern text
    ///
    /// # Errors
    /// Returns `ObservationError` if either half fails validation.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Observation;
    ///
    /// let obs = Observation::from_parts("crane", "AAMCA").unwrap();
    /// assert_eq!(obs.word().text(), "crane");
    /// assert_eq!(obs.pattern().to_string(), "AAMCA");
    /// ```
    pub fn from_parts(word: &str, pattern: &str) -> Result<Self, ObservationError> {
        Ok(Self {
            word: Word::new(word.trim())?,
            pattern: Pattern::parse(pattern)?,
        })
    }

    /// Parse `word:PATTERN`, `word=PATTERN` or `word PATTERN`
    ///
    /// # Errors
    /// Returns `ObservationError::MissingPattern` when no separator is found, or the
    /// word/pattern error of the offending half.
    pub fn parse(s: &str) -> Result<Self, ObservationError> {
        let s = s.trim();
        let (word, pattern) = s
            .split_once([':', '='])
            .or_else(|| s.split_once(char::is_whitespace))
            .ok_or(ObservationError::MissingPattern)?;
        Self::from_parts(word, pattern)
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// True if the board marked every letter Correct
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.pattern.is_solved()
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.word, self.pattern)
    }
}

impl std::str::FromStr for Observation {
    type Err = ObservationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

//! Observation history, rejected words and the attempt cap

use crate::core::Observation;
use crate::solver::InvalidWords;
use std::fmt;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Opening words typed at the start of every game
pub const OPENERS: &[&str] = &["moist", "lunch", "ready"];

/// Where a game stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for guess number `attempt` (1-based)
    InProgress { attempt: usize },
    /// The answer was found
    Solved { word: String, attempts: usize },
    /// Every attempt was used without finding the answer
    OutOfAttempts,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress { attempt } => write!(f, "attempt {attempt}/{MAX_ATTEMPTS}"),
            Self::Solved { word, attempts } => {
                write!(f, "solved {} in {attempts}/{MAX_ATTEMPTS}", word.to_uppercase())
            }
            Self::OutOfAttempts => write!(f, "out of attempts"),
        }
    }
}

/// Error when recording into a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Solved,
    OutOfAttempts,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved => write!(f, "Game is already solved"),
            Self::OutOfAttempts => write!(f, "All {MAX_ATTEMPTS} attempts have been used"),
        }
    }
}

impl std::error::Error for SessionError {}

/// State of one game
///
/// Holds the accepted guesses in order plus the words the game refused. Rejected
/// words never count as attempts.
///
/// # Examples
/// ```
/// use wordle_assist::core::Observation;
/// use wordle_assist::game::{GameStatus, Session};
///
/// let mut session = Session::new();
/// session.reject("xyzzy");
/// let status = session.record(Observation::parse("crane:AAMCA").unwrap()).unwrap();
///
/// assert_eq!(status, GameStatus::InProgress { attempt: 2 });
/// assert_eq!(session.attempts(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    observations: Vec<Observation>,
    invalid: InvalidWords,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    #[inline]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    #[must_use]
    #[inline]
    pub const fn invalid(&self) -> &InvalidWords {
        &self.invalid
    }

    /// Accepted guesses so far
    #[must_use]
    #[inline]
    pub fn attempts(&self) -> usize {
        self.observations.len()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.attempts())
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if let Some(solved) = self.observations.iter().position(Observation::is_solved) {
            return GameStatus::Solved {
                word: self.observations[solved].word().text().to_string(),
                attempts: solved + 1,
            };
        }
        if self.attempts() >= MAX_ATTEMPTS {
            GameStatus::OutOfAttempts
        } else {
            GameStatus::InProgress {
                attempt: self.attempts() + 1,
            }
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Append an accepted guess
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already solved or every attempt is used.
    pub fn record(&mut self, observation: Observation) -> Result<GameStatus, SessionError> {
        match self.status() {
            GameStatus::Solved { .. } => return Err(SessionError::Solved),
            GameStatus::OutOfAttempts => return Err(SessionError::OutOfAttempts),
            GameStatus::InProgress { .. } => {}
        }

        tracing::info!(attempt = self.attempts() + 1, %observation, "recorded guess");
        self.observations.push(observation);
        Ok(self.status())
    }

    /// Remember a word the game refused; returns false if it was already known
    pub fn reject(&mut self, word: &str) -> bool {
        let added = self.invalid.insert(word);
        if added {
            tracing::info!(word = %word.trim().to_lowercase(), "word rejected by game");
        }
        added
    }

    /// Drop the most recent guess
    pub fn undo(&mut self) -> Option<Observation> {
        let removed = self.observations.pop();
        if let Some(observation) = &removed {
            tracing::info!(%observation, "undid guess");
        }
        removed
    }

    /// Forget every guess and rejected word
    pub fn new_game(&mut self) {
        tracing::info!(
            attempts = self.attempts(),
            rejected = self.invalid.len(),
            "starting new game"
        );
        self.observations.clear();
        self.invalid.clear();
    }

    /// Adopt completed rows read from the board
    ///
    /// `rows` is the whole board, top to bottom. Rows beyond the ones already
    /// recorded are appended until the game ends; the count of adopted rows is
    /// returned. A board showing fewer rows than recorded changes nothing.
    pub fn sync_rows(&mut self, rows: &[Observation]) -> usize {
        let mut adopted = 0;
        for row in rows.iter().skip(self.attempts()) {
            if self.record(row.clone()).is_err() {
                break;
            }
            adopted += 1;
        }
        if adopted > 0 {
            tracing::debug!(adopted, attempts = self.attempts(), "synced board rows");
        }
        adopted
    }

    /// Openers still to be typed, given the attempts already on the board
    #[must_use]
    pub fn pending_openers(&self) -> &'static [&'static str] {
        let used = self.attempts().min(OPENERS.len());
        &OPENERS[used..]
    }
}

//! One-shot analysis command
//!
//! Turns a list of observations into a report of constraints, candidates and
//! eliminators that can be printed or serialized as JSON.

use crate::core::{Observation, ObservationError};
use crate::game::MAX_ATTEMPTS;
use crate::solver::{Assistant, EliminatorEntry, InvalidWords, SuggestionKind};
use serde::Serialize;

/// A letter pinned to a position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedLetter {
    pub letter: char,
    pub position: usize,
}

/// Constraints in report form
#[derive(Debug, Clone, Serialize)]
pub struct ConstraintReport {
    pub fixed: Vec<PlacedLetter>,
    /// Letters present but not at `position`
    pub misplaced: Vec<PlacedLetter>,
    pub excluded: String,
    pub untested: String,
}

/// One ranked probe word
#[derive(Debug, Clone, Serialize)]
pub struct EliminatorReport {
    pub word: String,
    pub score: u32,
    pub category: String,
    pub tested_letters: String,
}

impl From<&EliminatorEntry> for EliminatorReport {
    fn from(entry: &EliminatorEntry) -> Self {
        Self {
            word: entry.word.clone(),
            score: entry.score,
            category: entry.category.to_string(),
            tested_letters: entry.tested_letters().to_string(),
        }
    }
}

/// The suggested next guess
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionReport {
    pub word: String,
    pub eliminator: bool,
}

/// Full analysis of a game state
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub observations: Vec<String>,
    pub invalid: Vec<String>,
    pub constraints: ConstraintReport,
    pub candidate_count: usize,
    /// Candidates, truncated to the requested limit
    pub candidates: Vec<String>,
    pub eliminators: Vec<EliminatorReport>,
    pub suggestion: Option<SuggestionReport>,
}

impl AnalysisReport {
    #[must_use]
    pub fn no_matches(&self) -> bool {
        self.candidate_count == 0
    }

    /// Render the report as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Parse `word:PATTERN` arguments in order
///
/// # Errors
///
/// Returns the first observation that fails to parse.
pub fn parse_observations<S: AsRef<str>>(items: &[S]) -> Result<Vec<Observation>, ObservationError> {
    items.iter().map(|item| Observation::parse(item.as_ref())).collect()
}

/// Analyze a game state and build a report
///
/// At most `limit` candidates and eliminators are listed; the candidate count is
/// always the full one.
///
/// # Examples
/// ```
/// use wordle_assist::commands::{analyze_state, parse_observations};
/// use wordle_assist::solver::{Assistant, InvalidWords};
/// use wordle_assist::wordlists::loader::words_from_slice;
///
/// let dictionary = words_from_slice(&["crane", "trace", "prank"]);
/// let assistant = Assistant::new(&dictionary);
/// let history = parse_observations(&["crane:ACCCA"]).unwrap();
///
/// let report = analyze_state(&assistant, &history, &InvalidWords::new(), 10);
/// assert_eq!(report.candidates, ["prank"]);
/// assert_eq!(report.constraints.excluded, "ce");
/// ```
#[must_use]
pub fn analyze_state(
    assistant: &Assistant<'_>,
    observations: &[Observation],
    invalid: &InvalidWords,
    limit: usize,
) -> AnalysisReport {
    let analysis = assistant.analyze(observations, invalid);
    let attempts_left = MAX_ATTEMPTS.saturating_sub(observations.len());
    let suggestion = assistant
        .suggest(&analysis, attempts_left)
        .map(|s| SuggestionReport {
            word: s.word,
            eliminator: s.kind == SuggestionKind::Eliminator,
        });

    let constraints = &analysis.constraints;
    let constraint_report = ConstraintReport {
        fixed: constraints
            .fixed_positions()
            .map(|(position, letter)| PlacedLetter {
                letter: char::from(letter),
                position,
            })
            .collect(),
        misplaced: constraints
            .required_misplaced()
            .iter()
            .map(|&(letter, position)| PlacedLetter {
                letter: char::from(letter),
                position,
            })
            .collect(),
        excluded: constraints.excluded().to_string(),
        untested: constraints.untested().to_string(),
    };

    AnalysisReport {
        observations: observations.iter().map(ToString::to_string).collect(),
        invalid: invalid.sorted().into_iter().map(str::to_string).collect(),
        constraints: constraint_report,
        candidate_count: analysis.candidates.len(),
        candidates: analysis
            .candidates
            .iter()
            .take(limit)
            .map(|w| w.text().to_string())
            .collect(),
        eliminators: analysis
            .eliminators
            .iter()
            .take(limit)
            .map(EliminatorReport::from)
            .collect(),
        suggestion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Vec<crate::core::Word> {
        words_from_slice(&["crane", "salty", "batty", "fatty", "flout", "dusty"])
    }

    #[test]
    fn report_lists_constraints() {
        let dictionary = dictionary();
        let assistant = Assistant::new(&dictionary);
        let history = parse_observations(&["crane:AAMAA"]).unwrap();

        let report = analyze_state(&assistant, &history, &InvalidWords::new(), 10);
        assert_eq!(report.observations, ["crane:AAMAA"]);
        assert!(report.constraints.fixed.is_empty());
        assert_eq!(
            report.constraints.misplaced,
            [PlacedLetter {
                letter: 'a',
                position: 2
            }]
        );
        assert_eq!(report.constraints.excluded, "cenr");
        assert_eq!(report.candidate_count, 3);
        assert_eq!(report.eliminators[0].word, "flout");
        assert_eq!(report.eliminators[0].category, "3 differing + 5 untested");

        let suggestion = report.suggestion.unwrap();
        assert_eq!(suggestion.word, "flout");
        assert!(suggestion.eliminator);
    }

    #[test]
    fn limit_truncates_lists_but_not_count() {
        let dictionary = dictionary();
        let assistant = Assistant::new(&dictionary);
        let history = parse_observations(&["crane:AAMAA"]).unwrap();

        let report = analyze_state(&assistant, &history, &InvalidWords::new(), 1);
        assert_eq!(report.candidates, ["batty"]);
        assert_eq!(report.candidate_count, 3);
        assert_eq!(report.eliminators.len(), 1);
    }

    #[test]
    fn no_matches_report() {
        let dictionary = dictionary();
        let assistant = Assistant::new(&dictionary);
        let history = parse_observations(&["zzzzz:CCCCC"]).unwrap();

        let report = analyze_state(&assistant, &history, &InvalidWords::new(), 10);
        assert!(report.no_matches());
        assert!(report.suggestion.is_none());
    }

    #[test]
    fn bad_observation_is_reported() {
        assert!(matches!(
            parse_observations(&["crane"]),
            Err(ObservationError::MissingPattern)
        ));
        assert!(matches!(
            parse_observations(&["crane:AAMAA", "cran:AAAAA"]),
            Err(ObservationError::Word(_))
        ));
    }

    #[test]
    fn json_output() {
        let dictionary = dictionary();
        let assistant = Assistant::new(&dictionary);
        let history = parse_observations(&["crane:AAMAA"]).unwrap();
        let invalid: InvalidWords = ["fatty"].into_iter().collect();

        let report = analyze_state(&assistant, &history, &invalid, 10);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["candidate_count"], 2);
        assert_eq!(json["invalid"][0], "fatty");
        assert_eq!(json["constraints"]["misplaced"][0]["letter"], "a");
        assert_eq!(json["candidates"][1], "salty");
        assert_eq!(json["suggestion"]["eliminator"], false);
    }
}

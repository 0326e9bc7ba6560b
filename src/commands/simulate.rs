//! Simulate games against known answers
//!
//! Plays the assistant's own suggestions against every target (or a sample) and
//! aggregates how many games were won and in how many guesses.

use crate::core::{Observation, Pattern, Word};
use crate::game::{MAX_ATTEMPTS, Session};
use crate::solver::Assistant;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Outcome of one simulated game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub target: String,
    pub guesses: Vec<String>,
    pub solved: bool,
    pub duration: Duration,
}

impl GameRecord {
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.guesses.len()
    }
}

/// Which targets to play and how
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Play a random sample of this many targets
    pub sample: Option<usize>,
    /// Seed for the sample; random when absent
    pub seed: Option<u64>,
    /// Play only the first N targets (applied before sampling)
    pub limit: Option<usize>,
    /// Type the fixed openers before asking for suggestions
    pub use_openers: bool,
    pub show_progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sample: None,
            seed: None,
            limit: None,
            use_openers: true,
            show_progress: true,
        }
    }
}

/// Aggregated simulation results
#[derive(Debug)]
pub struct SimulationStats {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    /// `distribution[i]` counts games solved in `i + 1` guesses
    pub distribution: [usize; MAX_ATTEMPTS],
    /// Mean guesses over solved games
    pub average_guesses: f64,
    pub duration: Duration,
    pub seed: Option<u64>,
    pub failed_targets: Vec<String>,
    pub records: Vec<GameRecord>,
}

impl SimulationStats {
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.solved as f64 / self.total_games as f64 * 100.0
    }

    /// Solved games that took the most guesses, worst first
    #[must_use]
    pub fn hardest(&self, count: usize) -> Vec<&GameRecord> {
        let mut solved: Vec<&GameRecord> = self.records.iter().filter(|r| r.solved).collect();
        solved.sort_by(|a, b| b.attempts().cmp(&a.attempts()).then_with(|| a.target.cmp(&b.target)));
        solved.truncate(count);
        solved
    }
}

/// Play one game against `target`
///
/// Each turn takes the next opener (if enabled) or the assistant's suggestion and
/// scores it with [`Pattern::calculate`]. Stops on a solve, after the last attempt,
/// or when the assistant has nothing left to suggest.
///
/// # Examples
/// ```
/// use wordle_assist::commands::play_game;
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::Assistant;
/// use wordle_assist::wordlists::{WORDS, loader::words_from_slice};
///
/// let dictionary = words_from_slice(WORDS);
/// let assistant = Assistant::new(&dictionary);
/// let record = play_game(&assistant, &Word::new("lunch").unwrap(), true);
///
/// assert!(record.solved);
/// assert_eq!(record.guesses, ["moist", "lunch"]);
/// ```
#[must_use]
pub fn play_game(assistant: &Assistant<'_>, target: &Word, use_openers: bool) -> GameRecord {
    let start = Instant::now();
    let mut session = Session::new();

    while !session.is_over() {
        let opener = if use_openers {
            session.pending_openers().first().copied()
        } else {
            None
        };
        let next = match opener {
            Some(word) => word.to_string(),
            None => {
                let analysis = assistant.analyze(session.observations(), session.invalid());
                match assistant.suggest(&analysis, session.attempts_left()) {
                    Some(suggestion) => suggestion.word,
                    None => break,
                }
            }
        };
        let Ok(guess) = Word::new(next) else {
            break;
        };

        let pattern = Pattern::calculate(&guess, target);
        if session.record(Observation::new(guess, pattern)).is_err() {
            break;
        }
    }

    let guesses: Vec<String> = session
        .observations()
        .iter()
        .map(|o| o.word().text().to_string())
        .collect();
    let solved = session.observations().last().is_some_and(Observation::is_solved);
    tracing::trace!(answer = %target, attempts = guesses.len(), solved, "simulated game");

    GameRecord {
        target: target.text().to_string(),
        guesses,
        solved,
        duration: start.elapsed(),
    }
}

/// Play every selected target in parallel and aggregate the results
#[must_use]
pub fn run_simulation(
    assistant: &Assistant<'_>,
    targets: &[Word],
    config: &SimulationConfig,
) -> SimulationStats {
    let limited = &targets[..config.limit.unwrap_or(targets.len()).min(targets.len())];

    let (selected, seed): (Vec<&Word>, Option<u64>) = match config.sample {
        Some(count) => {
            let seed = config.seed.unwrap_or_else(rand::random);
            let mut rng = StdRng::seed_from_u64(seed);
            let mut sample: Vec<&Word> = limited.choose_multiple(&mut rng, count).collect();
            sample.sort_unstable();
            (sample, Some(seed))
        }
        None => (limited.iter().collect(), None),
    };

    tracing::info!(
        games = selected.len(),
        seed,
        openers = config.use_openers,
        "starting simulation"
    );

    let pb = if config.show_progress {
        ProgressBar::new(selected.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let records: Vec<GameRecord> = selected
        .par_iter()
        .map(|&target| {
            let record = play_game(assistant, target, config.use_openers);
            pb.inc(1);
            record
        })
        .collect();
    pb.finish_with_message("Complete!");

    let stats = summarize(records, start.elapsed(), seed);
    tracing::info!(
        solved = stats.solved,
        failed = stats.failed,
        average = stats.average_guesses,
        "simulation finished"
    );
    stats
}

fn summarize(records: Vec<GameRecord>, duration: Duration, seed: Option<u64>) -> SimulationStats {
    let mut distribution = [0usize; MAX_ATTEMPTS];
    let mut total_guesses = 0usize;
    let mut failed_targets = Vec::new();

    for record in &records {
        if record.solved {
            distribution[record.attempts() - 1] += 1;
            total_guesses += record.attempts();
        } else {
            failed_targets.push(record.target.clone());
        }
    }

    let solved = records.len() - failed_targets.len();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    SimulationStats {
        total_games: records.len(),
        solved,
        failed: failed_targets.len(),
        distribution,
        average_guesses,
        duration,
        seed,
        failed_targets,
        records,
    }
}

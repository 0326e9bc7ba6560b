//! Simple interactive CLI mode
//!
//! Text-based assistant without TUI

use crate::commands::analyze::analyze_state;
use crate::core::{Observation, Pattern, Word};
use crate::game::{GameStatus, Session};
use crate::output::formatters::pattern_to_emoji;
use crate::output::{print_analysis, print_board};
use crate::solver::Assistant;
use colored::Colorize;
use std::io::{self, Write};

/// Candidates and eliminators listed per turn
const SHOWN: usize = 12;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewGame,
    Undo,
    Help,
    /// The game refused this word
    Reject(String),
    /// A guess and its feedback
    Record(Observation),
    /// Feedback for the suggested word
    Feedback(Pattern),
    Unknown(String),
}

impl Command {
    /// Parse one input line
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let lower = input.to_lowercase();
        match lower.as_str() {
            "quit" | "q" | "exit" => return Self::Quit,
            "new" | "n" => return Self::NewGame,
            "undo" | "u" => return Self::Undo,
            "help" | "h" | "?" => return Self::Help,
            "win" | "solved" => return Self::Feedback(Pattern::SOLVED),
            _ => {}
        }

        if let Some(word) = lower
            .strip_prefix("invalid ")
            .or_else(|| lower.strip_prefix("reject "))
        {
            return Self::Reject(word.trim().to_string());
        }
        if let Ok(observation) = Observation::parse(input) {
            return Self::Record(observation);
        }
        if let Ok(pattern) = Pattern::parse(input) {
            return Self::Feedback(pattern);
        }
        Self::Unknown(input.to_string())
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple(assistant: &Assistant<'_>) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Wordle Assistant - Interactive Mode            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let mut session = Session::new();

    loop {
        println!("────────────────────────────────────────────────────────────");
        println!("Status: {}", session.status());
        println!("────────────────────────────────────────────────────────────");
        print_board(session.observations());

        let report = analyze_state(assistant, session.observations(), session.invalid(), SHOWN);
        print_analysis(&report);
        let openers = session.pending_openers();
        if !openers.is_empty() {
            println!(
                "🚀 Openers left: {}",
                openers.join(" → ").to_uppercase().bright_yellow().bold()
            );
        }
        let suggested = openers
            .first()
            .map(|w| (*w).to_string())
            .or_else(|| report.suggestion.as_ref().map(|s| s.word.clone()));

        let Some(input) = get_user_input("\nEnter WORD PATTERN (or a command)")? else {
            return Ok(());
        };

        match Command::parse(&input) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::NewGame => {
                session.new_game();
                println!("\n🔄 New game started!\n");
            }
            Command::Undo => match session.undo() {
                Some(observation) => println!("✓ Removed {observation}\n"),
                None => println!("Nothing to undo!\n"),
            },
            Command::Help => print_help(),
            Command::Reject(word) => {
                if session.reject(&word) {
                    println!("✓ {} marked as not accepted\n", word.to_uppercase());
                } else {
                    println!("{} was already marked\n", word.to_uppercase());
                }
            }
            Command::Record(observation) => record(&mut session, observation),
            Command::Feedback(pattern) => match suggested.as_deref().map(Word::new) {
                Some(Ok(word)) => record(&mut session, Observation::new(word, pattern)),
                _ => println!("❌ No suggested word to apply that pattern to\n"),
            },
            Command::Unknown(text) => {
                println!("❌ Could not read '{text}'. Type 'help' for the input format.\n");
            }
        }

        if session.is_over() && !play_again(&session)? {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
        if session.is_over() {
            session.new_game();
            println!("\n🔄 New game started!\n");
        }
    }
}

fn record(session: &mut Session, observation: Observation) {
    if let Err(e) = session.record(observation) {
        println!("❌ {e}\n");
    }
}

/// Print the end-of-game banner and ask whether to continue
fn play_again(session: &Session) -> io::Result<bool> {
    println!("\n{}", "═".repeat(62).bright_cyan());
    match session.status() {
        GameStatus::Solved { word, attempts } => {
            println!(
                "{}",
                "    🎉  W O R D L E   S O L V E D !  🎉    ".bright_green().bold()
            );
            println!(
                "\n  {} found in {} {}",
                word.to_uppercase().bright_white().bold(),
                attempts.to_string().bright_cyan().bold(),
                if attempts == 1 { "guess" } else { "guesses" }
            );
        }
        GameStatus::OutOfAttempts | GameStatus::InProgress { .. } => {
            println!("{}", "    Game over: all attempts used    ".red().bold());
        }
    }

    println!("\n  Guess history:");
    for (i, observation) in session.observations().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            observation.word().text().to_uppercase().bright_white().bold(),
            pattern_to_emoji(observation.pattern())
        );
    }
    println!("\n{}", "═".repeat(62).bright_cyan());

    let answer = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
    Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
}

fn print_help() {
    println!("After each guess, enter the word and the feedback pattern:");
    println!("  - C/G/🟩 correct position, M/Y/🟨 wrong position, A/-/⬜ not in word");
    println!("  - e.g. 'crane AAMCA' or 'crane:AAMCA'");
    println!("  - a pattern alone applies to the suggested word; 'win' if it was right\n");
    println!("Commands: 'invalid WORD', 'undo', 'new', 'help', 'quit'\n");
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

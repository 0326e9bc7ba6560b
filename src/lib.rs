//! Wordle Assistant
//!
//! Turns Wordle feedback into constraints, filters a dictionary down to the words
//! that can still be the answer, and ranks probe words that would best split the
//! remaining candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::Observation;
//! use wordle_assist::solver::{Assistant, InvalidWords};
//! use wordle_assist::wordlists::{WORDS, loader::words_from_slice};
//!
//! let dictionary = words_from_slice(WORDS);
//! let assistant = Assistant::new(&dictionary);
//!
//! let history = [Observation::parse("crane:AAMCA").unwrap()];
//! let analysis = assistant.analyze(&history, &InvalidWords::new());
//!
//! assert!(analysis.candidates.iter().all(|w| w.letter_at(3) == b'n'));
//! println!("{} candidates, constraints {}", analysis.candidates.len(), analysis.constraints);
//! ```

// Core domain types
pub mod core;

// Constraint extraction, filtering and ranking
pub mod solver;

// Game session state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

//! Formatting utilities for terminal output

use crate::core::{Mark, Observation, Pattern};
use colored::{ColoredString, Colorize};

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern.to_emoji()
}

/// Render a guess as colored letter tiles
#[must_use]
pub fn colored_guess(observation: &Observation) -> String {
    observation
        .word()
        .letters()
        .iter()
        .zip(observation.pattern().marks())
        .map(|(&letter, mark)| tile(char::from(letter).to_ascii_uppercase(), mark).to_string())
        .collect()
}

fn tile(letter: char, mark: Mark) -> ColoredString {
    let text = format!(" {letter} ");
    match mark {
        Mark::Correct => text.black().on_green().bold(),
        Mark::Misplaced => text.black().on_yellow().bold(),
        Mark::Absent => text.white().on_bright_black(),
    }
}

/// Show a letter list, or a dash when it is empty
#[must_use]
pub fn letters_or_dash(letters: &str) -> String {
    if letters.is_empty() {
        "-".to_string()
    } else {
        letters.to_uppercase()
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Known fixed letters as a five-slot template such as `_RAN_`
#[must_use]
pub fn position_template(fixed: &[(usize, char)]) -> String {
    let mut slots = ['_'; crate::core::WORD_LEN];
    for &(position, letter) in fixed {
        if let Some(slot) = slots.get_mut(position) {
            *slot = letter.to_ascii_uppercase();
        }
    }
    slots.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_to_emoji_all_gray() {
        assert_eq!(pattern_to_emoji(Pattern::ALL_ABSENT), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn pattern_to_emoji_all_green() {
        assert_eq!(pattern_to_emoji(Pattern::SOLVED), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn template_marks_fixed_letters() {
        assert_eq!(position_template(&[(1, 'r'), (3, 'n')]), "_R_N_");
        assert_eq!(position_template(&[]), "_____");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let observation = Observation::parse("crane:AAMCA").unwrap();
        assert_eq!(colored_guess(&observation), " C  R  A  N  E ");
    }

    #[test]
    fn empty_letters_show_dash() {
        assert_eq!(letters_or_dash(""), "-");
        assert_eq!(letters_or_dash("cer"), "CER");
    }
}

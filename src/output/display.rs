//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, letters_or_dash, position_template};
use crate::commands::{AnalysisReport, SimulationStats};
use crate::core::Observation;
use crate::game::MAX_ATTEMPTS;
use colored::Colorize;

/// Print the guesses so far as colored tiles
pub fn print_board(observations: &[Observation]) {
    for (i, observation) in observations.iter().enumerate() {
        println!(
            "  {}  {}  {}",
            (i + 1).to_string().bright_black(),
            colored_guess(observation),
            observation.pattern()
        );
    }
}

/// Print an analysis report
pub fn print_analysis(report: &AnalysisReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let fixed: Vec<(usize, char)> = report
        .constraints
        .fixed
        .iter()
        .map(|p| (p.position, p.letter))
        .collect();
    let misplaced: Vec<String> = report
        .constraints
        .misplaced
        .iter()
        .map(|p| format!("{} (not {})", p.letter.to_ascii_uppercase(), p.position + 1))
        .collect();

    println!("\n🔒 {}", "Constraints".bright_cyan().bold());
    println!("   Pattern:    {}", position_template(&fixed).bright_green().bold());
    let misplaced = if misplaced.is_empty() {
        "-".to_string()
    } else {
        misplaced.join(", ")
    };
    println!("   Misplaced:  {}", misplaced.yellow());
    println!(
        "   Excluded:   {}",
        letters_or_dash(&report.constraints.excluded).bright_black()
    );
    println!(
        "   Untested:   {}",
        letters_or_dash(&report.constraints.untested)
    );
    if !report.invalid.is_empty() {
        println!("   Rejected:   {}", report.invalid.join(", ").red());
    }

    if report.no_matches() {
        println!(
            "\n{}",
            "❌ No matches. Check the entered patterns.".red().bold()
        );
        return;
    }

    println!(
        "\n🎯 {} {}",
        "Candidates".bright_cyan().bold(),
        format!("({})", report.candidate_count).bright_black()
    );
    let shown: Vec<String> = report.candidates.iter().map(|w| w.to_uppercase()).collect();
    println!("   {}", shown.join("  "));
    if report.candidate_count > report.candidates.len() {
        println!(
            "   {}",
            format!("… and {} more", report.candidate_count - report.candidates.len())
                .bright_black()
        );
    }

    if !report.eliminators.is_empty() {
        println!("\n🔍 {}", "Eliminators".bright_cyan().bold());
        for entry in &report.eliminators {
            println!(
                "   {}  {:>5}  {:<26} {}",
                entry.word.to_uppercase().bright_white().bold(),
                entry.score,
                entry.category,
                entry.tested_letters.to_uppercase().bright_black()
            );
        }
    }

    if let Some(suggestion) = &report.suggestion {
        let kind = if suggestion.eliminator {
            "eliminator"
        } else {
            "candidate"
        };
        println!(
            "\n💡 Suggested guess: {} {}",
            suggestion.word.to_uppercase().bright_yellow().bold(),
            format!("({kind})").bright_black()
        );
    }
}

/// Print simulation statistics
pub fn print_simulation(stats: &SimulationStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("   Games played:     {}", stats.total_games);
    println!(
        "   Solved:           {} {}",
        stats.solved,
        format!("({:.1}%)", stats.success_rate()).green()
    );
    if stats.failed > 0 {
        println!(
            "   Failed:           {} {}",
            stats.failed,
            format!("({:.1}%)", 100.0 - stats.success_rate()).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());
    if let Some(seed) = stats.seed {
        println!("   Sample seed:      {seed}");
    }

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.distribution.iter().enumerate().take(MAX_ATTEMPTS) {
        let pct = if stats.solved > 0 {
            count as f64 / stats.solved as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {}: {} {count:4} ({pct:5.1}%)", i + 1, bar.green());
    }

    let hardest = stats.hardest(5);
    if hardest.iter().any(|r| r.attempts() >= 5) {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for record in hardest.iter().filter(|r| r.attempts() >= 5) {
            println!(
                "   {} ({} guesses: {})",
                record.target.to_uppercase().yellow(),
                record.attempts(),
                record.guesses.join(" → ")
            );
        }
    }

    if !stats.failed_targets.is_empty() {
        println!("\n❌ {}", "Failed Words".red().bold());
        for target in stats.failed_targets.iter().take(20) {
            println!("   {}", target.to_uppercase().red());
        }
        if stats.failed_targets.len() > 20 {
            println!("   … and {} more", stats.failed_targets.len() - 20);
        }
    }
}

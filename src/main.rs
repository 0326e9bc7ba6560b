//! Wordle Assistant - CLI
//!
//! Tracks Wordle feedback, narrows the dictionary to the remaining candidates and
//! ranks probe words that split them apart. TUI, line-mode, one-shot and simulator
//! front ends.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_assist::{
    commands::{SimulationConfig, analyze_state, parse_observations, run_simple, run_simulation},
    core::Word,
    output::{print_analysis, print_board, print_simulation},
    solver::{Assistant, InvalidWords, MAX_ELIMINATORS},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant: tracks feedback, lists candidates and ranks eliminator words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based assistant without TUI)
    Simple,

    /// Analyze a game state given as word:PATTERN observations
    Analyze {
        /// Observations in order, e.g. crane:AAMCA (C correct, M misplaced, A absent)
        #[arg(required = true)]
        observations: Vec<String>,

        /// Word the game refused to accept (repeatable)
        #[arg(short, long = "invalid")]
        invalid: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Maximum candidates and eliminators to list
        #[arg(short, long, default_value_t = MAX_ELIMINATORS)]
        limit: usize,
    },

    /// Play the assistant against known answers and report statistics
    Simulate {
        /// Number of random targets to play (default: every target)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for the random sample
        #[arg(long)]
        seed: Option<u64>,

        /// Only consider the first N dictionary words as targets
        #[arg(short, long)]
        limit: Option<usize>,

        /// Do not type the fixed openers first
        #[arg(long)]
        no_openers: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("wordle_assist={default_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list '{path}'"))?;
            anyhow::ensure!(!words.is_empty(), "word list '{path}' has no five-letter words");
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dictionary = load_dictionary(&cli.wordlist)?;
    tracing::info!(words = dictionary.len(), source = %cli.wordlist, "dictionary ready");
    let assistant = Assistant::new(&dictionary);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&dictionary),
        Commands::Simple => run_simple(&assistant).context("interactive session failed"),
        Commands::Analyze {
            observations,
            invalid,
            json,
            limit,
        } => run_analyze_command(&assistant, &observations, &invalid, json, limit),
        Commands::Simulate {
            count,
            seed,
            limit,
            no_openers,
        } => {
            let config = SimulationConfig {
                sample: count,
                seed,
                limit,
                use_openers: !no_openers,
                show_progress: true,
            };
            run_simulate_command(&assistant, &dictionary, &config);
            Ok(())
        }
    }
}

fn run_analyze_command(
    assistant: &Assistant<'_>,
    observations: &[String],
    invalid: &[String],
    json: bool,
    limit: usize,
) -> Result<()> {
    let observations = parse_observations(observations).context("invalid observation")?;
    let invalid: InvalidWords = invalid.iter().collect();
    let report = analyze_state(assistant, &observations, &invalid, limit);

    if json {
        println!("{}", report.to_json().context("failed to serialize report")?);
    } else {
        println!();
        print_board(&observations);
        print_analysis(&report);
    }
    Ok(())
}

fn run_simulate_command(assistant: &Assistant<'_>, dictionary: &[Word], config: &SimulationConfig) {
    println!("\n{}", "═".repeat(60));
    println!(" Wordle Assistant Simulation ");
    println!("{}", "═".repeat(60));
    println!("\nDictionary: {} words", dictionary.len());
    if let Some(count) = config.sample {
        println!("Sample:     {count} random targets");
    }
    if let Some(limit) = config.limit {
        println!("Limit:      first {limit} targets");
    }
    println!(
        "Openers:    {}\n",
        if config.use_openers { "on" } else { "off" }
    );

    let stats = run_simulation(assistant, dictionary, config);
    print_simulation(&stats);
}

fn run_play_command(dictionary: &[Word]) -> Result<()> {
    use wordle_assist::interactive::{App, run_tui};

    let app = App::new(dictionary);
    run_tui(app)
}

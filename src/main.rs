//! Wordle Hints - CLI
//!
//! Look up words matching hint notation, inspect how a guess splits the
//! dictionary, and search for the best guesses in parallel.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};
use wordle_hints::{
    commands::{
        analyze_distribution, filter_directory, find_best, find_best_pairs, generate_deck, lookup,
        write_deck,
    },
    core::Word,
    output::{
        print_best_guesses, print_best_pairs, print_deck_summary, print_distribution,
        print_filter_summaries, print_lookup_results,
    },
    solver::{DEFAULT_TOP, Dictionary, Evaluator, EvaluatorConfig},
    wordlists::{DEFAULT_DICTIONARY, FILTERED_DIR, SOURCE_DIR, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_hints",
    about = "Wordle hint lookup and parallel best-guess search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Target dictionary, one word per line
    #[arg(short, long, global = true, default_value = DEFAULT_DICTIONARY)]
    dict: PathBuf,

    /// Guess candidates (defaults to the target dictionary)
    #[arg(short, long, global = true)]
    guesses: Option<PathBuf>,

    /// Worker threads (defaults to available parallelism)
    #[arg(short, long, global = true)]
    workers: Option<usize>,

    /// Number of ranked results to show
    #[arg(short, long, global = true, default_value_t = DEFAULT_TOP)]
    top: usize,

    /// Hide the progress bar
    #[arg(long, global = true)]
    no_progress: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List dictionary words matching each hint argument
    Lookup {
        /// Hints such as `_A__E+R4S-TY`
        #[arg(required = true)]
        hints: Vec<String>,
    },

    /// Histogram of partition sizes for one guess
    Dist {
        /// Guess to analyze
        word: String,
    },

    /// Rank single guesses, optionally under known hints
    Best {
        /// Hints already known
        hints: Option<String>,
    },

    /// Rank pairs of guesses, optionally under known hints
    Pairs {
        /// Hints already known
        hints: Option<String>,
    },

    /// Write a flash card deck of partial words
    Deck {
        /// Output file
        #[arg(short, long, default_value = "wordle.txt")]
        output: PathBuf,
    },

    /// Filter raw word lists into dictionaries
    Filter {
        /// Directory of raw lists
        #[arg(long, default_value = SOURCE_DIR)]
        source: PathBuf,

        /// Directory for filtered dictionaries
        #[arg(long, default_value = FILTERED_DIR)]
        dest: PathBuf,
    },
}

impl Cli {
    fn evaluator_config(&self) -> EvaluatorConfig {
        let mut config = EvaluatorConfig {
            top: self.top,
            show_progress: !self.no_progress,
            ..EvaluatorConfig::default()
        };
        if let Some(workers) = self.workers {
            config.workers = workers.max(1);
        }
        config
    }
}

/// Load the target dictionary and the guess candidates
///
/// Candidates fall back to the dictionary words when no separate list is given.
fn load_words(dict: &Path, guesses: Option<&Path>) -> Result<(Dictionary, Vec<Word>)> {
    let words = load_from_file(dict)?;
    let candidates = match guesses {
        Some(path) => load_from_file(path)?,
        None => words.clone(),
    };
    info!(
        "{} targets, {} guess candidates",
        words.len(),
        candidates.len()
    );
    Ok((Dictionary::new(words), candidates))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Lookup { hints } => {
            let dictionary = Dictionary::new(load_from_file(&cli.dict)?);
            print_lookup_results(&lookup(&dictionary, hints));
        }
        Commands::Dist { word } => {
            let dictionary = Dictionary::new(load_from_file(&cli.dict)?);
            print_distribution(&analyze_distribution(&dictionary, word)?);
        }
        Commands::Best { hints } => {
            let (dictionary, candidates) = load_words(&cli.dict, cli.guesses.as_deref())?;
            let evaluator = Evaluator::new(&dictionary, cli.evaluator_config());
            print_best_guesses(&find_best(&evaluator, &candidates, hints.as_deref())?);
        }
        Commands::Pairs { hints } => {
            let (dictionary, candidates) = load_words(&cli.dict, cli.guesses.as_deref())?;
            let evaluator = Evaluator::new(&dictionary, cli.evaluator_config());
            print_best_pairs(&find_best_pairs(&evaluator, &candidates, hints.as_deref())?);
        }
        Commands::Deck { output } => {
            let words = load_from_file(&cli.dict)?;
            let cards = generate_deck(&words);
            write_deck(output, &cards)?;
            print_deck_summary(cards.len(), output);
        }
        Commands::Filter { source, dest } => {
            print_filter_summaries(&filter_directory(source, dest)?);
        }
    }

    Ok(())
}

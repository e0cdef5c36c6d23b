//! Display functions for command results

use super::formatters::{SEPARATOR, format_percent, histogram_rows};
use crate::commands::{BestResult, DistributionResult, FilterSummary, LookupResult};
use crate::solver::{Evaluation, ScoredGuess, ScoredPair};
use colored::Colorize;

/// Print the words matching each lookup argument
pub fn print_lookup_results(results: &[LookupResult]) {
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!("{SEPARATOR}");
        }
        match &result.outcome {
            Ok(words) => {
                for word in words {
                    println!("{word}");
                }
            }
            Err(e) => {
                println!("{}", format!("invalid argument {:?}", result.argument).red());
                log::debug!("{:?}: {e}", result.argument);
            }
        }
    }
}

/// Print a partition-size histogram
pub fn print_distribution(result: &DistributionResult) {
    println!(
        "{} {} {}",
        "Distribution for".bright_cyan().bold(),
        result.word.text().bright_yellow().bold(),
        format!(
            "({} targets, {})",
            result.targets,
            format_percent(result.score, result.targets)
        )
        .bright_black()
    );
    for (label, bar) in histogram_rows(&result.histogram) {
        println!("{label} {}", bar.green());
    }
}

fn print_outcome<T>(evaluation: &Evaluation<T>, mut row: impl FnMut(&T, usize) -> String) {
    match evaluation {
        Evaluation::NoMatches => println!("{}", "no matches".red()),
        Evaluation::Solved(word) => println!("{}", word.text().green().bold()),
        Evaluation::Ranked { remaining, ranked } => {
            println!(
                "{} {}",
                remaining.to_string().bright_yellow().bold(),
                "possible answers".bright_cyan()
            );
            for item in ranked {
                println!("{}", row(item, *remaining));
            }
        }
    }
}

/// Print the best single guesses
pub fn print_best_guesses(result: &BestResult<ScoredGuess>) {
    if let Some(hints) = &result.restriction {
        println!("{} {hints}", "Hints:".bright_cyan().bold());
    }
    print_outcome(&result.evaluation, |guess, remaining| {
        let word = if guess.preference == 2 {
            guess.word.text().green().to_string()
        } else {
            guess.word.text().to_string()
        };
        format!("{word} {}", format_percent(guess.score, remaining))
    });
}

/// Print the best guess pairs
pub fn print_best_pairs(result: &BestResult<ScoredPair>) {
    if let Some(hints) = &result.restriction {
        println!("{} {hints}", "Hints:".bright_cyan().bold());
    }
    print_outcome(&result.evaluation, |pair, remaining| {
        format!(
            "{} {} {}",
            pair.first,
            pair.second,
            format_percent(pair.score, remaining)
        )
    });
}

/// Print one line per filtered dictionary
pub fn print_filter_summaries(summaries: &[FilterSummary]) {
    for summary in summaries {
        println!("{:>10} {:>6}", summary.name, summary.words);
    }
}

/// Print where the deck was written
pub fn print_deck_summary(cards: usize, path: &std::path::Path) {
    println!(
        "{} {} cards to {}",
        "Wrote".green().bold(),
        cards,
        path.display()
    );
}

//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_best_guesses, print_best_pairs, print_deck_summary, print_distribution,
    print_filter_summaries, print_lookup_results,
};

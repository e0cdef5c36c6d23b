//! Distribution command
//!
//! Shows how evenly one guess splits the dictionary.

use crate::core::Word;
use crate::solver::{Dictionary, Histogram, partition_sizes};
use anyhow::{Context, Result};

/// Partition-size histogram for a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionResult {
    pub word: Word,
    pub targets: usize,
    /// Sum of partition sizes over all targets
    pub score: u64,
    pub histogram: Histogram,
}

/// Bucket the partition sizes `word` induces over the dictionary
///
/// # Errors
///
/// Returns an error if `word` is not a valid word.
pub fn analyze_distribution(dictionary: &Dictionary, word: &str) -> Result<DistributionResult> {
    let word: Word = word
        .parse()
        .with_context(|| format!("invalid argument {word:?}"))?;

    let sizes = partition_sizes(dictionary, &word);
    Ok(DistributionResult {
        targets: sizes.len(),
        score: sizes.iter().sum(),
        histogram: Histogram::from_sizes(&sizes),
        word,
    })
}

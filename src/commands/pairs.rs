//! Best-pair command

use super::best::{BestResult, parse_restriction};
use crate::core::Word;
use crate::solver::{Evaluator, ScoredPair};
use anyhow::Result;

/// Rank pairs of guesses played together
///
/// # Errors
///
/// Returns an error if `hints` is malformed.
pub fn find_best_pairs(
    evaluator: &Evaluator<'_>,
    candidates: &[Word],
    hints: Option<&str>,
) -> Result<BestResult<ScoredPair>> {
    let restriction = parse_restriction(hints)?;
    let evaluation = evaluator.evaluate_pairs(candidates, restriction.as_ref());
    Ok(BestResult {
        restriction,
        evaluation,
    })
}

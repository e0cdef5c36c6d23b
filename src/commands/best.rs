//! Best-guess command

use crate::core::{Hints, Word};
use crate::solver::{Evaluation, Evaluator, ScoredGuess};
use anyhow::{Context, Result};

/// Ranked guesses, optionally restricted by known hints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestResult<T> {
    pub restriction: Option<Hints>,
    pub evaluation: Evaluation<T>,
}

/// Parse an optional hint argument
///
/// # Errors
///
/// Returns an error naming the argument if it is malformed.
pub fn parse_restriction(argument: Option<&str>) -> Result<Option<Hints>> {
    argument
        .map(|text| {
            text.parse::<Hints>()
                .with_context(|| format!("invalid argument {text:?}"))
        })
        .transpose()
}

/// Rank single guesses
///
/// # Errors
///
/// Returns an error if `hints` is malformed.
pub fn find_best(
    evaluator: &Evaluator<'_>,
    candidates: &[Word],
    hints: Option<&str>,
) -> Result<BestResult<ScoredGuess>> {
    let restriction = parse_restriction(hints)?;
    let evaluation = evaluator.evaluate_best(candidates, restriction.as_ref());
    Ok(BestResult {
        restriction,
        evaluation,
    })
}

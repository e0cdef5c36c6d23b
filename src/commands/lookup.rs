//! Lookup command
//!
//! Lists dictionary words consistent with each hint argument.

use crate::core::{Hints, HintsError, Word};
use crate::solver::Dictionary;

/// Matches for one command-line argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub argument: String,
    pub outcome: Result<Vec<Word>, HintsError>,
}

/// Filter the dictionary once per argument
///
/// A malformed argument is reported in its own result and does not stop the
/// remaining lookups.
#[must_use]
pub fn lookup(dictionary: &Dictionary, arguments: &[String]) -> Vec<LookupResult> {
    arguments
        .iter()
        .map(|argument| LookupResult {
            argument: argument.clone(),
            outcome: argument
                .parse::<Hints>()
                .map(|hints| dictionary.filter(&hints)),
        })
        .collect()
}

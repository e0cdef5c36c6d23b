//! Core domain types for the hint engine
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! Everything here is pure: deriving, matching, merging and formatting hints
//! never touch I/O or shared state.

mod hints;
mod notation;
mod word;

pub use hints::{Hint, Hints, LetterSet};
pub use notation::HintsError;
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError};

//! Wordle Hints
//!
//! A constraint engine for Wordle feedback and a parallel search for the
//! guesses that split the remaining answers most evenly.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hints::core::{Hints, Word};
//!
//! let target = Word::new("angle").unwrap();
//! let guess = Word::new("table").unwrap();
//!
//! // Hints a player sees after guessing TABLE when the answer is ANGLE
//! let hints = Hints::derive(&target, &guess);
//! assert_eq!(hints.to_string(), "___LE+A2-BT");
//! assert!(hints.matches(&target));
//! ```

// Words, hints and notation
pub mod core;

// Dictionary, counting and evaluation
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

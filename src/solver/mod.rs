//! Partition counting and best-guess search
//!
//! This module turns the pure hint engine into rankings over a dictionary.

mod counter;
mod dictionary;
pub mod distribution;
mod evaluator;

pub use counter::MatchCounter;
pub use dictionary::Dictionary;
pub use distribution::{Histogram, NUM_BUCKETS, partition_sizes};
pub use evaluator::{
    DEFAULT_QUEUE_CAPACITY, DEFAULT_TOP, Evaluation, Evaluator, EvaluatorConfig, ScoredGuess,
    ScoredPair, score_percent,
};

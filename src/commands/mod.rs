//! Command implementations
//!
//! Each command returns data; rendering lives in [`crate::output`].

pub mod best;
pub mod deck;
pub mod dist;
pub mod filter;
pub mod lookup;
pub mod pairs;

pub use best::{BestResult, find_best};
pub use deck::{Card, generate_deck, write_deck};
pub use dist::{DistributionResult, analyze_distribution};
pub use filter::{FilterSummary, filter_directory};
pub use lookup::{LookupResult, lookup};
pub use pairs::find_best_pairs;

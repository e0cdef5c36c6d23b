//! Word lists for hint evaluation
//!
//! Target dictionaries and guess candidates are loaded from files at run time.

pub mod loader;

pub use loader::{filter_raw, load_from_file};

/// Directory holding filtered dictionaries
pub const FILTERED_DIR: &str = "filtered";

/// Directory holding raw source lists
pub const SOURCE_DIR: &str = "dicts";

/// Default target dictionary
pub const DEFAULT_DICTIONARY: &str = "filtered/small.txt";

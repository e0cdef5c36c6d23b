//! Word list loading utilities
//!
//! Dictionaries are plain text with one word per line. Raw source lists may
//! start with a header that ends in a `---` line.

use crate::core::{WORD_LENGTH, Word};
use anyhow::{Context, Result};
use log::{debug, warn};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Line that ends the header of a raw source list
pub const HEADER_END: &str = "---";

/// Load words from a file, skipping blank and invalid lines
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_hints::wordlists::loader::load_from_file;
///
/// let words = load_from_file("filtered/small.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    let words = parse_lines(&content);
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse one word per line
///
/// Invalid lines are logged and skipped.
#[must_use]
pub fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            Word::new(trimmed)
                .inspect_err(|e| warn!("skipping line {}: {trimmed:?} ({e})", number + 1))
                .ok()
        })
        .collect()
}

/// Convert a string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_hints::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate", "toolong"]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "CRANE");
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Reduce a raw source list to sorted, unique, uppercase words
///
/// Everything up to and including a `---` line is dropped when such a line
/// exists. Lines that are not exactly `WORD_LENGTH` ASCII letters are
/// ignored.
#[must_use]
pub fn filter_raw(content: &str) -> Vec<String> {
    let lines: Vec<&str> = content.lines().collect();
    let body = lines
        .iter()
        .position(|line| *line == HEADER_END)
        .map_or(&lines[..], |end| &lines[end + 1..]);

    let unique: FxHashSet<String> = body
        .iter()
        .filter(|line| line.len() == WORD_LENGTH && line.bytes().all(|b| b.is_ascii_alphabetic()))
        .map(|line| line.to_ascii_uppercase())
        .collect();

    let mut words: Vec<String> = unique.into_iter().collect();
    words.sort_unstable();
    words
}

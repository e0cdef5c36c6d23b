//! Flash card deck command
//!
//! Each card pins letters at some positions on the front and lists the
//! dictionary words that fit on the back.

use crate::core::{WORD_LENGTH, Word};
use anyhow::{Context, Result};
use log::info;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Buckets larger than this are skipped for 2 and 3 pinned positions
pub const MAX_BACK_WORDS: usize = 5;

/// Pinned position counts, in generation order
const PINNED: [usize; 3] = [2, 3, 4];

/// One flash card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Pinned letters with `_` blanks, e.g. `_A__E`
    pub front: String,
    /// Comma-separated matching words in dictionary order
    pub back: String,
}

impl Card {
    /// Tab-separated line for import into flash card tools
    #[must_use]
    pub fn line(&self) -> String {
        format!("{}\t{}", self.front, self.back)
    }
}

/// Ascending combinations of `size` positions out of `WORD_LENGTH`
fn position_sets(size: usize) -> Vec<Vec<usize>> {
    fn extend(start: usize, size: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == size {
            out.push(current.clone());
            return;
        }
        for position in start..WORD_LENGTH {
            current.push(position);
            extend(position + 1, size, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    extend(0, size, &mut Vec::with_capacity(size), &mut out);
    out
}

/// Build the deck for `words`
///
/// Cards are generated for every set of 2, 3 and 4 positions, with buckets
/// in letter order. When several cards share a back only the first is kept.
///
/// # Examples
/// ```
/// use wordle_hints::commands::generate_deck;
/// use wordle_hints::wordlists::loader::words_from_slice;
///
/// let cards = generate_deck(&words_from_slice(&["APPLE", "AMPLE"]));
/// assert_eq!(cards[0].line(), "AM___\tAMPLE");
/// ```
#[must_use]
pub fn generate_deck(words: &[Word]) -> Vec<Card> {
    let mut cards = Vec::new();

    for size in PINNED {
        for positions in position_sets(size) {
            let mut buckets: BTreeMap<Vec<u8>, Vec<&str>> = BTreeMap::new();
            for word in words {
                let key = positions.iter().map(|&p| word.char_at(p)).collect();
                buckets.entry(key).or_default().push(word.text());
            }

            for (key, bucket) in buckets {
                if size < WORD_LENGTH - 1 && bucket.len() > MAX_BACK_WORDS {
                    continue;
                }
                let mut front = [b'_'; WORD_LENGTH];
                for (&position, &letter) in positions.iter().zip(&key) {
                    front[position] = letter;
                }
                cards.push(Card {
                    front: front.iter().map(|&b| char::from(b)).collect(),
                    back: bucket.join(", "),
                });
            }
        }
    }

    let mut seen = FxHashSet::default();
    cards.retain(|card| seen.insert(card.back.clone()));
    cards
}

/// Write cards one per line
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_deck<P: AsRef<Path>>(path: P, cards: &[Card]) -> Result<()> {
    let path = path.as_ref();
    let mut out = String::new();
    for card in cards {
        out.push_str(&card.line());
        out.push('\n');
    }
    fs::write(path, out).with_context(|| format!("failed to write deck {}", path.display()))?;
    info!("wrote {} cards to {}", cards.len(), path.display());
    Ok(())
}

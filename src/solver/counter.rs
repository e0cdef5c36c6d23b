//! Memoizing match counter
//!
//! Each worker owns one counter. For a fixed guess many targets induce the
//! same hints, so partition sizes are cached by [`Hints::key`].

use super::Dictionary;
use crate::core::Hints;
use rustc_hash::FxHashMap;

/// Per-worker cache from hint key to the number of matching dictionary words
#[derive(Debug)]
pub struct MatchCounter<'a> {
    dictionary: &'a Dictionary,
    cache: FxHashMap<String, u64>,
    scans: usize,
}

impl<'a> MatchCounter<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            cache: FxHashMap::default(),
            scans: 0,
        }
    }

    /// Number of dictionary words consistent with `hints`
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::{Hints, Word};
    /// use wordle_hints::solver::{Dictionary, MatchCounter};
    ///
    /// let words = ["APPLE", "ANGLE", "TABLE"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(words.to_vec());
    /// let mut counter = MatchCounter::new(&dictionary);
    ///
    /// let hints: Hints = "____E".parse().unwrap();
    /// assert_eq!(counter.count_matches(&hints), 3);
    /// assert_eq!(counter.count_matches(&hints), 3);
    /// assert_eq!(counter.scans(), 1);
    /// ```
    pub fn count_matches(&mut self, hints: &Hints) -> u64 {
        let key = hints.key();
        if let Some(&count) = self.cache.get(&key) {
            return count;
        }

        let count = self.dictionary.count_matches(hints);
        self.scans += 1;
        self.cache.insert(key, count);
        count
    }

    /// Number of cache misses that required a dictionary scan
    #[must_use]
    pub const fn scans(&self) -> usize {
        self.scans
    }

    /// Number of distinct hint sets cached
    #[must_use]
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

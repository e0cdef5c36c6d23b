//! Target dictionary with a (position, letter) index
//!
//! The dictionary is built once and only read afterwards, so workers share it
//! by reference without synchronization.

use crate::core::{ALPHABET_SIZE, Hints, WORD_LENGTH, Word};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Words that may be the hidden target, plus lookup structures
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    members: FxHashSet<Word>,
    // Bucket `position * ALPHABET_SIZE + letter` lists indices of words with
    // that letter at that position.
    index: Vec<Vec<usize>>,
}

impl Dictionary {
    /// Build a dictionary and its position index
    ///
    /// Words are kept in the given order.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut index = vec![Vec::new(); WORD_LENGTH * ALPHABET_SIZE];
        for (i, word) in words.iter().enumerate() {
            for (position, &letter) in word.chars().iter().enumerate() {
                index[bucket(position, letter)].push(i);
            }
        }
        let members = words.iter().cloned().collect();

        Self {
            words,
            members,
            index,
        }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.members.contains(word)
    }

    /// Indices of words with `letter` at `position`
    #[must_use]
    pub fn with_letter_at(&self, position: usize, letter: u8) -> &[usize] {
        &self.index[bucket(position, letter)]
    }

    /// Words consistent with `hints`, in dictionary order
    #[must_use]
    pub fn filter(&self, hints: &Hints) -> Vec<Word> {
        self.words
            .par_iter()
            .filter(|word| hints.matches(word))
            .cloned()
            .collect()
    }

    /// Count words consistent with `hints` without memoization
    ///
    /// With at least one fixed hint only the smallest matching index bucket
    /// is scanned; every match must appear in all of them.
    #[must_use]
    pub fn count_matches(&self, hints: &Hints) -> u64 {
        let narrowest = hints
            .fixed()
            .filter_map(|hint| {
                hint.position
                    .map(|position| self.with_letter_at(position, hint.letter))
            })
            .min_by_key(|indices| indices.len());

        let count = match narrowest {
            Some(indices) => indices
                .iter()
                .filter(|&&i| hints.matches(&self.words[i]))
                .count(),
            None => self.words.iter().filter(|word| hints.matches(word)).count(),
        };
        count as u64
    }
}

#[inline]
fn bucket(position: usize, letter: u8) -> usize {
    position * ALPHABET_SIZE + usize::from(letter - b'A')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(texts: &[&str]) -> Dictionary {
        Dictionary::new(texts.iter().map(|t| Word::new(*t).unwrap()).collect())
    }

    #[test]
    fn index_buckets_by_position_and_letter() {
        let dict = dictionary(&["APPLE", "ANGLE", "TABLE"]);
        assert_eq!(dict.with_letter_at(0, b'A'), &[0, 1]);
        assert_eq!(dict.with_letter_at(1, b'A'), &[2]);
        assert_eq!(dict.with_letter_at(4, b'E'), &[0, 1, 2]);
        assert!(dict.with_letter_at(2, b'Z').is_empty());
    }

    #[test]
    fn contains_and_len() {
        let dict = dictionary(&["APPLE", "ANGLE"]);
        assert_eq!(dict.len(), 2);
        assert!(!dict.is_empty());
        assert!(dict.contains(&Word::new("angle").unwrap()));
        assert!(!dict.contains(&Word::new("TABLE").unwrap()));
    }

    #[test]
    fn filter_keeps_dictionary_order() {
        let dict = dictionary(&["TABLE", "APPLE", "CABLE", "ANGLE"]);
        let hints: Hints = "___LE-P".parse().unwrap();
        let kept = dict.filter(&hints);
        let kept: Vec<&str> = kept.iter().map(Word::text).collect();
        assert_eq!(kept, vec!["TABLE", "CABLE", "ANGLE"]);
    }

    #[test]
    fn indexed_count_agrees_with_full_scan() {
        let dict = dictionary(&[
            "APPLE", "ANGLE", "TABLE", "CABLE", "PASTA", "THERE", "EERIE", "SPEED",
        ]);
        for target in dict.words() {
            for guess in dict.words() {
                let hints = Hints::derive(target, guess);
                let full = dict.words().iter().filter(|w| hints.matches(w)).count() as u64;
                assert_eq!(dict.count_matches(&hints), full, "{hints}");
            }
        }
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::new(Vec::new());
        assert!(dict.is_empty());
        assert_eq!(dict.count_matches(&Hints::new()), 0);
        assert!(dict.filter(&Hints::new()).is_empty());
    }
}

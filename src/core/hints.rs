//! Constraint sets derived from guess feedback
//!
//! A green letter generates a fixed hint.
//! A yellow letter generates a moving hint and a required letter.
//! A gray letter generates a bad letter.
//!
//! Consider guessing TOAST and then PASTA against a target with a single A:
//! - TOAST marks the A yellow, giving a moving hint A@3 and one required A.
//! - PASTA marks the first A yellow (moving hint A@2) and the second A gray.
//!
//! Merged, this is `Moving = [A@2, A@3]`, `Required = A` and `Bad = A`: the A
//! is not at position 2 or 3, and the target holds exactly one A outside the
//! fixed positions. Positions here are 1-based as on the command line; the
//! code uses 0-based positions.
//!
//! A letter only in Required means "at least that many". A letter in both
//! Required and Bad means "exactly that many".

use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, index_letter, letter_index};
use std::fmt;

/// A set of uppercase letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a letter to the set
    pub fn insert(&mut self, letter: u8) {
        self.0 |= 1 << letter_index(letter);
    }

    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << letter_index(letter)) != 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(index_letter)
    }
}

/// A single positional hint
///
/// Field order makes the derived ordering sort by position first, with
/// unknown positions ahead of known ones, then by letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hint {
    /// Zero-based position, or `None` when only the letter's presence is known
    pub position: Option<usize>,
    pub letter: u8,
}

impl Hint {
    /// Hint bound to a known position
    #[must_use]
    pub const fn at(letter: u8, position: usize) -> Self {
        Self {
            position: Some(position),
            letter,
        }
    }

    /// Hint with an unknown position
    #[must_use]
    pub const fn anywhere(letter: u8) -> Self {
        Self {
            position: None,
            letter,
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(f, "{}@{}", char::from(self.letter), position + 1),
            None => write!(f, "{}@?", char::from(self.letter)),
        }
    }
}

/// Everything known about the target from one or more guesses
///
/// Values are kept in canonical form, so two constraint sets with the same
/// logical content compare equal and share the same [`Hints::key`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Hints {
    /// The word must have the given letter at the given position.
    pub(crate) fixed: [Option<u8>; WORD_LENGTH],

    /// The word must not have the given letter at the given position.
    /// Sorted by position then letter, without duplicates.
    pub(crate) moving: Vec<Hint>,

    /// Minimum count of each letter outside the fixed positions.
    pub(crate) required: [u8; ALPHABET_SIZE],

    /// Letters with no occurrences beyond the fixed and required ones.
    pub(crate) bad: LetterSet,
}

impl Hints {
    /// Constraint set that every word satisfies
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate the hints a player learns by guessing `guess` when the hidden
    /// word is `target`
    ///
    /// Uses the official two-pass scoring: exact matches first, then
    /// misplaced letters consuming the leftmost unused target occurrence.
    /// Guess positions that are neither send their letter to the bad set.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::{Hints, Word};
    ///
    /// let target = Word::new("APPLE").unwrap();
    /// let guess = Word::new("ANGLE").unwrap();
    /// let hints = Hints::derive(&target, &guess);
    ///
    /// assert_eq!(hints.to_string(), "A__LE-GN");
    /// assert!(hints.matches(&target));
    /// assert!(!hints.matches(&Word::new("TABLE").unwrap()));
    /// ```
    #[must_use]
    pub fn derive(target: &Word, guess: &Word) -> Self {
        let target = target.chars();
        let guess = guess.chars();

        let mut hints = Self::new();
        let mut consumed = [false; WORD_LENGTH];
        let mut explained = [false; WORD_LENGTH];

        for i in 0..WORD_LENGTH {
            if guess[i] == target[i] {
                hints.fixed[i] = Some(guess[i]);
                consumed[i] = true;
                explained[i] = true;
            }
        }

        for i in 0..WORD_LENGTH {
            if explained[i] {
                continue;
            }
            if let Some(j) = (0..WORD_LENGTH).find(|&j| !consumed[j] && target[j] == guess[i]) {
                consumed[j] = true;
                explained[i] = true;
                hints.moving.push(Hint::at(guess[i], i));
                hints.required[letter_index(guess[i])] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if !explained[i] {
                hints.bad.insert(guess[i]);
            }
        }

        hints.canonicalize();
        hints
    }

    /// Check whether `word` is consistent with these hints
    ///
    /// Fixed and moving hints are checked per position. Required letters are
    /// then assigned to the positions not pinned by fixed hints; since each
    /// position holds one letter, assignment reduces to comparing per-letter
    /// counts. A bad letter may not appear in any position left unassigned.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        let chars = word.chars();

        for (position, fixed) in self.fixed.iter().enumerate() {
            if let Some(letter) = *fixed
                && chars[position] != letter
            {
                return false;
            }
        }

        for hint in &self.moving {
            if let Some(position) = hint.position
                && chars[position] == hint.letter
            {
                return false;
            }
        }

        let mut free = [0u8; ALPHABET_SIZE];
        for (position, &letter) in chars.iter().enumerate() {
            if self.fixed[position].is_none() {
                free[letter_index(letter)] += 1;
            }
        }

        for (index, &available) in free.iter().enumerate() {
            let required = self.required[index];
            if available < required {
                return false;
            }
            if available > required && self.bad.contains(index_letter(index)) {
                return false;
            }
        }

        true
    }

    /// Combine hints from two guesses at the same target into the strongest
    /// single constraint set implied by both
    ///
    /// Required counts take the larger total lower bound of the two sources,
    /// net of the letters pinned by the merged fixed hints.
    ///
    /// # Panics
    /// Panics if both sides fix different letters at the same position. Hints
    /// derived against one real target always agree.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut merged = Self::new();

        for position in 0..WORD_LENGTH {
            merged.fixed[position] = match (self.fixed[position], other.fixed[position]) {
                (Some(a), Some(b)) => {
                    assert_eq!(a, b, "conflicting fixed hints at position {}", position + 1);
                    Some(a)
                }
                (a, b) => a.or(b),
            };
        }

        merged.moving = self.moving.iter().chain(&other.moving).copied().collect();

        let self_fixed = self.fixed_counts();
        let other_fixed = other.fixed_counts();
        let merged_fixed = merged.fixed_counts();
        for index in 0..ALPHABET_SIZE {
            let lower_bound = (self_fixed[index] + self.required[index])
                .max(other_fixed[index] + other.required[index]);
            merged.required[index] = lower_bound.saturating_sub(merged_fixed[index]);
        }

        merged.bad = self.bad.union(other.bad);

        merged.canonicalize();
        merged
    }

    /// Serialization used as a memoization key
    ///
    /// Sections are fixed letters (`_` for open positions), moving hints as
    /// letter plus 1-based position (`?` when unknown), required letters
    /// repeated by count, and bad letters, separated by `|`.
    #[must_use]
    pub fn key(&self) -> String {
        let required_len: usize = self.required.iter().map(|&c| usize::from(c)).sum();
        let mut key = String::with_capacity(
            WORD_LENGTH + 2 * self.moving.len() + required_len + self.bad.len() + 3,
        );

        for fixed in &self.fixed {
            key.push(fixed.map_or('_', char::from));
        }
        key.push('|');
        for hint in &self.moving {
            key.push(char::from(hint.letter));
            key.push(hint.position.map_or('?', |p| char::from(b'1' + p as u8)));
        }
        key.push('|');
        for (index, &count) in self.required.iter().enumerate() {
            for _ in 0..count {
                key.push(char::from(index_letter(index)));
            }
        }
        key.push('|');
        key.extend(self.bad.iter().map(char::from));
        key
    }

    /// Letter fixed at `position`, if any
    #[must_use]
    pub fn fixed_at(&self, position: usize) -> Option<u8> {
        self.fixed[position]
    }

    /// Fixed hints in position order
    pub fn fixed(&self) -> impl Iterator<Item = Hint> + '_ {
        self.fixed
            .iter()
            .enumerate()
            .filter_map(|(position, letter)| letter.map(|l| Hint::at(l, position)))
    }

    #[must_use]
    pub fn moving(&self) -> &[Hint] {
        &self.moving
    }

    /// Required count for a letter
    #[must_use]
    pub fn required(&self, letter: u8) -> u8 {
        self.required[letter_index(letter)]
    }

    #[must_use]
    pub const fn bad(&self) -> LetterSet {
        self.bad
    }

    /// True when no word is excluded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fixed.iter().all(Option::is_none)
            && self.moving.is_empty()
            && self.required.iter().all(|&c| c == 0)
            && self.bad.is_empty()
    }

    fn fixed_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for letter in self.fixed.iter().flatten() {
            counts[letter_index(*letter)] += 1;
        }
        counts
    }

    /// Bring the moving hints into canonical form
    ///
    /// Known-position hints are sorted and deduplicated. An unknown-position
    /// hint is kept for a letter exactly when its required count exceeds the
    /// number of positions it is known to be absent from.
    pub(crate) fn canonicalize(&mut self) {
        self.moving.retain(|hint| hint.position.is_some());
        self.moving.sort_unstable();
        self.moving.dedup();

        let mut known = [0u8; ALPHABET_SIZE];
        for hint in &self.moving {
            known[letter_index(hint.letter)] += 1;
        }
        for (index, &count) in self.required.iter().enumerate() {
            if count > known[index] {
                self.moving.push(Hint::anywhere(index_letter(index)));
            }
        }
        self.moving.sort_unstable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| word(t)).collect()
    }

    // Heavy on repeated letters so duplicate accounting gets exercised
    const SAMPLE: &[&str] = &[
        "APPLE", "ANGLE", "TABLE", "PASTA", "BRAND", "CHINA", "THERE", "EERIE", "SPEED",
        "ERASE", "ROBOT", "FLOOR", "LLAMA", "ALPHA", "PAPAL", "TOAST",
    ];

    #[test]
    fn letter_set_basics() {
        let mut set = LetterSet::new();
        assert!(set.is_empty());
        set.insert(b'Q');
        set.insert(b'A');
        set.insert(b'Q');
        assert_eq!(set.len(), 2);
        assert!(set.contains(b'A'));
        assert!(!set.contains(b'B'));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![b'A', b'Q']);
    }

    #[test]
    fn derive_apple_angle() {
        let hints = Hints::derive(&word("APPLE"), &word("ANGLE"));

        assert_eq!(
            hints.fixed().collect::<Vec<_>>(),
            vec![Hint::at(b'A', 0), Hint::at(b'L', 3), Hint::at(b'E', 4)]
        );
        assert!(hints.moving().is_empty());
        assert!((b'A'..=b'Z').all(|l| hints.required(l) == 0));
        assert_eq!(hints.bad().iter().collect::<Vec<_>>(), vec![b'G', b'N']);

        assert!(hints.matches(&word("APPLE")));
        assert!(!hints.matches(&word("TABLE")));
    }

    #[test]
    fn derive_duplicate_guess_letter_single_target_letter() {
        // PASTA has two As, BRAND has one A at neither A position
        let hints = Hints::derive(&word("BRAND"), &word("PASTA"));

        assert_eq!(hints.moving(), &[Hint::at(b'A', 1)]);
        assert_eq!(hints.required(b'A'), 1);
        assert!(hints.bad().contains(b'A'));
        assert_eq!(
            hints.bad().iter().collect::<Vec<_>>(),
            vec![b'A', b'P', b'S', b'T']
        );

        assert!(hints.matches(&word("BRAND")));
        assert!(hints.matches(&word("DRAIN")));
        // Exactly one A is allowed
        assert!(!hints.matches(&word("GRAAL")));
        // A must not sit where it was yellow
        assert!(!hints.matches(&word("BANJO")));
    }

    #[test]
    fn derive_letter_fixed_moving_and_bad() {
        // EERIE against THERE: last E green, first E yellow, second E gray
        let hints = Hints::derive(&word("THERE"), &word("EERIE"));

        assert_eq!(hints.fixed_at(4), Some(b'E'));
        assert_eq!(hints.moving(), &[Hint::at(b'E', 0), Hint::at(b'R', 2)]);
        assert_eq!(hints.required(b'E'), 1);
        assert_eq!(hints.required(b'R'), 1);
        assert_eq!(hints.bad().iter().collect::<Vec<_>>(), vec![b'E', b'I']);
        assert!(hints.matches(&word("THERE")));
        // Two free Es break the exact count
        assert!(!hints.matches(&word("TEERE")));
    }

    #[test]
    fn derive_green_consumes_before_yellow() {
        // SPEED against ERASE: no greens, S and both Es yellow
        let hints = Hints::derive(&word("ERASE"), &word("SPEED"));
        assert_eq!(hints.required(b'E'), 2);
        assert_eq!(hints.required(b'S'), 1);
        assert_eq!(hints.bad().iter().collect::<Vec<_>>(), vec![b'D', b'P']);

        // ROBOT against FLOOR: second O green, first O yellow
        let hints = Hints::derive(&word("FLOOR"), &word("ROBOT"));
        assert_eq!(hints.fixed_at(3), Some(b'O'));
        assert_eq!(hints.moving(), &[Hint::at(b'R', 0), Hint::at(b'O', 1)]);
        assert_eq!(hints.required(b'O'), 1);
        assert!(!hints.bad().contains(b'O'));
    }

    #[test]
    fn derive_exact_guess_is_fully_fixed() {
        let hints = Hints::derive(&word("LLAMA"), &word("LLAMA"));
        assert_eq!(hints.fixed().count(), WORD_LENGTH);
        assert!(hints.moving().is_empty());
        assert!(hints.bad().is_empty());

        let matching: Vec<_> = words(SAMPLE).into_iter().filter(|w| hints.matches(w)).collect();
        assert_eq!(matching, vec![word("LLAMA")]);
    }

    #[test]
    fn empty_hints_match_everything() {
        let hints = Hints::new();
        assert!(hints.is_empty());
        assert!(words(SAMPLE).iter().all(|w| hints.matches(w)));
        assert_eq!(hints.key(), "_____|||");
    }

    #[test]
    fn soundness_over_sample() {
        let sample = words(SAMPLE);
        for target in &sample {
            for guess in &sample {
                let hints = Hints::derive(target, guess);
                assert!(
                    hints.matches(target),
                    "{target} rejected by its own hints from {guess}: {}",
                    hints.key()
                );
            }
        }
    }

    #[test]
    fn equal_keys_share_matches() {
        let sample = words(SAMPLE);
        for guess in &sample {
            for first in &sample {
                let hints = Hints::derive(first, guess);
                for second in &sample {
                    if Hints::derive(second, guess).key() == hints.key() {
                        assert!(hints.matches(second));
                    }
                }
            }
        }
    }

    #[test]
    fn key_ignores_construction_order() {
        let mut first = Hints::new();
        first.fixed[2] = Some(b'A');
        first.moving.push(Hint::at(b'E', 4));
        first.moving.push(Hint::at(b'R', 0));
        first.moving.push(Hint::at(b'E', 4));
        first.required[letter_index(b'R')] = 1;
        first.required[letter_index(b'E')] = 1;
        first.bad.insert(b'T');
        first.bad.insert(b'S');
        first.canonicalize();

        let mut second = Hints::new();
        second.bad.insert(b'S');
        second.required[letter_index(b'E')] = 1;
        second.moving.push(Hint::at(b'R', 0));
        second.bad.insert(b'T');
        second.moving.push(Hint::at(b'E', 4));
        second.fixed[2] = Some(b'A');
        second.required[letter_index(b'R')] = 1;
        second.canonicalize();

        assert_eq!(first, second);
        assert_eq!(first.key(), second.key());
        assert_eq!(first.key(), "__A__|R1E5|ER|ST");
    }

    #[test]
    fn key_distinguishes_multiplicity() {
        let mut once = Hints::new();
        once.required[letter_index(b'E')] = 1;
        once.canonicalize();
        let mut twice = once.clone();
        twice.required[letter_index(b'E')] = 2;
        twice.canonicalize();

        assert_ne!(once.key(), twice.key());
        assert!(once.matches(&word("THERE")));
        assert!(twice.matches(&word("THERE")));
        assert!(once.matches(&word("BRAKE")));
        assert!(!twice.matches(&word("BRAKE")));
    }

    #[test]
    fn canonicalize_adds_unknown_position_for_unplaced_requirement() {
        let mut hints = Hints::new();
        hints.required[letter_index(b'A')] = 2;
        hints.moving.push(Hint::at(b'A', 3));
        hints.canonicalize();
        assert_eq!(hints.moving(), &[Hint::anywhere(b'A'), Hint::at(b'A', 3)]);

        hints.moving.push(Hint::at(b'A', 1));
        hints.canonicalize();
        assert_eq!(hints.moving(), &[Hint::at(b'A', 1), Hint::at(b'A', 3)]);
    }

    #[test]
    fn merge_toast_then_pasta() {
        // ANGLE has its only A at the first position
        let target = word("ANGLE");
        let toast = Hints::derive(&target, &word("TOAST"));
        let pasta = Hints::derive(&target, &word("PASTA"));
        let merged = toast.merge(&pasta);

        assert_eq!(merged.moving(), &[Hint::at(b'A', 1), Hint::at(b'A', 2)]);
        assert_eq!(merged.required(b'A'), 1);
        assert!(merged.bad().contains(b'A'));
        assert!(merged.matches(&target));
    }

    #[test]
    fn merge_takes_maximum_not_sum() {
        let target = word("SPEED");
        let first = Hints::derive(&target, &word("ERASE"));
        let second = Hints::derive(&target, &word("EERIE"));
        let merged = first.merge(&second);

        // Both guesses see the same two Es in SPEED
        let fixed_e = merged.fixed().filter(|h| h.letter == b'E').count() as u8;
        assert_eq!(fixed_e + merged.required(b'E'), 2);
        assert!(merged.matches(&target));
    }

    #[test]
    fn merge_fixed_absorbs_required() {
        let target = word("APPLE");
        let yellow = Hints::derive(&target, &word("PASTA"));
        let green = Hints::derive(&target, &word("ALPHA"));
        assert_eq!(yellow.required(b'A'), 1);

        let merged = yellow.merge(&green);
        assert_eq!(merged.fixed_at(0), Some(b'A'));
        assert_eq!(merged.required(b'A'), 0);
        // The yellow exclusion survives as a moving hint without a requirement
        assert!(merged.moving().contains(&Hint::at(b'A', 1)));
        assert!(merged.matches(&target));
    }

    #[test]
    fn merge_is_commutative() {
        let sample = words(SAMPLE);
        let target = word("THERE");
        for a in &sample {
            for b in &sample {
                let first = Hints::derive(&target, a);
                let second = Hints::derive(&target, b);
                assert_eq!(first.merge(&second), second.merge(&first));
            }
        }
    }

    #[test]
    fn merge_is_as_strict_as_both() {
        let sample = words(SAMPLE);
        for t1 in &sample {
            for t2 in &sample {
                for g1 in &sample {
                    for g2 in &sample {
                        let a = Hints::derive(t1, g1);
                        let b = Hints::derive(t2, g2);

                        let conflict = (0..WORD_LENGTH).any(|p| {
                            matches!((a.fixed_at(p), b.fixed_at(p)), (Some(x), Some(y)) if x != y)
                        });
                        if conflict || !sample.iter().any(|w| a.matches(w) && b.matches(w)) {
                            continue;
                        }

                        let merged = a.merge(&b);
                        for w in &sample {
                            assert_eq!(
                                merged.matches(w),
                                a.matches(w) && b.matches(w),
                                "{w} with {} + {}",
                                a.key(),
                                b.key()
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "conflicting fixed hints")]
    fn merge_conflicting_fixed_panics() {
        let a = Hints::derive(&word("APPLE"), &word("ANGLE"));
        let b = Hints::derive(&word("TABLE"), &word("TOAST"));
        let _ = a.merge(&b);
    }

    #[test]
    fn hint_display() {
        assert_eq!(Hint::at(b'A', 0).to_string(), "A@1");
        assert_eq!(Hint::anywhere(b'Z').to_string(), "Z@?");
    }
}

//! Command-line notation for hints
//!
//! `_A__E+R4S-TY` reads as: A fixed at position 2 and E at position 5, one R
//! that is not at position 4, one S anywhere, and no T or Y.
//!
//! ```text
//! hints := fixed [ '+' group+ ] [ '-' group+ ]
//! fixed := WORD_LENGTH letters or '_'
//! group := letter digit*
//! ```
//!
//! In the `+` section every group is one required occurrence and its digits
//! are 1-based positions the letter is known not to occupy. In the `-`
//! section a bare letter is bad, while a letter with digits only excludes
//! those positions.

use super::hints::{Hint, Hints};
use super::word::{ALPHABET_SIZE, WORD_LENGTH, index_letter, letter_index};
use std::fmt;
use std::str::FromStr;

/// Error type for malformed hint notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintsError {
    /// The fixed section does not have exactly `WORD_LENGTH` characters
    InvalidLength(usize),
    InvalidCharacter(char),
    /// A position digit outside `1..=WORD_LENGTH`
    InvalidPosition(char),
    /// A position digit with no preceding letter
    MissingLetter(char),
    /// A `+` or `-` marker with nothing after it
    EmptySection(char),
}

impl fmt::Display for HintsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(
                f,
                "fixed letters must cover exactly {WORD_LENGTH} positions, got {len}"
            ),
            Self::InvalidCharacter(c) => write!(f, "unexpected character {c:?}"),
            Self::InvalidPosition(c) => {
                write!(f, "position {c:?} is outside 1..={WORD_LENGTH}")
            }
            Self::MissingLetter(c) => write!(f, "position {c:?} does not follow a letter"),
            Self::EmptySection(marker) => write!(f, "no letters after {marker:?}"),
        }
    }
}

impl std::error::Error for HintsError {}

/// One letter with the positions written after it
struct Group {
    letter: u8,
    positions: Vec<usize>,
}

fn parse_groups(section: &[u8], marker: char) -> Result<Vec<Group>, HintsError> {
    if section.is_empty() {
        return Err(HintsError::EmptySection(marker));
    }

    let mut groups: Vec<Group> = Vec::new();
    for &byte in section {
        match byte {
            b'A'..=b'Z' => groups.push(Group {
                letter: byte,
                positions: Vec::new(),
            }),
            b'0'..=b'9' => {
                let digit = usize::from(byte - b'0');
                if !(1..=WORD_LENGTH).contains(&digit) {
                    return Err(HintsError::InvalidPosition(char::from(byte)));
                }
                let group = groups
                    .last_mut()
                    .ok_or(HintsError::MissingLetter(char::from(byte)))?;
                group.positions.push(digit - 1);
            }
            _ => return Err(HintsError::InvalidCharacter(char::from(byte))),
        }
    }
    Ok(groups)
}

impl FromStr for Hints {
    type Err = HintsError;

    /// Parse hint notation (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::{Hints, Word};
    ///
    /// let hints: Hints = "_a__e+r4s-ty".parse().unwrap();
    /// assert!(hints.matches(&Word::new("RAISE").unwrap()));
    /// assert!(!hints.matches(&Word::new("TASER").unwrap()));
    /// assert_eq!(hints.to_string(), "_A__E+R4S-TY");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if let Some(c) = text.chars().find(|c| !c.is_ascii()) {
            return Err(HintsError::InvalidCharacter(c));
        }
        let text = text.to_ascii_uppercase();
        let bytes = text.as_bytes();

        let fixed_len = bytes
            .iter()
            .position(|&b| b == b'+' || b == b'-')
            .unwrap_or(bytes.len());
        if fixed_len != WORD_LENGTH {
            return Err(HintsError::InvalidLength(fixed_len));
        }

        let mut hints = Hints::new();
        for (position, &byte) in bytes[..WORD_LENGTH].iter().enumerate() {
            match byte {
                b'_' => {}
                b'A'..=b'Z' => hints.fixed[position] = Some(byte),
                _ => return Err(HintsError::InvalidCharacter(char::from(byte))),
            }
        }

        let mut rest = &bytes[WORD_LENGTH..];

        if let Some(after) = rest.strip_prefix(b"+") {
            let end = after.iter().position(|&b| b == b'-').unwrap_or(after.len());
            for group in parse_groups(&after[..end], '+')? {
                let count = &mut hints.required[letter_index(group.letter)];
                *count = count.saturating_add(1);
                if group.positions.is_empty() {
                    hints.moving.push(Hint::anywhere(group.letter));
                }
                for position in group.positions {
                    hints.moving.push(Hint::at(group.letter, position));
                }
            }
            rest = &after[end..];
        }

        if let Some(after) = rest.strip_prefix(b"-") {
            for group in parse_groups(after, '-')? {
                if group.positions.is_empty() {
                    hints.bad.insert(group.letter);
                }
                for position in group.positions {
                    hints.moving.push(Hint::at(group.letter, position));
                }
            }
        } else if let Some(&byte) = rest.first() {
            return Err(HintsError::InvalidCharacter(char::from(byte)));
        }

        hints.canonicalize();
        Ok(hints)
    }
}

fn push_position(out: &mut String, position: usize) {
    out.push(char::from(b'1' + position as u8));
}

impl fmt::Display for Hints {
    /// Canonical notation; parsing the output yields an equal `Hints`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fixed = String::with_capacity(WORD_LENGTH);
        for letter in &self.fixed {
            fixed.push(letter.map_or('_', char::from));
        }

        let mut plus = String::new();
        let mut minus = String::new();
        for index in 0..ALPHABET_SIZE {
            let letter = index_letter(index);
            let positions: Vec<usize> = self
                .moving
                .iter()
                .filter(|hint| hint.letter == letter)
                .filter_map(|hint| hint.position)
                .collect();
            let count = usize::from(self.required[index]);

            if count == 0 {
                if !positions.is_empty() {
                    minus.push(char::from(letter));
                    for &position in &positions {
                        push_position(&mut minus, position);
                    }
                }
            } else {
                // One group per occurrence; the last group takes any extra positions
                for group in 0..count {
                    plus.push(char::from(letter));
                    let spill = group + 1 == count;
                    let taken: &[usize] = match positions.get(group..) {
                        Some(rest) if spill => rest,
                        Some(rest) => &rest[..rest.len().min(1)],
                        None => &[],
                    };
                    for &position in taken {
                        push_position(&mut plus, position);
                    }
                }
            }

            if self.bad.contains(letter) {
                minus.push(char::from(letter));
            }
        }

        write!(f, "{fixed}")?;
        if !plus.is_empty() {
            write!(f, "+{plus}")?;
        }
        if !minus.is_empty() {
            write!(f, "-{minus}")?;
        }
        Ok(())
    }
}

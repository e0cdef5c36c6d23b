//! Partition size distribution for a single guess
//!
//! For every target, count how many dictionary words remain after the hints
//! that target produces, then bucket those counts into a fixed number of
//! equally sized ranges.

use super::{Dictionary, MatchCounter};
use crate::core::{Hints, Word};
use rayon::prelude::*;

/// Number of histogram buckets
pub const NUM_BUCKETS: usize = 10;

/// Remaining-word count for each target, in dictionary order
#[must_use]
pub fn partition_sizes(dictionary: &Dictionary, guess: &Word) -> Vec<u64> {
    dictionary
        .words()
        .par_iter()
        .map_init(
            || MatchCounter::new(dictionary),
            |counter, target| counter.count_matches(&Hints::derive(target, guess)),
        )
        .collect()
}

/// Targets grouped by remaining-word count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    /// Width of each bucket; bucket `i` covers `i * bucket_size..(i + 1) * bucket_size`
    pub bucket_size: u64,
    pub buckets: Vec<u64>,
}

impl Histogram {
    /// Bucket `sizes` into [`NUM_BUCKETS`] ranges
    ///
    /// The bucket width steps through 1..=9, 10, 20, ..., 90, 100, 200, ...
    /// until the largest size fits.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::solver::Histogram;
    ///
    /// let histogram = Histogram::from_sizes(&[1, 1, 3, 25]);
    /// assert_eq!(histogram.bucket_size, 3);
    /// assert_eq!(histogram.buckets[0], 2);
    /// assert_eq!(histogram.buckets[1], 1);
    /// assert_eq!(histogram.buckets[8], 1);
    /// ```
    #[must_use]
    pub fn from_sizes(sizes: &[u64]) -> Self {
        let largest = sizes.iter().copied().max().unwrap_or(0);

        let mut bucket_size = 1u64;
        let mut increment = 1u64;
        while largest >= NUM_BUCKETS as u64 * bucket_size {
            bucket_size += increment;
            if (bucket_size / increment) % 10 == 0 {
                increment *= 10;
            }
        }

        let mut buckets = vec![0u64; NUM_BUCKETS];
        for &size in sizes {
            buckets[(size / bucket_size) as usize] += 1;
        }

        Self {
            bucket_size,
            buckets,
        }
    }

    /// Largest bucket population
    #[must_use]
    pub fn peak(&self) -> u64 {
        self.buckets.iter().copied().max().unwrap_or(0)
    }
}

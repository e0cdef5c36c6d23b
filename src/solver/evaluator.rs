//! Parallel best-guess search
//!
//! A dispatcher feeds work records into a bounded queue, a fixed pool of
//! workers scores them (each with its own [`MatchCounter`]), and the collector
//! drains a second bounded queue, restoring submission order by index.
//!
//! A guess scores the sum, over every target, of the number of words left
//! after seeing that target's hints. This equals the sum of squared partition
//! sizes, so lower is better.

use super::{Dictionary, MatchCounter};
use crate::core::{Hints, Word};
use crossbeam_channel::bounded;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::num::NonZeroUsize;
use std::thread;
use std::time::Instant;

/// Number of ranked results kept by default
pub const DEFAULT_TOP: usize = 20;

/// Capacity of the input and output queues
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Tuning for an evaluation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Worker threads (0 is treated as 1)
    pub workers: usize,
    pub queue_capacity: usize,
    /// Ranked results to keep
    pub top: usize,
    /// Draw a progress bar while collecting results
    pub show_progress: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            workers: thread::available_parallelism().map_or(1, NonZeroUsize::get),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            top: DEFAULT_TOP,
            show_progress: false,
        }
    }
}

/// A ranked guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGuess {
    pub word: Word,
    pub score: u64,
    /// 2 if the guess could still be the answer, 1 if it is in the
    /// dictionary, 0 otherwise
    pub preference: u8,
}

/// A ranked pair of guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredPair {
    pub first: Word,
    pub second: Word,
    pub score: u64,
}

/// Outcome of an evaluation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation<T> {
    /// No target satisfies the restriction
    NoMatches,
    /// Exactly one target remains; no search was run
    Solved(Word),
    Ranked {
        /// Targets the guesses were scored against
        remaining: usize,
        ranked: Vec<T>,
    },
}

/// Work item for single-guess evaluation
#[derive(Debug, Clone, Copy, Default)]
struct Record {
    index: usize,
    guess: usize,
    score: u64,
}

/// Work item for pair evaluation
#[derive(Debug, Clone, Copy)]
struct PairRecord {
    index: usize,
    first: usize,
    second: usize,
    score: u64,
}

/// Best `capacity` pairs seen so far, ordered by (score, index)
#[derive(Debug)]
struct BestList {
    capacity: usize,
    records: Vec<PairRecord>,
}

impl BestList {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            records: Vec::with_capacity(capacity + 1),
        }
    }

    fn rank(record: &PairRecord) -> (u64, usize) {
        (record.score, record.index)
    }

    fn insert(&mut self, record: PairRecord) {
        if self.records.len() < self.capacity {
            self.records.push(record);
        } else if let Some(worst) = self.records.last()
            && Self::rank(&record) < Self::rank(worst)
        {
            let last = self.records.len() - 1;
            self.records[last] = record;
        } else {
            return;
        }
        self.records.sort_unstable_by_key(Self::rank);
    }
}

/// Percentage of the worst possible score (every guess leaving every target)
#[must_use]
pub fn score_percent(score: u64, targets: usize) -> f64 {
    if targets == 0 {
        return 0.0;
    }
    100.0 * score as f64 / (targets * targets) as f64
}

/// Best-guess search over a target dictionary
pub struct Evaluator<'a> {
    dictionary: &'a Dictionary,
    config: EvaluatorConfig,
}

impl<'a> Evaluator<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, config: EvaluatorConfig) -> Self {
        Self { dictionary, config }
    }

    /// Rank `candidates` by how evenly they split the remaining targets
    ///
    /// With a `restriction`, only targets matching it are scored and each
    /// derived hint set is merged with the restriction before counting.
    /// Ties keep guesses that could still be the answer first, then
    /// dictionary order. Output does not depend on the number of workers.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::Word;
    /// use wordle_hints::solver::{Dictionary, Evaluation, Evaluator, EvaluatorConfig};
    ///
    /// let words: Vec<Word> = ["APPLE", "ANGLE", "TABLE"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let dictionary = Dictionary::new(words.clone());
    /// let evaluator = Evaluator::new(&dictionary, EvaluatorConfig::default());
    ///
    /// let Evaluation::Ranked { remaining, ranked } = evaluator.evaluate_best(&words, None) else {
    ///     panic!("expected a ranking");
    /// };
    /// assert_eq!(remaining, 3);
    /// assert_eq!(ranked.len(), 3);
    /// assert!(ranked.windows(2).all(|w| w[0].score <= w[1].score));
    /// ```
    #[must_use]
    pub fn evaluate_best(
        &self,
        candidates: &[Word],
        restriction: Option<&Hints>,
    ) -> Evaluation<ScoredGuess> {
        let targets = self.targets(restriction);
        match targets.as_slice() {
            [] => return Evaluation::NoMatches,
            [only] => return Evaluation::Solved(only.clone()),
            _ => {}
        }

        info!(
            "scoring {} guesses against {} targets with {} workers",
            candidates.len(),
            targets.len(),
            self.workers()
        );
        let start = Instant::now();

        let mut records = vec![Record::default(); candidates.len()];
        let jobs = (0..candidates.len()).map(|index| Record {
            index,
            guess: index,
            score: 0,
        });

        self.run_pool(
            candidates.len(),
            jobs,
            |counter, record: &mut Record| {
                let guess = &candidates[record.guess];
                for target in &targets {
                    let derived = Hints::derive(target, guess);
                    record.score += match restriction {
                        Some(known) => counter.count_matches(&derived.merge(known)),
                        None => counter.count_matches(&derived),
                    };
                }
            },
            |record| records[record.index] = record,
        );

        let possible: FxHashSet<&Word> = targets.iter().collect();
        let mut ranked: Vec<ScoredGuess> = records
            .into_iter()
            .map(|record| {
                let word = candidates[record.guess].clone();
                let preference = if possible.contains(&word) {
                    2
                } else if self.dictionary.contains(&word) {
                    1
                } else {
                    0
                };
                ScoredGuess {
                    word,
                    score: record.score,
                    preference,
                }
            })
            .collect();

        // Stable: equal entries stay in candidate order
        ranked.sort_by(|a, b| {
            a.score
                .cmp(&b.score)
                .then_with(|| b.preference.cmp(&a.preference))
        });
        ranked.truncate(self.config.top);

        info!("scored {} guesses in {:.2?}", candidates.len(), start.elapsed());

        Evaluation::Ranked {
            remaining: targets.len(),
            ranked,
        }
    }

    /// Rank unordered pairs of `candidates` played together
    ///
    /// A pair scores the sum over targets of the words matching both guesses'
    /// merged hints. Only the best `top` pairs are retained; ties go to the
    /// pair enumerated first.
    #[must_use]
    pub fn evaluate_pairs(
        &self,
        candidates: &[Word],
        restriction: Option<&Hints>,
    ) -> Evaluation<ScoredPair> {
        let targets = self.targets(restriction);
        match targets.as_slice() {
            [] => return Evaluation::NoMatches,
            [only] => return Evaluation::Solved(only.clone()),
            _ => {}
        }

        let n = candidates.len();
        let total = n * n.saturating_sub(1) / 2;
        info!(
            "scoring {total} guess pairs against {} targets with {} workers",
            targets.len(),
            self.workers()
        );
        let start = Instant::now();

        let jobs = (0..n)
            .flat_map(move |first| (first + 1..n).map(move |second| (first, second)))
            .enumerate()
            .map(|(index, (first, second))| PairRecord {
                index,
                first,
                second,
                score: 0,
            });

        let mut best = BestList::new(self.config.top);
        self.run_pool(
            total,
            jobs,
            |counter, record: &mut PairRecord| {
                let first = &candidates[record.first];
                let second = &candidates[record.second];
                for target in &targets {
                    let merged = Hints::derive(target, first).merge(&Hints::derive(target, second));
                    record.score += match restriction {
                        Some(known) => counter.count_matches(&merged.merge(known)),
                        None => counter.count_matches(&merged),
                    };
                }
            },
            |record| best.insert(record),
        );

        let ranked = best
            .records
            .into_iter()
            .map(|record| ScoredPair {
                first: candidates[record.first].clone(),
                second: candidates[record.second].clone(),
                score: record.score,
            })
            .collect();

        info!("scored {total} pairs in {:.2?}", start.elapsed());

        Evaluation::Ranked {
            remaining: targets.len(),
            ranked,
        }
    }

    fn targets(&self, restriction: Option<&Hints>) -> Vec<Word> {
        match restriction {
            Some(hints) => self.dictionary.filter(hints),
            None => self.dictionary.words().to_vec(),
        }
    }

    fn workers(&self) -> usize {
        self.config.workers.max(1)
    }

    fn progress_bar(&self, total: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {eta}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    }

    /// Dispatch `jobs` to the worker pool and hand each finished job to `collect`
    ///
    /// `total` must equal the number of jobs; the collector stops after
    /// receiving that many.
    fn run_pool<J, I, W, C>(&self, total: usize, jobs: I, work: W, mut collect: C)
    where
        J: Send,
        I: Iterator<Item = J> + Send,
        W: Fn(&mut MatchCounter<'_>, &mut J) + Sync,
        C: FnMut(J),
    {
        let capacity = self.config.queue_capacity.max(1);
        let (input_tx, input_rx) = bounded::<J>(capacity);
        let (output_tx, output_rx) = bounded::<J>(capacity);
        let progress = self.progress_bar(total);

        thread::scope(|scope| {
            scope.spawn(move || {
                for job in jobs {
                    if input_tx.send(job).is_err() {
                        break;
                    }
                }
            });

            for worker in 0..self.workers() {
                let input_rx = input_rx.clone();
                let output_tx = output_tx.clone();
                let work = &work;
                let dictionary = self.dictionary;
                scope.spawn(move || {
                    let mut counter = MatchCounter::new(dictionary);
                    let mut done = 0usize;
                    for mut job in input_rx {
                        work(&mut counter, &mut job);
                        done += 1;
                        if output_tx.send(job).is_err() {
                            break;
                        }
                    }
                    debug!(
                        "worker {worker}: {done} jobs, {} scans, {} cached partitions",
                        counter.scans(),
                        counter.cached()
                    );
                });
            }
            drop(input_rx);
            drop(output_tx);

            for job in output_rx.iter().take(total) {
                collect(job);
                progress.inc(1);
            }
        });

        progress.finish_and_clear();
    }
}

//! Formatting utilities for terminal output

use crate::solver::{Histogram, NUM_BUCKETS, score_percent};

/// Total width of a histogram row, label included
pub const GRAPH_WIDTH: usize = 100;

/// Line printed between lookup results
pub const SEPARATOR: &str = "====================";

/// Score as a percentage of the worst case, three decimals
#[must_use]
pub fn format_percent(score: u64, targets: usize) -> String {
    format!("{:.3}%", score_percent(score, targets))
}

/// Histogram rows as (right-aligned lower bound, bar)
///
/// Bars are scaled down by a whole factor so the tallest fits beside the
/// widest label within [`GRAPH_WIDTH`] columns.
#[must_use]
pub fn histogram_rows(histogram: &Histogram) -> Vec<(String, String)> {
    let last_label = (NUM_BUCKETS as u64 - 1) * histogram.bucket_size;
    let label_width = last_label.to_string().len();
    let graph_length = (GRAPH_WIDTH - label_width - 1) as u64;
    let scale = histogram.peak().div_ceil(graph_length).max(1);

    histogram
        .buckets
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let label = format!("{:>label_width$}", i as u64 * histogram.bucket_size);
            (label, "*".repeat((count / scale) as usize))
        })
        .collect()
}

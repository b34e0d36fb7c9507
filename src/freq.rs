// src/freq.rs
//! Frequency aggregation: raw match counts and per-1000-word normalized
//! frequencies for one document. Pure arithmetic, no I/O.

use serde::Serialize;

use crate::detect::{Structure, StructureMatches};

/// Per-document metrics: word count plus raw/normalized frequency for each
/// of the ten structures, indexed by [`Structure::index`].
#[derive(Debug, Clone, Serialize)]
pub struct MetricResult {
    pub word_count: usize,
    pub raw: [usize; 10],
    pub normed: [f64; 10],
}

impl MetricResult {
    /// Aggregates one document's matches.
    ///
    /// Normalized frequency is `raw / word_count * 1000`, rounded to two
    /// decimals. A zero word count yields `0.0` across the board rather
    /// than an error.
    #[must_use]
    pub fn aggregate(matches: &StructureMatches, word_count: usize) -> Self {
        let raw = matches.raw_counts();
        let mut normed = [0.0f64; 10];
        if word_count > 0 {
            for (i, &count) in raw.iter().enumerate() {
                normed[i] = round2(count as f64 / word_count as f64 * 1000.0);
            }
        }
        Self {
            word_count,
            raw,
            normed,
        }
    }

    #[must_use]
    pub fn raw_for(&self, s: Structure) -> usize {
        self.raw[s.index()]
    }

    #[must_use]
    pub fn normed_for(&self, s: Structure) -> f64 {
        self.normed[s.index()]
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

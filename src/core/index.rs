//! Interval index over a genome's features
//!
//! Uses rust-lapper for O(log n + k) overlap queries. Each interval stores
//! the feature's position in the sorted feature vector, so query results
//! can be returned in stored order.

use crate::core::genome::Feature;
use rust_lapper::{Interval, Lapper};

/// Interval keyed on feature position
pub type FeatureInterval = Interval<u64, usize>;

/// Overlap index for one genome's features
pub struct FeatureIndex {
    lapper: Lapper<u64, usize>,
}

impl FeatureIndex {
    /// Build the index from features in stored order
    ///
    /// Feature coordinates are 1-based closed; intervals are stored
    /// half-open as `[start, end + 1)`.
    pub fn new(features: &[Feature]) -> Self {
        let intervals: Vec<FeatureInterval> = features
            .iter()
            .enumerate()
            .map(|(i, f)| Interval {
                start: f.start,
                stop: f.end.saturating_add(1),
                val: i,
            })
            .collect();
        Self {
            lapper: Lapper::new(intervals),
        }
    }

    /// Positions of features overlapping the closed window `[start, end]`,
    /// ascending
    pub fn query(&self, start: u64, end: u64) -> Vec<usize> {
        if self.is_empty() || end < start {
            return Vec::new();
        }
        let mut hits: Vec<usize> = self
            .lapper
            .find(start, end.saturating_add(1))
            .map(|iv| iv.val)
            .collect();
        hits.sort_unstable();
        hits
    }

    /// Number of indexed features
    pub fn len(&self) -> usize {
        self.lapper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lapper.len() == 0
    }
}

//! Similarity engine for duplicate detection and related items

mod duplicates;

mod tags;

pub use duplicates::{check_duplicates, find_duplicates, DuplicateCheck, DuplicateDetector};
pub use tags::{shared_tag_count, tag_score};

use crate::config::GraphConfig;
use crate::text::KeywordSet;

/// Score how similar two keyword sets are
///
/// Returns the share of the smaller set that also appears in the larger one,
/// from 0.0 to 1.0. Either set being empty scores 0.0. The value does not
/// depend on argument order.
pub fn overlap_score(a: &KeywordSet, b: &KeywordSet) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let smaller = a.len().min(b.len());
    a.shared_with(b) as f64 / smaller as f64
}

/// Blend keyword and tag similarity into a single edge score, capped at 1.0
pub fn composite_score(keyword: f64, tag: f64, config: &GraphConfig) -> f64 {
    (keyword * config.keyword_weight + tag * config.tag_weight).min(1.0)
}

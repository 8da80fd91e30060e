use std::collections::HashSet;

use crate::config::GraphConfig;

/// Count the distinct tags two items have in common
pub fn shared_tag_count(a: &[String], b: &[String]) -> usize {
    let tags_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let tags_b: HashSet<&str> = b.iter().map(String::as_str).collect();
    tags_a.intersection(&tags_b).count()
}

/// Tag similarity: each shared tag adds `tag_step`, capped at 1.0
pub fn tag_score(shared: usize, config: &GraphConfig) -> f64 {
    (shared as f64 * config.tag_step).min(1.0)
}

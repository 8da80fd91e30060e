use tracing::{debug, warn};

use crate::config::DuplicateConfig;
use crate::item::Item;
use crate::similarity::overlap_score;
use crate::store::ItemSource;
use crate::text::{keyword_text, tokenize};

/// Outcome of an advisory duplicate check
///
/// The check never blocks the caller's action: a skipped check means "go
/// ahead", the same as finding nothing. The variants stay distinct so the
/// two cases can be told apart in diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum DuplicateCheck {
    /// Existing items that look like the candidate text, in source order
    Matches(Vec<Item>),
    /// The check ran and found nothing similar (or there was nothing to compare)
    NoMatches,
    /// The item snapshot could not be fetched
    Skipped { reason: String },
}

impl DuplicateCheck {
    /// Whether the caller can proceed without asking the user
    pub fn should_proceed(&self) -> bool {
        !matches!(self, DuplicateCheck::Matches(_))
    }

    /// Matching items; empty for `NoMatches` and `Skipped`
    pub fn matches(&self) -> &[Item] {
        match self {
            DuplicateCheck::Matches(items) => items,
            DuplicateCheck::NoMatches | DuplicateCheck::Skipped { .. } => &[],
        }
    }

    pub fn into_matches(self) -> Vec<Item> {
        match self {
            DuplicateCheck::Matches(items) => items,
            DuplicateCheck::NoMatches | DuplicateCheck::Skipped { .. } => Vec::new(),
        }
    }
}

/// Duplicate detector bound to an item source
pub struct DuplicateDetector<S> {
    source: S,
    config: DuplicateConfig,
}

impl<S: ItemSource> DuplicateDetector<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, DuplicateConfig::default())
    }

    pub fn with_config(source: S, config: DuplicateConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &DuplicateConfig {
        &self.config
    }

    /// Check `text` against a fresh snapshot of the store
    ///
    /// Each call fetches the collection again. `exclude_id` skips the item
    /// being edited so it does not match itself.
    pub async fn check(&self, text: &str, exclude_id: Option<&str>) -> DuplicateCheck {
        let input = tokenize(text);
        if input.is_empty() {
            return DuplicateCheck::NoMatches;
        }

        let items = match self.source.list_items().await {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "duplicate check skipped, proceeding");
                return DuplicateCheck::Skipped {
                    reason: e.to_string(),
                };
            }
        };

        let exclude_id = exclude_id.filter(|id| !id.is_empty());
        let total = items.len();
        let matches: Vec<Item> = items
            .into_iter()
            .filter(|item| exclude_id != Some(item.id.as_str()))
            .filter(|item| {
                let keywords = keyword_text(&[item.title.as_str(), item.content.as_str()]);
                self.config.is_duplicate(overlap_score(&input, &keywords))
            })
            .collect();

        debug!(
            keywords = input.len(),
            compared = total,
            matched = matches.len(),
            "duplicate_check"
        );

        if matches.is_empty() {
            DuplicateCheck::NoMatches
        } else {
            DuplicateCheck::Matches(matches)
        }
    }

    /// Items similar to `text`; empty when none match or the check was skipped
    pub async fn find(&self, text: &str, exclude_id: Option<&str>) -> Vec<Item> {
        self.check(text, exclude_id).await.into_matches()
    }
}

/// Check `text` for duplicates with the default threshold
pub async fn check_duplicates<S: ItemSource>(
    source: S,
    text: &str,
    exclude_id: Option<&str>,
) -> DuplicateCheck {
    DuplicateDetector::new(source).check(text, exclude_id).await
}

/// Find existing items similar to `text` with the default threshold
///
/// An item matches when at least half of the smaller keyword set is shared.
/// Fetch failures are logged and reported as no duplicates.
pub async fn find_duplicates<S: ItemSource>(
    source: S,
    text: &str,
    exclude_id: Option<&str>,
) -> Vec<Item> {
    DuplicateDetector::new(source).find(text, exclude_id).await
}

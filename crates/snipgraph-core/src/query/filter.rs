//! Item filtering utilities

use crate::item::{Item, ItemType};

/// Filter configuration for items
///
/// Unset filters match everything; every set filter must match.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter<'a> {
    /// Case-insensitive text search over title, description, content and tags
    pub query: Option<&'a str>,
    /// Exact folder
    pub folder: Option<&'a str>,
    /// Exact tag membership
    pub tag: Option<&'a str>,
    pub item_type: Option<ItemType>,
}

impl<'a> ItemFilter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query; an empty query is ignored, whitespace is matched as typed
    pub fn with_query(mut self, query: Option<&'a str>) -> Self {
        self.query = query.filter(|q| !q.is_empty());
        self
    }

    pub fn with_folder(mut self, folder: Option<&'a str>) -> Self {
        self.folder = folder;
        self
    }

    pub fn with_tag(mut self, tag: Option<&'a str>) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_type(mut self, item_type: Option<ItemType>) -> Self {
        self.item_type = item_type;
        self
    }

    /// Whether no filter is set
    pub fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.folder.is_none()
            && self.tag.is_none()
            && self.item_type.is_none()
    }

    /// Check if an item matches all configured filters
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_query(item)
            && self.matches_folder(item)
            && self.matches_tag(item)
            && self.matches_type(item)
    }

    /// Matching items, in input order
    pub fn apply(&self, items: &[Item]) -> Vec<Item> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }

    fn matches_query(&self, item: &Item) -> bool {
        let Some(query) = self.query else {
            return true;
        };
        let needle = query.to_lowercase();

        [&item.title, &item.description, &item.content]
            .into_iter()
            .chain(item.tags.iter())
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_folder(&self, item: &Item) -> bool {
        self.folder.map_or(true, |folder| item.folder == folder)
    }

    fn matches_tag(&self, item: &Item) -> bool {
        self.tag
            .map_or(true, |tag| item.tags.iter().any(|t| t == tag))
    }

    fn matches_type(&self, item: &Item) -> bool {
        self.item_type
            .as_ref()
            .map_or(true, |item_type| &item.item_type == item_type)
    }
}

//! Access to the external item store
//!
//! The backend that owns persistence is reached only through a
//! request/response boundary. The core consumes a single capability from
//! it, [`ItemSource::list_items`]; everything else in this module adapts
//! concrete transports to that capability.

pub mod cache;
pub mod commands;
pub mod file;

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::error::Result;
use crate::item::Item;

pub use cache::{ItemsChanged, SnapshotCache};
pub use commands::{BackendCommand, InvokeSource, Invoker};
pub use file::JsonFileSource;

/// Provider of full item snapshots
///
/// Every call returns the collection as it is now; implementations must not
/// serve a stale copy from an earlier call.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Fetch every item. No pagination, no filtering.
    async fn list_items(&self) -> Result<Vec<Item>>;
}

#[async_trait]
impl<T: ItemSource + ?Sized> ItemSource for &T {
    async fn list_items(&self) -> Result<Vec<Item>> {
        (**self).list_items().await
    }
}

#[async_trait]
impl ItemSource for Vec<Item> {
    async fn list_items(&self) -> Result<Vec<Item>> {
        Ok(self.clone())
    }
}

/// Sorted, deduplicated, non-empty tags across all items
pub fn all_tags(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.tags.iter())
        .filter(|tag| !tag.is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted, deduplicated, non-empty folders across all items
pub fn all_folders(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.folder.as_str())
        .filter(|folder| !folder.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

//! Snapshot caching for views that re-render often
//!
//! A list or graph view may keep the last snapshot between renders, but
//! must drop it whenever the collection changes: after a create, update or
//! delete it issued itself, or when the backend announces a change made
//! elsewhere (background enrichment, another window). The similarity core
//! never reads from this cache.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::item::Item;

use super::commands::BackendCommand;
use super::ItemSource;

/// Notification that the backend's item collection changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemsChanged;

pub struct SnapshotCache<S> {
    source: S,
    snapshot: Mutex<Option<Arc<Vec<Item>>>>,
    generation: AtomicU64,
}

impl<S: ItemSource> SnapshotCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            snapshot: Mutex::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// Number of invalidations so far
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Whether a snapshot is currently held
    pub fn is_warm(&self) -> bool {
        self.lock().is_some()
    }

    /// Drop the held snapshot so the next read refetches
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        *self.lock() = None;
        tracing::debug!(generation = self.generation(), "invalidate_snapshot");
    }

    /// Handle a change notification from the backend
    pub fn on_items_changed(&self, _event: ItemsChanged) {
        self.invalidate();
    }

    /// Invalidate if a successfully executed command changed the collection
    pub fn after_command(&self, command: &BackendCommand) {
        if command.mutates_items() {
            self.invalidate();
        }
    }

    /// Current snapshot, fetching it if none is held
    ///
    /// A fetch that races with an invalidation is returned to the caller
    /// but not kept.
    pub async fn items(&self) -> Result<Arc<Vec<Item>>> {
        if let Some(snapshot) = self.lock().as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        let started_at = self.generation();
        let fetched = Arc::new(self.source.list_items().await?);

        if self.generation() == started_at {
            *self.lock() = Some(Arc::clone(&fetched));
        }

        Ok(fetched)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Arc<Vec<Item>>>> {
        self.snapshot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

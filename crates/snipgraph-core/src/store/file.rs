//! Item snapshots exported to a JSON file
//!
//! The file holds a JSON array of items, in the same shape the backend
//! returns from `list_items`. It is re-read on every call.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{Result, SnipError};
use crate::item::Item;

use super::ItemSource;

#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the snapshot synchronously
    pub fn read(&self) -> Result<Vec<Item>> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SnipError::SourceNotFound {
                path: self.path.clone(),
            },
            _ => SnipError::Io(e),
        })?;

        let items: Vec<Item> =
            serde_json::from_str(&content).map_err(|e| SnipError::InvalidItems {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!(path = %self.path.display(), count = items.len(), "read_items");
        Ok(items)
    }

    /// Write a snapshot, replacing the file
    pub fn write(&self, items: &[Item]) -> Result<()> {
        let content = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[async_trait]
impl ItemSource for JsonFileSource {
    async fn list_items(&self) -> Result<Vec<Item>> {
        self.read()
    }
}

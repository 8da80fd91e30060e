//! Snipgraph Core Library
//!
//! Keyword similarity, advisory duplicate detection and relationship graph
//! construction for a personal snippet store.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod item;
pub mod logging;
pub mod query;
pub mod records;
pub mod similarity;
pub mod store;
pub mod text;

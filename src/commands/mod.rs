//! CLI commands for snipgraph

pub mod collections;
pub mod dispatch;
pub mod dupes;
pub mod graph;
pub mod helpers;
pub mod list;
pub mod score;
pub mod tokenize;

//! Utilities for records output format
//!
//! Every line starts with a one-letter kind: `H` header, `I` item,
//! `K` keyword, `M` duplicate match, `N` graph node, `E` graph edge,
//! `T` tag, `F` folder.

use crate::graph::{GraphEdge, GraphNode};
use crate::item::Item;

/// Records format version written in every header
pub const RECORDS_VERSION: u32 = 1;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Format the header line; `fields` are appended as `key=value`
pub fn format_header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H snipgraph={} mode={}", RECORDS_VERSION, mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// Format an item line: `I <id> <type> "<title>" tags=<csv> folder=<folder>`
pub fn format_item_record(item: &Item) -> String {
    let mut line = format!(
        "I {} {} \"{}\" tags={}",
        item.id,
        item.item_type,
        escape_quotes(&item.title),
        item.tags.join(",")
    );
    if !item.folder.is_empty() {
        line.push_str(&format!(" folder=\"{}\"", escape_quotes(&item.folder)));
    }
    line
}

/// Format a node line for graph output
pub fn format_node_record(node: &GraphNode) -> String {
    format!(
        "N {} {} \"{}\" size={} color={}",
        node.id,
        node.item_type,
        escape_quotes(&node.label),
        node.size,
        node.color
    )
}

/// Format an edge line: `E <source> <target> weight=<w>`
pub fn format_edge_record(edge: &GraphEdge) -> String {
    format!(
        "E {} {} weight={:.3}",
        edge.source, edge.target, edge.weight
    )
}

/// Format a duplicate match line
pub fn format_match_record(item: &Item) -> String {
    format!(
        "M {} {} \"{}\"",
        item.id,
        item.item_type,
        escape_quotes(&item.title)
    )
}

use std::collections::HashMap;
use std::time::Instant;

use rand::Rng;
use tracing::{debug, warn};

use crate::config::GraphConfig;
use crate::graph::style::{edge_color, edge_size, type_color};
use crate::graph::types::{Graph, GraphEdge, GraphNode};
use crate::item::Item;
use crate::similarity::{composite_score, overlap_score, shared_tag_count, tag_score};
use crate::text::{keyword_text, KeywordSet};
use crate::trace_time;

/// Build a graph with default settings and thread-local randomness
///
/// Nodes are colored by type and sized by tag count. Edges are weighted by
/// keyword overlap (60%) plus shared tags (40%).
pub fn build_graph(items: &[Item]) -> Graph {
    build_graph_with_rng(items, &GraphConfig::default(), &mut rand::thread_rng())
}

/// Build a graph, drawing initial coordinates from `rng`
///
/// Apart from the coordinates the result depends only on `items` and
/// `config`; a seeded generator makes it fully reproducible.
pub fn build_graph_with_rng<R: Rng + ?Sized>(
    items: &[Item],
    config: &GraphConfig,
    rng: &mut R,
) -> Graph {
    let start = Instant::now();
    let mut graph = Graph::new();

    // Tokenize each item once for all of its pairings
    let mut keywords: HashMap<&str, KeywordSet> = HashMap::with_capacity(items.len());
    let mut members: Vec<&Item> = Vec::with_capacity(items.len());

    for item in items {
        let node = GraphNode {
            id: item.id.clone(),
            label: item.title.clone(),
            size: config.node_size(item.tags.len()),
            color: type_color(&item.item_type),
            x: rng.gen::<f64>() * config.layout_extent,
            y: rng.gen::<f64>() * config.layout_extent,
            item_type: item.item_type.clone(),
        };

        if !graph.add_node(node) {
            warn!(id = %item.id, "duplicate item id, keeping first occurrence");
            continue;
        }

        keywords.insert(
            &item.id,
            keyword_text(&[
                item.title.as_str(),
                item.description.as_str(),
                item.content.as_str(),
            ]),
        );
        members.push(item);
    }

    let empty = KeywordSet::new();
    for (i, a) in members.iter().enumerate() {
        let keywords_a = keywords.get(a.id.as_str()).unwrap_or(&empty);

        for b in &members[i + 1..] {
            let keywords_b = keywords.get(b.id.as_str()).unwrap_or(&empty);

            let keyword = overlap_score(keywords_a, keywords_b);
            let tag = tag_score(shared_tag_count(&a.tags, &b.tags), config);
            let weight = composite_score(keyword, tag, config);

            if config.clears_edge_threshold(weight) {
                graph.add_edge(GraphEdge {
                    source: a.id.clone(),
                    target: b.id.clone(),
                    weight,
                    size: edge_size(weight),
                    color: edge_color(weight),
                });
            }
        }
    }

    debug!(nodes = graph.order(), edges = graph.size(), "build_graph");
    trace_time!(start, "build_graph");

    graph
}

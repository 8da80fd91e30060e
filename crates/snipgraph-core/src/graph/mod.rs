//! Relationship graph construction
//!
//! Nodes are items; edges connect pairs whose blended keyword and tag
//! similarity clears the edge threshold. The graph carries display
//! attributes (color by type, size by tag count, edge thickness and
//! opacity by weight) for a renderer and its layout pass.

mod builder;
pub mod style;
mod types;

pub use builder::{build_graph, build_graph_with_rng};
pub use style::{legend, type_color, Color, LegendEntry, Rgba};
pub use types::{Graph, GraphEdge, GraphNode};

//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Top-level snipgraph configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// JSON snapshot of items to read when `--items` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_file: Option<String>,

    /// Duplicate detection settings
    #[serde(default)]
    pub duplicates: DuplicateConfig,

    /// Relationship graph settings
    #[serde(default)]
    pub graph: GraphConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            items_file: None,
            duplicates: DuplicateConfig::default(),
            graph: GraphConfig::default(),
        }
    }
}

/// Duplicate detection settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DuplicateConfig {
    /// Minimum overlap score for an item to count as a duplicate (inclusive)
    #[serde(default = "default_duplicate_threshold")]
    pub threshold: f64,
}

impl Default for DuplicateConfig {
    fn default() -> Self {
        Self {
            threshold: default_duplicate_threshold(),
        }
    }
}

/// Relationship graph settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Minimum composite score for an edge (inclusive)
    #[serde(default = "default_edge_threshold")]
    pub edge_threshold: f64,

    /// Weight of keyword overlap in the composite score
    #[serde(default = "default_keyword_weight")]
    pub keyword_weight: f64,

    /// Weight of tag overlap in the composite score
    #[serde(default = "default_tag_weight")]
    pub tag_weight: f64,

    /// Tag score contributed by each shared tag (capped at 1.0)
    #[serde(default = "default_tag_step")]
    pub tag_step: f64,

    #[serde(default = "default_node_base_size")]
    pub node_base_size: f64,

    #[serde(default = "default_node_size_per_tag")]
    pub node_size_per_tag: f64,

    #[serde(default = "default_node_max_size")]
    pub node_max_size: f64,

    /// Initial coordinates are drawn from `[0, layout_extent)` on each axis
    #[serde(default = "default_layout_extent")]
    pub layout_extent: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            edge_threshold: default_edge_threshold(),
            keyword_weight: default_keyword_weight(),
            tag_weight: default_tag_weight(),
            tag_step: default_tag_step(),
            node_base_size: default_node_base_size(),
            node_size_per_tag: default_node_size_per_tag(),
            node_max_size: default_node_max_size(),
            layout_extent: default_layout_extent(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_duplicate_threshold() -> f64 {
    0.5
}

fn default_edge_threshold() -> f64 {
    0.15
}

fn default_keyword_weight() -> f64 {
    0.6
}

fn default_tag_weight() -> f64 {
    0.4
}

fn default_tag_step() -> f64 {
    0.3
}

fn default_node_base_size() -> f64 {
    5.0
}

fn default_node_size_per_tag() -> f64 {
    2.0
}

fn default_node_max_size() -> f64 {
    15.0
}

fn default_layout_extent() -> f64 {
    100.0
}

//! Visual attributes for graph nodes and edges

use std::fmt;

use serde::{Serialize, Serializer};

use crate::item::ItemType;

/// An opaque RGB color, rendered as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A color with alpha, rendered as `rgba(r, g, b, a)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub color: Color,
    pub alpha: f64,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.color.r, self.color.g, self.color.b, self.alpha
        )
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub const NOTE_COLOR: Color = Color::rgb(0x33, 0x9a, 0xf0); // blue
pub const SHELL_COLOR: Color = Color::rgb(0x40, 0xc0, 0x57); // green
pub const SNIPPET_COLOR: Color = Color::rgb(0x79, 0x50, 0xf2); // violet
pub const CONFIG_COLOR: Color = Color::rgb(0xfd, 0x7e, 0x14); // orange
pub const DEFAULT_COLOR: Color = Color::rgb(0x86, 0x8e, 0x96); // gray

const EDGE_GRAY: Color = Color::rgb(150, 150, 150);

/// Node color for an item type; unknown types are gray
pub fn type_color(item_type: &ItemType) -> Color {
    match item_type {
        ItemType::Note => NOTE_COLOR,
        ItemType::Shell => SHELL_COLOR,
        ItemType::Snippet => SNIPPET_COLOR,
        ItemType::Config => CONFIG_COLOR,
        ItemType::Other(_) => DEFAULT_COLOR,
    }
}

/// Edge thickness: 1 at weight 0, 5 at weight 1
pub fn edge_size(weight: f64) -> f64 {
    1.0 + weight * 4.0
}

/// Edge color; stronger edges are more opaque
pub fn edge_color(weight: f64) -> Rgba {
    Rgba {
        color: EDGE_GRAY,
        alpha: 0.2 + weight * 0.6,
    }
}

/// One legend row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub label: &'static str,
    pub color: Color,
}

fn legend_label(item_type: &ItemType) -> &'static str {
    match item_type {
        ItemType::Note => "Note",
        ItemType::Shell => "Shell",
        ItemType::Snippet => "Snippet",
        ItemType::Config => "Config",
        ItemType::Other(_) => "Other",
    }
}

/// Legend for the known item types, in display order
pub fn legend() -> Vec<LegendEntry> {
    ItemType::KNOWN
        .into_iter()
        .map(|item_type| LegendEntry {
            color: type_color(&item_type),
            label: legend_label(&item_type),
            item_type,
        })
        .collect()
}

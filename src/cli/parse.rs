use snipgraph_core::format::OutputFormat;
use snipgraph_core::item::ItemType;

/// Parse item type from string
pub fn parse_item_type(s: &str) -> std::result::Result<ItemType, String> {
    s.parse::<ItemType>().map_err(|e| e.to_string())
}

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

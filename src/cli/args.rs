//! Argument structs for subcommands

use clap::Args;

use snipgraph_core::item::ItemType;

use super::parse::parse_item_type;

#[derive(Args, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text to tokenize
    pub text: String,
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// First text
    pub a: String,

    /// Second text
    pub b: String,
}

#[derive(Args, Debug, Clone)]
pub struct DupesArgs {
    /// Title and content of the item about to be saved
    pub text: String,

    /// Id of the item being edited, so it does not match itself
    #[arg(long)]
    pub exclude: Option<String>,
}

/// Item selection shared by `list` and `graph`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Filter by item type (note, shell, snippet, config)
    #[arg(long, short = 'T', value_parser = parse_item_type)]
    pub r#type: Option<ItemType>,

    /// Filter by tag
    #[arg(long, short)]
    pub tag: Option<String>,

    /// Filter by folder
    #[arg(long)]
    pub folder: Option<String>,

    /// Case-insensitive text search
    #[arg(long)]
    pub query: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Seed for initial node positions
    #[arg(long)]
    pub seed: Option<u64>,
}

//! CLI argument parsing for snipgraph
//!
//! Global flags: --items, --config, --format, --quiet, --verbose

pub mod args;
pub mod format;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{DupesArgs, FilterArgs, GraphArgs, ScoreArgs, TokenizeArgs};
pub use snipgraph_core::format::OutputFormat;
use parse::parse_output_format;

/// Snipgraph - find related and duplicate snippets in a personal store
#[derive(Parser, Debug)]
#[command(name = "snipgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON snapshot of the item collection
    #[arg(long, global = true, env = "SNIPGRAPH_ITEMS")]
    pub items: Option<PathBuf>,

    /// Configuration file (default: ./snipgraph.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the keyword set extracted from text
    Tokenize(TokenizeArgs),

    /// Score keyword overlap between two texts
    Score(ScoreArgs),

    /// Check text against stored items for likely duplicates
    Dupes(DupesArgs),

    /// Build the relationship graph over stored items
    Graph(GraphArgs),

    /// List stored items
    List(FilterArgs),

    /// List every tag in use
    Tags,

    /// List every folder in use
    Folders,
}

//! Helper functions shared across commands

use serde::Serialize;

use snipgraph_core::config::Config;
use snipgraph_core::error::Result;
use snipgraph_core::item::Item;
use snipgraph_core::query::ItemFilter;

use crate::cli::FilterArgs;
use crate::commands::dispatch::CommandContext;

/// Load config and read the full item snapshot
pub fn load_items(ctx: &CommandContext) -> Result<(Config, Vec<Item>)> {
    let config = ctx.config()?;
    let items = ctx.item_source(&config)?.read()?;
    Ok((config, items))
}

/// Build an item filter from `--type`, `--tag`, `--folder` and `--query`
pub fn item_filter(args: &FilterArgs) -> ItemFilter<'_> {
    ItemFilter::new()
        .with_type(args.r#type.clone())
        .with_tag(args.tag.as_deref())
        .with_folder(args.folder.as_deref())
        .with_query(args.query.as_deref())
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

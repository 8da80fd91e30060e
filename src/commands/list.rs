//! `snipgraph list` - list stored items
//!
//! Items keep snapshot order; `--type`, `--tag`, `--folder` and `--query`
//! narrow the selection.

use snipgraph_core::error::Result;
use snipgraph_core::records::{format_header, format_item_record};

use crate::cli::FilterArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{item_filter, load_items, print_json};
use crate::output_by_format_result;

pub fn execute(ctx: &CommandContext, args: &FilterArgs) -> Result<()> {
    let (_, items) = load_items(ctx)?;
    let items = item_filter(args).apply(&items);
    let cli = ctx.cli;

    output_by_format_result!(cli.format,
        json => print_json(&items),
        human => {
            if items.is_empty() {
                if !cli.quiet {
                    println!("No items found");
                }
            } else {
                for item in &items {
                    let tags = if item.tags.is_empty() {
                        String::new()
                    } else {
                        format!("  #{}", item.tags.join(" #"))
                    };
                    println!("{} [{}] {}{}", item.id, item.item_type, item.title, tags);
                }
            }
        },
        records => {
            println!("{}", format_header("list", &[("count", items.len().to_string())]));
            for item in &items {
                println!("{}", format_item_record(item));
            }
        }
    )
}

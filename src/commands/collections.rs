//! `snipgraph tags` and `snipgraph folders`

use snipgraph_core::error::Result;
use snipgraph_core::records::format_header;
use snipgraph_core::store::{all_folders, all_tags};

use crate::cli::Cli;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{load_items, print_json};
use crate::output_by_format_result;

pub fn execute_tags(ctx: &CommandContext) -> Result<()> {
    let (_, items) = load_items(ctx)?;
    output(ctx.cli, "tags", 'T', &all_tags(&items))
}

pub fn execute_folders(ctx: &CommandContext) -> Result<()> {
    let (_, items) = load_items(ctx)?;
    output(ctx.cli, "folders", 'F', &all_folders(&items))
}

fn output(cli: &Cli, mode: &str, kind: char, values: &[String]) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_json(values),
        human => {
            if values.is_empty() {
                if !cli.quiet {
                    println!("No {} found", mode);
                }
            } else {
                for value in values {
                    println!("{}", value);
                }
            }
        },
        records => {
            println!("{}", format_header(mode, &[("count", values.len().to_string())]));
            for value in values {
                println!("{} \"{}\"", kind, snipgraph_core::records::escape_quotes(value));
            }
        }
    )
}

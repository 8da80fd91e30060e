//! `snipgraph tokenize` - show the keyword set for a piece of text

use serde_json::json;

use snipgraph_core::error::Result;
use snipgraph_core::records::format_header;
use snipgraph_core::text::tokenize;

use crate::cli::Cli;
use crate::commands::helpers::print_json;
use crate::output_by_format_result;

pub fn execute(cli: &Cli, text: &str) -> Result<()> {
    let keywords = tokenize(text);

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "count": keywords.len(),
            "keywords": keywords,
        })),
        human => {
            if keywords.is_empty() {
                if !cli.quiet {
                    println!("No keywords");
                }
            } else {
                println!("{}", keywords.join());
            }
        },
        records => {
            println!("{}", format_header("tokenize", &[("count", keywords.len().to_string())]));
            for word in &keywords {
                println!("K {}", word);
            }
        }
    )
}

//! `snipgraph score` - keyword overlap between two texts

use serde_json::json;

use snipgraph_core::error::Result;
use snipgraph_core::records::format_header;
use snipgraph_core::similarity::overlap_score;
use snipgraph_core::text::tokenize;

use crate::cli::Cli;
use crate::commands::helpers::print_json;
use crate::output_by_format_result;

pub fn execute(cli: &Cli, a: &str, b: &str) -> Result<()> {
    let keywords_a = tokenize(a);
    let keywords_b = tokenize(b);
    let score = overlap_score(&keywords_a, &keywords_b);
    let shared = keywords_a.intersection(&keywords_b);

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "score": score,
            "a": keywords_a,
            "b": keywords_b,
            "shared": shared,
        })),
        human => {
            println!("{:.3}", score);
            if !cli.quiet && !shared.is_empty() {
                println!("shared: {}", shared.join());
            }
        },
        records => {
            println!(
                "{}",
                format_header(
                    "score",
                    &[
                        ("score", format!("{:.3}", score)),
                        ("shared", shared.len().to_string()),
                    ],
                )
            );
            for word in &shared {
                println!("K {}", word);
            }
        }
    )
}

//! `snipgraph dupes` - advisory duplicate check before saving an item
//!
//! The check never blocks a save: failures to read the collection are
//! reported as a skipped check and the command still succeeds.

use serde_json::json;
use tokio::runtime::Builder;

use snipgraph_core::error::Result;
use snipgraph_core::records::{format_header, format_match_record};
use snipgraph_core::similarity::{DuplicateCheck, DuplicateDetector};

use crate::cli::DupesArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::print_json;
use crate::output_by_format_result;

pub fn execute(ctx: &CommandContext, args: &DupesArgs) -> Result<()> {
    let config = ctx.config()?;
    let source = ctx.item_source(&config)?;
    let detector = DuplicateDetector::with_config(source, config.duplicates);

    let runtime = Builder::new_current_thread().enable_all().build()?;
    let check = runtime.block_on(detector.check(&args.text, args.exclude.as_deref()));

    let status = match &check {
        DuplicateCheck::Matches(_) => "matches",
        DuplicateCheck::NoMatches => "no_matches",
        DuplicateCheck::Skipped { .. } => "skipped",
    };
    let cli = ctx.cli;

    output_by_format_result!(cli.format,
        json => {
            let mut output = json!({
                "status": status,
                "proceed": check.should_proceed(),
                "matches": check.matches(),
            });
            if let (DuplicateCheck::Skipped { reason }, Some(obj)) = (&check, output.as_object_mut()) {
                obj.insert("reason".to_string(), json!(reason));
            }
            print_json(&output)
        },
        human => {
            match &check {
                DuplicateCheck::Matches(items) => {
                    println!("Possible duplicates:");
                    for item in items {
                        println!("  {} [{}] {}", item.id, item.item_type.label(), item.title);
                    }
                }
                DuplicateCheck::NoMatches => {
                    if !cli.quiet {
                        println!("No duplicates found");
                    }
                }
                DuplicateCheck::Skipped { reason } => {
                    if !cli.quiet {
                        eprintln!("warning: duplicate check skipped: {}", reason);
                    }
                }
            }
        },
        records => {
            println!(
                "{}",
                format_header(
                    "dupes",
                    &[
                        ("status", status.to_string()),
                        ("matches", check.matches().len().to_string()),
                    ],
                )
            );
            for item in check.matches() {
                println!("{}", format_match_record(item));
            }
        }
    )
}

//! `snipgraph graph` - relationship graph over the (filtered) collection

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use snipgraph_core::error::Result;
use snipgraph_core::graph::{build_graph_with_rng, legend, Graph};
use snipgraph_core::records::{format_edge_record, format_header, format_node_record};

use crate::cli::{Cli, GraphArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{item_filter, load_items, print_json};
use crate::output_by_format_result;

pub fn execute(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    let (config, items) = load_items(ctx)?;
    let items = item_filter(&args.filter).apply(&items);

    let graph = match args.seed {
        Some(seed) => build_graph_with_rng(&items, &config.graph, &mut StdRng::seed_from_u64(seed)),
        None => build_graph_with_rng(&items, &config.graph, &mut rand::thread_rng()),
    };

    output(ctx.cli, &graph)
}

fn output(cli: &Cli, graph: &Graph) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "nodes": graph.nodes(),
            "edges": graph.edges(),
            "legend": legend(),
        })),
        human => {
            println!("{} nodes, {} edges", graph.order(), graph.size());
            for edge in graph.edges() {
                let label = |id: &str| graph.node(id).map_or(id.to_string(), |n| n.label.clone());
                println!(
                    "  {} -- {}  {:.3}",
                    label(&edge.source),
                    label(&edge.target),
                    edge.weight
                );
            }
            if !cli.quiet {
                let isolated = graph.nodes().iter().filter(|n| graph.degree(&n.id) == 0).count();
                if isolated > 0 {
                    println!("{} unconnected", isolated);
                }
            }
        },
        records => {
            println!(
                "{}",
                format_header(
                    "graph",
                    &[
                        ("nodes", graph.order().to_string()),
                        ("edges", graph.size().to_string()),
                    ],
                )
            );
            for node in graph.nodes() {
                println!("{}", format_node_record(node));
            }
            for edge in graph.edges() {
                println!("{}", format_edge_record(edge));
            }
        }
    )
}

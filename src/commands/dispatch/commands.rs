//! Command implementations for all snipgraph commands

use snipgraph_core::error::Result;

use crate::cli::Commands;
use crate::commands::{collections, dupes, graph, list, score, tokenize};

use super::command::{Command, CommandContext};
use super::macros::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Tokenize(args) => tokenize::execute(ctx.cli, &args.text),
            Commands::Score(args) => score::execute(ctx.cli, &args.a, &args.b),
            Commands::Dupes(args) => dupes::execute(ctx, args),
            Commands::Graph(args) => graph::execute(ctx, args),
            Commands::List(args) => list::execute(ctx, args),
            Commands::Tags => collections::execute_tags(ctx),
            Commands::Folders => collections::execute_folders(ctx),
        };

        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}

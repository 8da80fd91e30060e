//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use snipgraph_core::bail_usage;
use snipgraph_core::config::Config;
use snipgraph_core::error::Result;
use snipgraph_core::store::JsonFileSource;

use crate::cli::Cli;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a Path,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a Path, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// Load `--config`, `$SNIPGRAPH_CONFIG` or `./snipgraph.toml`, else defaults
    pub fn config(&self) -> Result<Config> {
        Config::resolve(self.cli.config.as_deref(), self.root)
    }

    /// Resolve the items snapshot from `--items` or `items_file` in config
    ///
    /// The file is not opened here; a missing file surfaces when it is read.
    pub fn item_source(&self, config: &Config) -> Result<JsonFileSource> {
        let path = match (&self.cli.items, &config.items_file) {
            (Some(path), _) => path.clone(),
            (None, Some(file)) => PathBuf::from(file),
            (None, None) => {
                bail_usage!("no items file: pass --items or set items_file in snipgraph.toml")
            }
        };

        let resolved = if path.is_absolute() {
            path
        } else {
            self.root.join(path)
        };
        Ok(JsonFileSource::new(resolved))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("snipgraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Duplicate detection and relationship graphs for a snippet store.");
        println!();
        println!("Run `snipgraph --help` for usage information.");
        Ok(())
    }
}

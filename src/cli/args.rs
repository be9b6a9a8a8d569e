//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract translations from source files and print the catalog
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::parsers::SourceSyntax;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that read the source tree.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Files to extract (default: every source file under the source root)
    pub files: Vec<PathBuf>,

    /// Extra component alias, like a wrapper around <Translate>.
    /// Can be specified multiple times.
    #[arg(long = "component-name", value_name = "NAME")]
    pub component_names: Vec<String>,

    /// Extra function alias, like a wrapper around translate().
    /// Can be specified multiple times.
    #[arg(long = "function-name", value_name = "NAME")]
    pub function_names: Vec<String>,

    /// Source dialect (overrides config file)
    #[arg(long, value_enum)]
    pub syntax: Option<SourceSyntax>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translations and print them as JSON
    Extract(ExtractCommand),
    /// Initialize a new .i18nextractrc.json configuration file
    Init,
}

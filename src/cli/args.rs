//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Scan sources and write the module listing every extractable class
//! - `resolve`: Resolve one JSON descriptor to its class string
//! - `init`: Initialize tailcomp configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.args.verbose,
            Some(Command::Resolve(_)) | Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Generated module path (overrides config file)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Descriptor function name to look for (overrides config file)
    #[arg(long)]
    pub function_name: Option<String>,

    /// Print the module instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with failure when any call site could not be evaluated
    #[arg(long)]
    pub deny_warnings: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Descriptor as JSON, e.g. '{"base":{"static":"flex","hover":"underline"}}'
    pub descriptor: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract every class reachable from descriptor calls and write the class module
    Generate(GenerateCommand),
    /// Resolve a JSON descriptor to its class string
    Resolve(ResolveCommand),
    /// Initialize a new .tailcomprc.json configuration file
    Init,
}

//! Command-line interface layer.
//!
//! Parses arguments, dispatches to the command handlers and maps their outcome
//! to an [`ExitStatus`]. All terminal output lives here and in `report`.

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;
pub use report::{FAILURE_MARK, SUCCESS_MARK};

use commands::{generate::generate, init::init, resolve::resolve_descriptor};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Resolve(cmd)) => resolve_descriptor(cmd),
        Some(Command::Init) => init(),
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }
}

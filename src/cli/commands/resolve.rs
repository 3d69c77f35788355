//! Resolve command - the runtime compiler on the command line.
//!
//! Reads one descriptor as JSON and prints its class string, exactly as a
//! `tc(...)` call with the same literal argument would produce.

use anyhow::{Context, Result};

use super::super::{args::ResolveCommand, exit_status::ExitStatus};
use crate::core::{Descriptor, resolve};

pub fn resolve_descriptor(cmd: ResolveCommand) -> Result<ExitStatus> {
    let descriptor: Descriptor =
        serde_json::from_str(&cmd.descriptor).context("Failed to parse descriptor JSON")?;

    println!("{}", resolve(&descriptor));

    Ok(ExitStatus::Success)
}

//! Generate command - write the module listing every extractable class.
//!
//! Scans the source root, extracts all descriptor calls, resolves them and
//! writes a module exporting the class string to the configured output, where
//! the CSS framework's content scanner can see every class.
//!
//! Use `--dry-run` to print the module instead of writing it.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use super::super::{
    args::GenerateCommand,
    exit_status::ExitStatus,
    report::{self, GenerateSummary},
};
use crate::{
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        ClassExtractor,
        file_scanner::{load_sources, scan_files},
        output::render_module,
    },
};

pub fn generate(cmd: GenerateCommand) -> Result<ExitStatus> {
    let args = &cmd.args;
    let verbose = args.verbose;

    let current_dir = env::current_dir().context("Failed to determine current directory")?;
    let config_result = load_config(&current_dir)?;

    if verbose && !config_result.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }

    // CLI > config file > defaults
    let mut config: Config = config_result.config;
    if let Some(ref source_root) = args.source_root {
        config.source_root = source_root.to_string_lossy().to_string();
    }
    if let Some(ref output) = args.output {
        config.output = output.to_string_lossy().to_string();
    }
    if let Some(ref function_name) = args.function_name {
        config.function_name = function_name.clone();
    }
    config.validate()?;

    let source_root = PathBuf::from(&config.source_root);
    if !source_root.is_dir() {
        bail!("Source root does not exist: {}", config.source_root);
    }
    let output = PathBuf::from(&config.output);

    let scan = scan_files(
        &source_root,
        &config.extensions,
        &config.ignores,
        Some(&output),
        verbose,
    );
    let (sources, mut warnings) = load_sources(&scan.files);

    let extraction = ClassExtractor::new(&config.function_name).extract(&sources);
    warnings.extend(extraction.warnings.iter().cloned());
    warnings.sort();

    let module = render_module(&config.const_name, &extraction.class_string());
    if args.dry_run {
        print!("{}", module);
    } else {
        write_module(&output, &module)?;
    }

    report::print_warnings(&warnings, verbose);
    report::print_generated(
        &GenerateSummary {
            class_count: extraction.classes.len(),
            call_count: extraction.call_count,
            file_count: extraction.file_count,
        },
        &config.output,
        args.dry_run,
    );

    if args.deny_warnings && !warnings.is_empty() {
        report::print_denied(warnings.len());
        return Ok(ExitStatus::Failure);
    }

    Ok(ExitStatus::Success)
}

fn write_module(output: &Path, module: &str) -> Result<()> {
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(output, module)
        .with_context(|| format!("Failed to write output file: {}", output.display()))
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::{core::aggregate::SourceInput, issues::ExtractionWarning};

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths under the source root.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    /// Matching files, sorted.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Recursively collect the source files under `source_root`.
///
/// Keeps regular files whose extension is listed in `extensions`, minus any
/// path matching `ignore_patterns` and the `exclude` file (the generated
/// module, so a previous run never feeds the next one).
pub fn scan_files(
    source_root: &Path,
    extensions: &[String],
    ignore_patterns: &[String],
    exclude: Option<&Path>,
    verbose: bool,
) -> ScanResult {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(source_root.join(p));
        }
    }

    // The output may not exist yet, in which case there is nothing to exclude.
    let excluded = exclude.and_then(|p| p.canonicalize().ok());

    for entry in WalkDir::new(source_root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if !entry.file_type().is_file() || !has_extension(path, extensions) {
            continue;
        }

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        let path_str = path.to_string_lossy();
        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if let Some(excluded) = &excluded
            && path.file_name() == excluded.file_name()
            && path.canonicalize().ok().as_ref() == Some(excluded)
        {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();

    ScanResult {
        files,
        skipped_count,
    }
}

/// Read every file in parallel, keeping input order.
///
/// Files that cannot be read (permissions, invalid UTF-8) become warnings.
pub fn load_sources(files: &[PathBuf]) -> (Vec<SourceInput>, Vec<ExtractionWarning>) {
    let loaded: Vec<Result<SourceInput, ExtractionWarning>> = files
        .par_iter()
        .map(|path| {
            let display = path.to_string_lossy().to_string();
            match fs::read_to_string(path) {
                Ok(content) => Ok(SourceInput::new(display, content)),
                Err(e) => Err(ExtractionWarning::unreadable(display, e)),
            }
        })
        .collect();

    let mut sources = Vec::with_capacity(loaded.len());
    let mut warnings = Vec::new();
    for result in loaded {
        match result {
            Ok(source) => sources.push(source),
            Err(warning) => warnings.push(warning),
        }
    }
    (sources, warnings)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}

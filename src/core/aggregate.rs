//! Aggregation: call sites from many files → one deduplicated class string.
//!
//! Each file is scanned for call sites, each call is evaluated and resolved
//! independently, and the resulting tokens are merged into a [`ClassSet`].
//! Files are processed in parallel; merging follows input order, so the output
//! is deterministic for a given input and the token *set* is independent of it.

use std::{collections::HashSet, fmt};

use anyhow::Result;
use rayon::prelude::*;

use crate::{
    core::{
        evaluate::evaluate_call,
        extract::{CallSite, extract_call_sites},
        resolve::resolve_value,
    },
    issues::{ExtractionWarning, WarningKind},
    utils::snippet,
};

/// Descriptor function name looked for by default.
pub const DEFAULT_FUNCTION_NAME: &str = "tc";

/// Insertion-ordered set of class tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    tokens: Vec<String>,
    seen: HashSet<String>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one token. Returns false for empty or already present tokens.
    pub fn insert(&mut self, token: &str) -> bool {
        if token.is_empty() || self.seen.contains(token) {
            return false;
        }
        self.seen.insert(token.to_string());
        self.tokens.push(token.to_string());
        true
    }

    /// Split a class string on whitespace and insert every token.
    pub fn insert_all(&mut self, classes: &str) {
        for token in classes.split_whitespace() {
            self.insert(token);
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.seen.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl<'a> FromIterator<&'a str> for ClassSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = ClassSet::new();
        for classes in iter {
            set.insert_all(classes);
        }
        set
    }
}

/// Source text of one file.
#[derive(Debug, Clone)]
pub struct SourceInput {
    pub path: String,
    pub content: String,
}

impl SourceInput {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Input with no file behind it.
    pub fn anonymous(content: impl Into<String>) -> Self {
        Self::new("<input>", content)
    }
}

/// Per-file extraction output.
#[derive(Debug, Default)]
pub struct FileExtraction {
    /// One resolved class string per successfully evaluated call.
    pub classes: Vec<String>,
    pub call_count: usize,
    pub warnings: Vec<ExtractionWarning>,
}

/// Aggregated output over many files.
#[derive(Debug, Default)]
pub struct Extraction {
    pub classes: ClassSet,
    pub file_count: usize,
    pub call_count: usize,
    pub warnings: Vec<ExtractionWarning>,
}

impl Extraction {
    /// The space-joined class string.
    pub fn class_string(&self) -> String {
        self.classes.to_string()
    }

    fn merge(&mut self, file: FileExtraction) {
        self.file_count += 1;
        self.call_count += file.call_count;
        for classes in &file.classes {
            self.classes.insert_all(classes);
        }
        self.warnings.extend(file.warnings);
    }
}

/// Extractor → Evaluator → Resolver pipeline for one descriptor function name.
#[derive(Debug, Clone)]
pub struct ClassExtractor {
    function_name: String,
}

impl Default for ClassExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_FUNCTION_NAME)
    }
}

impl ClassExtractor {
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
        }
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    /// Evaluate and resolve one raw call.
    pub fn resolve_call(&self, call: &str) -> Result<String> {
        let value = evaluate_call(call, &self.function_name)?;
        Ok(resolve_value(&value))
    }

    /// Find the call sites of one file.
    pub fn call_sites(&self, input: &SourceInput) -> Vec<CallSite> {
        extract_call_sites(&input.content, &self.function_name)
    }

    /// Extract classes from one file. Failing call sites become warnings.
    pub fn extract_file(&self, input: &SourceInput) -> FileExtraction {
        let mut result = FileExtraction::default();

        for call in self.call_sites(input) {
            result.call_count += 1;
            match self.resolve_call(&call.text) {
                Ok(classes) => result.classes.push(classes),
                Err(e) => result.warnings.push(ExtractionWarning {
                    file_path: input.path.clone(),
                    line: call.line,
                    column: call.column,
                    kind: if call.terminated {
                        WarningKind::ParseError
                    } else {
                        WarningKind::UnterminatedCall
                    },
                    snippet: snippet(&call.text),
                    error: e.to_string(),
                }),
            }
        }

        result
    }

    /// Extract classes from many files in parallel and merge them in input order.
    pub fn extract(&self, inputs: &[SourceInput]) -> Extraction {
        let per_file: Vec<FileExtraction> = inputs
            .par_iter()
            .map(|input| self.extract_file(input))
            .collect();

        let mut extraction = Extraction::default();
        for file in per_file {
            extraction.merge(file);
        }
        extraction
    }
}

/// Aggregate raw call substrings (`tc(...)`) into a deduplicated class string.
///
/// Calls that fail to evaluate contribute nothing.
pub fn generate_class_string<S: AsRef<str>>(calls: &[S]) -> String {
    let extractor = ClassExtractor::default();
    let mut classes = ClassSet::new();
    for call in calls {
        if let Ok(resolved) = extractor.resolve_call(call.as_ref()) {
            classes.insert_all(&resolved);
        }
    }
    classes.to_string()
}

/// Extract every class the `tc(...)` calls in `sources` can emit.
///
/// Diagnostics are dropped; use [`ClassExtractor::extract`] to keep them.
pub fn extract_classes<S: AsRef<str>>(sources: &[S]) -> String {
    let inputs: Vec<SourceInput> = sources
        .iter()
        .map(|source| SourceInput::anonymous(source.as_ref()))
        .collect();
    ClassExtractor::default().extract(&inputs).class_string()
}

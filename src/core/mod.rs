//! Core engine: descriptor model, resolver and the static extraction pipeline.
//!
//! ## Pipeline
//!
//! 1. **Extract** (`extract`): find raw `tc(...)` call spans in source text
//! 2. **Evaluate** (`evaluate`): parse each argument and reduce it conservatively
//! 3. **Resolve** (`resolve`): lower the value to a class string
//! 4. **Aggregate** (`aggregate`): merge and deduplicate across call sites and files
//!
//! `file_scanner` feeds the pipeline from disk and `output` renders the result.

pub mod aggregate;
pub mod descriptor;
pub mod evaluate;
pub mod extract;
pub mod file_scanner;
pub mod output;
pub mod parsers;
pub mod resolve;

pub use aggregate::{
    ClassExtractor, ClassSet, Extraction, SourceInput, extract_classes, generate_class_string,
};
pub use descriptor::{Breakpoint, Dark, Descriptor, MediaStyles, State, Style, Variant};
pub use resolve::{resolve, resolve_value};

//! Tailcomp - nested style descriptors compiled to utility class strings
//!
//! A descriptor groups utility classes by breakpoint, pseudo-class state and
//! color scheme. [`core::resolve`] flattens it into prefixed classes at runtime;
//! the extraction pipeline finds every descriptor call in a source tree and
//! computes, statically and conservatively, all classes those calls can emit,
//! so a content-scanning CSS build never purges a class that is in use.
//!
//! ```
//! use tailcomp::core::{extract_classes, resolve_value};
//! use serde_json::json;
//!
//! let descriptor = json!({ "base": { "static": "flex", "hover": "underline" }, "md": { "dark": "bg-black" } });
//! assert_eq!(resolve_value(&descriptor), "flex hover:underline md:dark:bg-black");
//!
//! let source = "const c = tc({ base: { hover: { 'bg-blue-600': isPrimary } } })";
//! assert_eq!(extract_classes(&[source]), "hover:bg-blue-600");
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (`generate`, `resolve`, `init`)
//! - `config`: Configuration file loading and parsing
//! - `core`: Descriptor model, resolver and extraction pipeline
//! - `issues`: Extraction warning definitions
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod utils;

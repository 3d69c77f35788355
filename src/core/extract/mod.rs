//! Call-site extraction.
//!
//! Locates descriptor function calls by a word-boundary search over the raw
//! source text, whatever the host language. Each span is then bounded by
//! balancing parentheses with a small lexer that skips strings, comments and
//! template text, so a nested call or grouping inside the argument does not cut
//! the span short.

pub mod call_site;
pub mod lexer;

pub use call_site::{CallSite, extract_call_sites, extract_calls};

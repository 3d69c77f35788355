//! Source parsers.
//!
//! - `expr`: single-expression parser for descriptor arguments (uses swc for AST generation)

pub mod expr;

use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, GLOBALS, Globals, SourceMap};
use swc_ecma_ast::Expr;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// Parse a single JS/TS expression into an AST.
///
/// The parser stops after the leading expression, so trailing text that is not
/// part of it is ignored. Each call gets its own `SourceMap` and swc globals,
/// which keeps parsing safe to run from several threads at once.
pub fn parse_expr_source(code: String) -> Result<Box<Expr>> {
    GLOBALS.set(&Globals::new(), || {
        let source_map = Arc::new(SourceMap::default());
        let source_file = source_map.new_source_file(FileName::Anon.into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        parser
            .parse_expr()
            .map_err(|e| anyhow!("{}", e.kind().msg()))
    })
}

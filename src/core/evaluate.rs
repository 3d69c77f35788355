//! Conservative static evaluation of descriptor call arguments.
//!
//! A call like `tc({ base: { hover: { 'bg-blue-600': theme === 'primary' } } })`
//! is parsed and reduced to the plain value it could produce at runtime.
//! Anything that cannot be known statically becomes `true`, so a class that is
//! only conditionally applied is still part of the extracted set:
//!
//! ```text
//! { base: { hover: { 'bg-blue-600': true } } }
//! ```

use anyhow::Result;
use serde_json::{Map, Value};
use swc_ecma_ast::{Expr, Lit, ObjectLit, Prop, PropName, PropOrSpread};

use crate::core::parsers::expr::parse_expr_source;

/// Evaluate one raw call (`tc(...)`) to its descriptor value.
///
/// Fails only when the argument cannot be parsed as an expression.
pub fn evaluate_call(call: &str, function_name: &str) -> Result<Value> {
    let expr = parse_expr_source(argument_text(call, function_name).to_string())?;
    let first = match &*expr {
        Expr::Seq(seq) => seq.exprs.first().map(|e| &**e).unwrap_or(&*expr),
        other => other,
    };
    Ok(reduce_expr(first))
}

/// Strip the function name and the enclosing parentheses from a raw call.
///
/// A call truncated at end of input has no closing `)`; its argument text is
/// returned as-is and left to the parser to reject.
pub fn argument_text<'a>(call: &'a str, function_name: &str) -> &'a str {
    let rest = call.strip_prefix(function_name).unwrap_or(call).trim_start();
    let rest = rest.strip_prefix('(').unwrap_or(rest);
    let rest = rest.trim_end();
    rest.strip_suffix(')').unwrap_or(rest)
}

/// Reduce an expression to a descriptor value.
///
/// Total over all expression kinds: literal objects and strings keep their
/// structure, boolean literals keep their value, everything else is `true`.
pub fn reduce_expr(expr: &Expr) -> Value {
    match unwrap_ts_expr(expr) {
        Expr::Object(obj) => reduce_object(obj),
        Expr::Lit(Lit::Str(s)) => s
            .value
            .as_str()
            .map_or(Value::Bool(true), |v| Value::String(v.to_string())),
        Expr::Lit(Lit::Bool(b)) => Value::Bool(b.value),
        Expr::Tpl(tpl) if tpl.exprs.is_empty() => tpl
            .quasis
            .first()
            .and_then(|q| q.cooked.as_ref())
            .and_then(|s| s.as_str())
            .map_or(Value::Bool(true), |v| Value::String(v.to_string())),
        _ => Value::Bool(true),
    }
}

fn reduce_object(obj: &ObjectLit) -> Value {
    let mut map = Map::new();

    for prop in &obj.props {
        // spreads cannot contribute statically known keys
        let PropOrSpread::Prop(prop) = prop else {
            continue;
        };
        match &**prop {
            Prop::KeyValue(kv) => {
                if let Some(key) = static_prop_name(&kv.key) {
                    map.insert(key, reduce_expr(&kv.value));
                }
            }
            Prop::Shorthand(ident) => {
                map.insert(ident.sym.to_string(), Value::Bool(true));
            }
            _ => {}
        }
    }

    Value::Object(map)
}

/// Property key as a string, when it is known without running code.
fn static_prop_name(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => s.value.as_str().map(|s| s.to_string()),
        PropName::Num(n) => Some(number_key(n.value)),
        PropName::Computed(computed) => match unwrap_ts_expr(&computed.expr) {
            Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|s| s.to_string()),
            Expr::Tpl(tpl) if tpl.exprs.is_empty() => tpl
                .quasis
                .first()
                .and_then(|q| q.cooked.as_ref())
                .and_then(|s| s.as_str())
                .map(|s| s.to_string()),
            _ => None,
        },
        _ => None,
    }
}

/// Numeric keys are stringified the way JavaScript does for integers.
fn number_key(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Unwrap TypeScript-specific expression wrappers to get the inner expression.
fn unwrap_ts_expr(expr: &Expr) -> &Expr {
    match expr {
        Expr::TsAs(ts_as) => unwrap_ts_expr(&ts_as.expr),
        Expr::TsConstAssertion(ts_const) => unwrap_ts_expr(&ts_const.expr),
        Expr::TsSatisfies(ts_sat) => unwrap_ts_expr(&ts_sat.expr),
        Expr::TsNonNull(ts_non_null) => unwrap_ts_expr(&ts_non_null.expr),
        Expr::Paren(paren) => unwrap_ts_expr(&paren.expr),
        _ => expr,
    }
}

//! Style resolution: descriptor → flat class string.
//!
//! Every emitted token is `breakpoint-prefix + dark-prefix + state-prefix + class`,
//! e.g. `md:dark:hover:bg-gray-700`. `base` and `static` contribute no prefix.

use serde_json::Value;

use crate::core::descriptor::{DARK_PREFIX, Dark, Descriptor, Style, Variant};

/// Resolve a descriptor into a single-spaced, trimmed class string.
///
/// This is the runtime compiler. The static extractor calls the same function,
/// so both paths produce byte-identical output for the same descriptor.
pub fn resolve(descriptor: &Descriptor) -> String {
    let mut tokens: Vec<String> = Vec::new();

    for (breakpoint, styles) in descriptor.breakpoints() {
        let media = breakpoint.prefix();

        for variant in styles.variants() {
            match variant {
                Variant::State(state, style) => {
                    push_tokens(&mut tokens, &[media, state.prefix()], style);
                }
                Variant::Dark(Dark::Style(style)) => {
                    push_tokens(&mut tokens, &[media, DARK_PREFIX], style);
                }
                Variant::Dark(Dark::States(states)) => {
                    for (state, style) in states {
                        push_tokens(&mut tokens, &[media, DARK_PREFIX, state.prefix()], style);
                    }
                }
            }
        }
    }

    tokens.join(" ")
}

/// Resolve a loose value tree (as produced by the static evaluator or parsed
/// from JSON). Unknown keys and ill-typed values are ignored.
pub fn resolve_value(value: &Value) -> String {
    resolve(&Descriptor::from_value(value))
}

fn push_tokens(tokens: &mut Vec<String>, prefixes: &[&str], style: &Style) {
    let prefix = prefixes.concat();
    tokens.extend(style.tokens().map(|class| format!("{}{}", prefix, class)));
}

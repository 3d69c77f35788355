//! Call-site extraction: raw source text → raw descriptor call spans.

use super::lexer::find_closing_paren;

/// One raw call expression, e.g. `tc({ base: { static: 'flex' } })`.
///
/// The text is kept verbatim, including comments and line breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub text: String,
    /// 1-based line of the function name.
    pub line: usize,
    /// 1-based column (in characters) of the function name.
    pub column: usize,
    /// False when the argument list was still open at end of input; the text
    /// then runs to the end of the source.
    pub terminated: bool,
}

impl CallSite {
    fn new(source: &str, start: usize, end: usize, terminated: bool) -> Self {
        let before = &source[..start];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        Self {
            text: source[start..end].to_string(),
            line: before.matches('\n').count() + 1,
            column: before[line_start..].chars().count() + 1,
            terminated,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Extract every call to `function_name` from `source`, in source order.
///
/// A call is the function name, preceded by a word boundary and followed
/// immediately by `(`, up to the matching `)`. Candidates are found in the raw
/// text, including JSX children, strings and comments, so host text never hides
/// a call. Only the argument list itself is lexed. Calls nested inside another
/// call's argument are reported too. Empty argument lists (`tc()`) are not calls.
pub fn extract_call_sites(source: &str, function_name: &str) -> Vec<CallSite> {
    if function_name.is_empty() {
        return Vec::new();
    }

    source
        .match_indices(function_name)
        .map(|(pos, _)| pos)
        .filter(|&pos| is_call_start(source, pos, function_name))
        .filter_map(|start| {
            let open = start + function_name.len();
            match find_closing_paren(source, open) {
                Some(end) if source[open + 1..end - 1].trim().is_empty() => None,
                Some(end) => Some(CallSite::new(source, start, end, true)),
                None => Some(CallSite::new(source, start, source.len(), false)),
            }
        })
        .collect()
}

/// Extract the raw call texts only.
pub fn extract_calls(source: &str, function_name: &str) -> Vec<String> {
    extract_call_sites(source, function_name)
        .into_iter()
        .map(|call| call.text)
        .collect()
}

fn is_call_start(source: &str, pos: usize, function_name: &str) -> bool {
    let bytes = source.as_bytes();
    let open = pos + function_name.len();
    let preceded_by_ident = pos > 0 && is_ident_byte(bytes[pos - 1]);

    !preceded_by_ident
        && bytes.get(open) == Some(&b'(')
        && source.get(pos..open) == Some(function_name)
}

/// Identifier byte in JS terms. Non-ASCII bytes count, so `évtc(` never matches.
fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$' || byte >= 0x80
}

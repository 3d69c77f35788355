//! Common utility functions shared across the codebase.

/// Maximum number of characters kept by [`snippet`].
pub const SNIPPET_MAX_CHARS: usize = 60;

/// Condense source text into a single-line preview for diagnostics.
///
/// Runs of whitespace (including line breaks) collapse to one space, and text
/// longer than [`SNIPPET_MAX_CHARS`] is cut with a trailing `...`.
///
/// # Examples
///
/// ```
/// use tailcomp::utils::snippet;
///
/// assert_eq!(snippet("tc({\n  base: 1\n})"), "tc({ base: 1 })");
/// assert_eq!(snippet(""), "");
/// ```
pub fn snippet(text: &str) -> String {
    let condensed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if condensed.chars().count() <= SNIPPET_MAX_CHARS {
        return condensed;
    }
    let cut: String = condensed.chars().take(SNIPPET_MAX_CHARS).collect();
    format!("{}...", cut.trim_end())
}

/// Checks if the text is a valid JavaScript identifier (ASCII subset).
///
/// # Examples
///
/// ```
/// use tailcomp::utils::is_identifier;
///
/// assert!(is_identifier("tc"));
/// assert!(is_identifier("$styles_2"));
/// assert!(!is_identifier("2xl"));
/// assert!(!is_identifier("my-const"));
/// assert!(!is_identifier(""));
/// ```
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

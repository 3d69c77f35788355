//! Rendering of the generated class module.

/// Render the ES module that exposes every extracted class to the CSS scanner.
///
/// ```
/// use tailcomp::core::output::render_module;
///
/// assert_eq!(
///     render_module("tailcomp", "flex hover:bg-blue-700"),
///     "export const tailcomp = `flex hover:bg-blue-700`\n"
/// );
/// ```
pub fn render_module(const_name: &str, classes: &str) -> String {
    format!("export const {} = `{}`\n", const_name, escape_template(classes))
}

/// Escape text for use inside a template literal.
fn escape_template(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '`' => escaped.push_str("\\`"),
            '$' if chars.peek() == Some(&'{') => escaped.push_str("\\$"),
            _ => escaped.push(c),
        }
    }

    escaped
}

//! Text helpers for content destined for LaTeX macro arguments.

/// Separator placed between keywords inside `\keywords{...}`.
pub const KEYWORD_SEPARATOR: &str = "\\spc ";

/// Replacement for a LaTeX special character, or `None` when it passes through.
fn replacement(c: char) -> Option<&'static str> {
    match c {
        '\\' => Some("\\textbackslash{}"),
        '&' => Some("\\&"),
        '%' => Some("\\%"),
        '$' => Some("\\$"),
        '#' => Some("\\#"),
        '_' => Some("\\_"),
        '{' => Some("\\{"),
        '}' => Some("\\}"),
        '~' => Some("\\textasciitilde{}"),
        '^' => Some("\\textasciicircum{}"),
        _ => None,
    }
}

/// Escape LaTeX control characters in a single left-to-right pass.
///
/// Each input character is looked at once, so backslashes introduced by a
/// replacement are never escaped again.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match replacement(c) {
            Some(replaced) => escaped.push_str(replaced),
            None => escaped.push(c),
        }
    }
    escaped
}

/// Collapse every whitespace run (newlines included) into one space and trim the ends.
pub fn flatten_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Escape each keyword and join them with [`KEYWORD_SEPARATOR`].
pub fn join_keywords<'a, I>(keywords: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    keywords
        .into_iter()
        .map(escape)
        .collect::<Vec<_>>()
        .join(KEYWORD_SEPARATOR)
}

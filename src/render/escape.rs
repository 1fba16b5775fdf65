//! HTML entity escaping for code content.

/// Escape the five HTML-significant characters.
///
/// ```
/// use litemark::render::escape_html;
///
/// assert_eq!(escape_html("<a href='x'>"), "&lt;a href=&#039;x&#039;&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

//! Escaping for text embedded in HTML pages and SpreadsheetML parts.

/// Escape the five markup-significant characters.
///
/// The same rules hold for HTML attribute/text content and XML text nodes, so
/// both the page renderer and the workbook encoder go through here.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            // Outside the XML 1.0 Char production even when escaped.
            c if c.is_control() && !matches!(c, '\n' | '\r' | '\t') => {}
            '\u{FFFE}' | '\u{FFFF}' => {}
            c => out.push(c),
        }
    }
    out
}

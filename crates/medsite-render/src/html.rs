//! HTML escaping helpers.

/// Escape HTML special characters for text and attribute values.
pub(crate) fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Make serialized JSON safe to embed in a `<script>` element.
///
/// Only `</` can end the element early; JSON allows `\/` for `/`.
pub(crate) fn escape_script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

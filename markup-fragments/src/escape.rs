/// Escape text for use in HTML bodies and double-quoted attribute values.
///
/// Neutralizes `&`, `<`, `>`, `"` and `'`. Ampersands are replaced first so
/// entities produced by later replacements are not escaped twice.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

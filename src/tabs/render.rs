const CHORD_OPEN: &str = "<span class=\"chord\">";
const CHORD_CLOSE: &str = "</span>";

/// Renders raw tab markup as HTML.
///
/// Text is entity-escaped, `[ch]X[/ch]` becomes a chord span, `[tab]` block
/// markers are dropped, and the result is wrapped in `<pre>`.
pub fn render_html_tab(raw: &str) -> String {
    let text = raw.replace("\r\n", "\n");
    let escaped = html_escape::encode_text(&text);
    let body = escaped
        .replace("[ch]", CHORD_OPEN)
        .replace("[/ch]", CHORD_CLOSE)
        .replace("[tab]", "")
        .replace("[/tab]", "");
    format!("<pre>{body}</pre>")
}

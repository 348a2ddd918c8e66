use url::Url;

/// Read a fetched page body as text.
///
/// With the `test-mode` feature and `UG_RECORD=1`, the body is also written to
/// the fixture dir under [`page_key`] so offline tests can replay it.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    url: &Url,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    crate::core::fixtures::maybe_record_page(url, &text);
    #[cfg(not(feature = "test-mode"))]
    let _ = url;

    Ok(text)
}

/// Filesystem-friendly name for a page URL: path and query, lowercased,
/// every run of non-alphanumerics folded to one `_`.
///
/// `/search.php?q=a b` becomes `search_php_q_a_b`.
pub(crate) fn page_key(url: &Url) -> String {
    let raw = match url.query() {
        Some(q) => format!("{}_{q}", url.path()),
        None => url.path().to_string(),
    };
    let mut key = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            key.push(ch.to_ascii_lowercase());
        } else if !key.ends_with('_') {
            key.push('_');
        }
    }
    key.trim_matches('_').to_string()
}

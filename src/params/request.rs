use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;

use crate::UgError;

/// A raw request URI split into its endpoint and query pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// The decoded URI as received.
    pub url: String,
    /// Path between the leading `/` and the first `?` (e.g. `search.php`).
    pub kind: String,
    /// Query pairs that split into exactly one key and one value.
    pub args: BTreeMap<String, String>,
}

/// Decodes a request URI of the form `/<type>?<query>`.
///
/// The whole URI is percent-decoded first (`+` is left alone). Query segments
/// that do not contain exactly one `=` are dropped; a repeated key keeps its
/// last value.
///
/// # Errors
///
/// Returns [`UgError::Parse`] if a `%` is not followed by two hex digits, the
/// URI is not valid UTF-8 once decoded, does not start with `/`, has no `?`,
/// or has an empty path segment.
pub fn format_request_search(uri: &str) -> Result<ParsedRequest, UgError> {
    if !escapes_well_formed(uri) {
        return Err(UgError::Parse(uri.to_string()));
    }
    let url = percent_decode_str(uri)
        .decode_utf8()
        .map_err(|_| UgError::Parse(uri.to_string()))?
        .into_owned();

    let rest = url
        .strip_prefix('/')
        .ok_or_else(|| UgError::Parse(url.clone()))?;
    let (kind, query) = rest
        .split_once('?')
        .ok_or_else(|| UgError::Parse(url.clone()))?;
    if kind.is_empty() {
        return Err(UgError::Parse(url));
    }

    let mut args = BTreeMap::new();
    for pair in query.split('&') {
        let mut parts = pair.split('=');
        if let (Some(k), Some(v), None) = (parts.next(), parts.next(), parts.next()) {
            args.insert(k.to_string(), v.to_string());
        }
    }

    Ok(ParsedRequest {
        kind: kind.to_string(),
        url,
        args,
    })
}

/// Every `%` must start a `%XX` escape.
fn escapes_well_formed(uri: &str) -> bool {
    let bytes = uri.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some([a, b]) if a.is_ascii_hexdigit() && b.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}

use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde_json::Value;

use crate::UgError;
use crate::core::client::constants::{STORE_ATTRIBUTE, STORE_SELECTOR};

static STORE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(STORE_SELECTOR).expect("store selector is valid CSS"));

/// Reads the page's data store: the `data-content` attribute of the
/// `.js-store` node, entity-decoded, then parsed as JSON.
///
/// If several nodes match, the first one in document order wins.
///
/// # Errors
///
/// Returns [`UgError::MalformedPage`] when the node is missing and
/// [`UgError::JsonParse`] when the decoded blob is not JSON.
///
/// # Panics
///
/// Only if the built-in store selector is not valid CSS, which is a bug in
/// this crate and never depends on the page.
pub fn get_page_details(html: &Html) -> Result<Value, UgError> {
    let debug = std::env::var("UG_DEBUG").ok().as_deref() == Some("1");

    let raw = html
        .select(&STORE)
        .next()
        .and_then(|node| node.value().attr(STORE_ATTRIBUTE))
        .ok_or_else(|| {
            UgError::MalformedPage(format!("no `{STORE_SELECTOR}` node on page"))
        })?;

    if debug {
        eprintln!(
            "UG_DEBUG [get_page_details]: store attribute len={} preview=`{}`",
            raw.len(),
            truncate(raw, 160)
        );
    }

    let parsed = decode_store_blob(raw)?;

    #[cfg(feature = "debug-dumps")]
    {
        if debug {
            let _ = super::debug::debug_dump_extracted_json("store", &parsed);
        }
    }

    Ok(parsed)
}

/// Two-step decode of a data-store attribute: strip HTML entity escaping,
/// then parse the plain text as JSON.
///
/// # Errors
///
/// Returns [`UgError::JsonParse`] if the decoded text is not valid JSON.
pub fn decode_store_blob(raw: &str) -> Result<Value, UgError> {
    let flattened = html_escape::decode_html_entities(raw);
    Ok(serde_json::from_str(&flattened)?)
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

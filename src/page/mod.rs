//! Page Fetcher: one GET, fail on non-2xx, parse HTML, optionally extract
//! the page's data store.
//!
//! Internals are split into:
//! - `extract`: locate + decode the `data-content` bootstrap blob
//! - `debug`:   optional dump helpers (`debug-dumps` feature)

mod extract;

#[cfg(feature = "debug-dumps")]
pub(crate) mod debug;

pub use extract::{decode_store_blob, get_page_details};

use scraper::Html;
use serde_json::Value;
use url::Url;

use crate::core::net::get_text;
use crate::{UgClient, UgError};

/// A fetched and parsed page.
///
/// `Html` is not `Send`; keep a `Page` out of any state held across an `.await`.
#[derive(Debug)]
pub struct Page {
    pub html: Html,
    /// The decoded data store, when requested.
    pub details: Option<Value>,
}

/// Fetches `url` and parses the body as HTML.
///
/// With `details`, the page's data store is extracted as well (see [`get_page_details`]).
/// No retry is attempted and no timeout is set beyond what the client was built with.
///
/// # Errors
///
/// Returns [`UgError::Fetch`] on a non-2xx status (the body is not read),
/// [`UgError::Http`] on transport failure, and the extractor's errors when
/// `details` is set.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client, url), err, fields(url = %url)))]
pub async fn get_page(client: &UgClient, url: Url, details: bool) -> Result<Page, UgError> {
    let resp = client.http().get(url.clone()).send().await?;

    if !resp.status().is_success() {
        return Err(UgError::Fetch {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = get_text(resp, &url).await?;

    #[cfg(feature = "tracing")]
    tracing::debug!(bytes = body.len(), "page body received");

    #[cfg(feature = "debug-dumps")]
    {
        if std::env::var("UG_DEBUG").ok().as_deref() == Some("1") {
            let _ = debug::debug_dump_html(&crate::core::net::page_key(&url), &body);
        }
    }

    let html = Html::parse_document(&body);
    let details = if details {
        Some(get_page_details(&html)?)
    } else {
        None
    };

    Ok(Page { html, details })
}

//! Tab records: the upstream shape, the normalized shape, and the page
//! loaders that produce them.

mod model;
mod render;
mod wire;

pub use model::{Pagination, RawTabsPage, SearchResults, Tab};
pub use render::render_html_tab;
pub use wire::RawScrapedTab;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::page::get_page;
use crate::{UgClient, UgError};
use wire::{SearchData, Store, TabData};

/// Maps an upstream record onto [`Tab`].
///
/// Pure field remap: `slug` is the last two `/`-separated segments of the
/// URL and `rating` is rounded to 2 decimals (halves away from zero).
/// Missing fields stay `None`.
pub fn format_tab_result(tab: RawScrapedTab) -> Tab {
    let slug = tab.tab_url.as_deref().map(slug_of);
    let rating = tab.rating.map(round_rating);
    Tab {
        artist: tab.artist_name,
        name: tab.song_name,
        url: tab.tab_url,
        difficulty: tab.difficulty,
        tuning: tab.tuning,
        raw_tabs: tab.raw_tabs,
        html_tab: tab.html_tab,
        number_rates: tab.votes,
        kind: tab.kind,
        slug,
        rating,
    }
}

fn slug_of(url: &str) -> String {
    let segments: Vec<&str> = url.split('/').collect();
    let start = segments.len().saturating_sub(2);
    segments[start..].join("/")
}

fn round_rating(r: f64) -> f64 {
    Decimal::from_f64(r)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(r)
}

fn store_data<T: DeserializeOwned>(details: Option<Value>, what: &str) -> Result<T, UgError> {
    let details =
        details.ok_or_else(|| UgError::MalformedPage(format!("{what}: no data store")))?;
    let store: Store<T> = serde_json::from_value(details)
        .map_err(|e| UgError::MalformedPage(format!("{what}: unexpected store shape: {e}")))?;
    Ok(store.store.page.data)
}

/// Fetches a search results page and lists its records with pagination.
///
/// # Errors
///
/// Returns the fetcher's errors, or [`UgError::MalformedPage`] if the data
/// store has no `store.page.data.results` list.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client, url), err, fields(url = %url)))]
pub async fn get_tabs_list(client: &UgClient, url: Url) -> Result<RawTabsPage, UgError> {
    let page = get_page(client, url, true).await?;
    let data: SearchData = store_data(page.details, "search results")?;

    #[cfg(feature = "tracing")]
    tracing::debug!(count = data.results.len(), "search results extracted");

    Ok(RawTabsPage {
        tabs: data.results,
        pagination: data.pagination,
    })
}

/// Fetches a single tab page and returns it normalized, content included.
///
/// `tab_url` may be absolute (as listed in search results) or relative to the
/// client's base URL.
///
/// # Errors
///
/// Returns the fetcher's errors, or [`UgError::MalformedPage`] if the data
/// store has no `store.page.data.tab` record.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn get_tab(client: &UgClient, tab_url: &str) -> Result<Tab, UgError> {
    let url = client.base_url().join(tab_url)?;
    let page = get_page(client, url.clone(), true).await?;
    let data: TabData = store_data(page.details, "tab page")?;

    let mut raw = data.tab;
    let view = data.tab_view;
    if let Some(content) = view.wiki_tab.and_then(|w| w.content) {
        raw.html_tab = Some(render_html_tab(&content));
        raw.raw_tabs = Some(content);
    }
    if let Some(tuning) = view.meta.and_then(|m| m.tuning) {
        raw.tuning = Some(tuning);
    }
    if raw.difficulty.is_none() {
        raw.difficulty = view.ug_difficulty;
    }
    if raw.tab_url.is_none() {
        raw.tab_url = Some(url.to_string());
    }

    Ok(format_tab_result(raw))
}

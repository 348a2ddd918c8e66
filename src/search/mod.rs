//! Search Orchestrator: format the query, build the endpoint URL, fetch the
//! results page and normalize its records.

pub mod kind;
pub mod query;

pub use kind::{TabType, TypeFilter, validate_type};
pub use query::{
    DEFAULT_ORDER, DEFAULT_SEARCH_TYPE, QueryDefaults, RawSearchArgs, SearchArgs,
    format_search_query, format_search_query_with, underscore,
};

use url::Url;

use crate::params::{ParamValue, encode_params};
use crate::tabs::{SearchResults, format_tab_result, get_tabs_list};
use crate::{UgClient, UgError};

/// Builds the search endpoint URL for already-formatted arguments.
///
/// # Errors
///
/// Returns [`UgError::Url`] if the search path cannot be joined onto the client's base URL.
pub fn search_url(client: &UgClient, args: &SearchArgs) -> Result<Url, UgError> {
    let mut url = client.search_url()?;
    url.set_query(Some(&encode_params(&args.to_params())));
    Ok(url)
}

/* ---------------- Public API ---------------- */

/// Searches the site with loosely-shaped arguments.
///
/// Formatting runs first; bad input fails before any request is made.
///
/// # Errors
///
/// Returns the formatter's errors ([`UgError::Validation`],
/// [`UgError::InvalidType`]) or any error from fetching and reading the
/// results page.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn search(client: &UgClient, raw: RawSearchArgs) -> Result<SearchResults, UgError> {
    let args = format_search_query_with(&raw, client.query_defaults())?;
    let url = search_url(client, &args)?;

    if std::env::var("UG_DEBUG").ok().as_deref() == Some("1") {
        eprintln!("UG_DEBUG [search]: {url}");
    }

    let page = get_tabs_list(client, url).await?;
    Ok(SearchResults {
        tabs: page.tabs.into_iter().map(format_tab_result).collect(),
        pagination: page.pagination,
    })
}

/// A builder for searching tabs by title.
#[derive(Debug)]
pub struct SearchBuilder {
    client: UgClient,
    query: String,
    kind: TypeFilter,
    page: Option<u32>,
}

impl SearchBuilder {
    /// Creates a new `SearchBuilder` for a given free-text query.
    pub fn new(client: &UgClient, query: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            query: query.into(),
            kind: TypeFilter::Any,
            page: None,
        }
    }

    /// Restricts results to one category.
    #[must_use]
    pub fn kind(mut self, kind: TabType) -> Self {
        self.kind = TypeFilter::One(kind);
        self
    }

    /// Restricts results to several categories.
    #[must_use]
    pub fn kinds(mut self, kinds: impl IntoIterator<Item = TabType>) -> Self {
        self.kind = TypeFilter::Many(kinds.into_iter().collect());
        self
    }

    /// Selects the results page (1-based).
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// The raw arguments this builder will submit.
    pub fn to_raw(&self) -> RawSearchArgs {
        let mut raw = RawSearchArgs::new().arg("q", self.query.as_str());
        if self.kind != TypeFilter::Any {
            let kind: ParamValue = self.kind.to_param();
            raw = raw.arg("type", kind);
        }
        if let Some(p) = self.page {
            raw = raw.arg("page", p);
        }
        raw
    }

    /// Executes the search request.
    ///
    /// # Errors
    ///
    /// See [`search`].
    pub async fn fetch(self) -> Result<SearchResults, UgError> {
        search(&self.client, self.to_raw()).await
    }
}

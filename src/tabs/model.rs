use serde::{Deserialize, Serialize};

/// A tab in the crate's stable output shape.
///
/// Fields the upstream record lacked are `None`; nothing here is validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tab {
    pub artist: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub difficulty: Option<String>,
    pub tuning: Option<String>,
    pub raw_tabs: Option<String>,
    #[serde(rename = "htmlTab")]
    pub html_tab: Option<String>,
    #[serde(rename = "numberRates")]
    pub number_rates: Option<u64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Last two path segments of `url`, e.g. `artist/song-123456`.
    pub slug: Option<String>,
    /// Rounded to 2 decimals, halves away from zero.
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current: u32,
    pub total: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: 1,
            total: 1,
        }
    }
}

/// One page of search results, still in upstream shape.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTabsPage {
    pub tabs: Vec<super::RawScrapedTab>,
    pub pagination: Pagination,
}

/// One page of normalized search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub tabs: Vec<Tab>,
    pub pagination: Pagination,
}

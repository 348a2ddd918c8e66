//! ugtabs-rs: search client for Ultimate Guitar.
//!
//! Builds the site's search requests, fetches result pages, pulls the JSON
//! data store embedded in the markup and reshapes scraped records into
//! stable [`Tab`] values.
//!
//! ```no_run
//! # use ugtabs_rs::{SearchBuilder, TabType, UgClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = UgClient::default();
//! let results = SearchBuilder::new(&client, "wonderwall")
//!     .kind(TabType::Chords)
//!     .fetch()
//!     .await?;
//! for tab in &results.tabs {
//!     println!("{:?} - {:?} ({:?})", tab.artist, tab.name, tab.rating);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod page;
pub mod params;
pub mod search;
pub mod tabs;

pub use crate::core::{ErrorClass, UgClient, UgClientBuilder, UgError};
pub use page::{Page, decode_store_blob, get_page, get_page_details};
pub use params::{
    ParamValue, Params, ParsedRequest, encode_param, encode_params, format_request_search,
};
pub use search::{
    QueryDefaults, RawSearchArgs, SearchArgs, SearchBuilder, TabType, TypeFilter,
    format_search_query, format_search_query_with, search, search_url, validate_type,
};
pub use tabs::{
    Pagination, RawScrapedTab, RawTabsPage, SearchResults, Tab, format_tab_result, get_tab,
    get_tabs_list, render_html_tab,
};

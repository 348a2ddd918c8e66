//! Centralized constants for default endpoints, markup hooks and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Upstream site root (paths are joined onto it).
pub(crate) const DEFAULT_BASE_URL: &str = "http://www.ultimate-guitar.com/";

/// Search endpoint, relative to the base URL.
pub(crate) const SEARCH_PATH: &str = "search.php";

/// Node carrying the page's client-side data store.
pub(crate) const STORE_SELECTOR: &str = ".js-store[data-content]";

/// Attribute on [`STORE_SELECTOR`] holding the entity-escaped JSON.
pub(crate) const STORE_ATTRIBUTE: &str = "data-content";

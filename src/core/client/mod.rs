//! Public client surface + builder.
//! Defaults (base URL, UA, markup hooks) live in `constants`.

pub(crate) mod constants;

use crate::core::UgError;
use crate::search::QueryDefaults;
use constants::{DEFAULT_BASE_URL, SEARCH_PATH, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Handle to the upstream site: a configured HTTP client plus the endpoint and
/// query defaults every request is built from.
///
/// Cloning is cheap; clones share the underlying connection pool. The client
/// carries no mutable state, so concurrent searches are fully independent.
#[derive(Debug, Clone)]
pub struct UgClient {
    http: Client,
    base_url: Url,
    query_defaults: QueryDefaults,
}

impl Default for UgClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl UgClient {
    /// Create a new builder.
    pub fn builder() -> UgClientBuilder {
        UgClientBuilder::default()
    }

    /// The site root every endpoint is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fixed parameters sent along with every search.
    pub fn query_defaults(&self) -> &QueryDefaults {
        &self.query_defaults
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn search_url(&self) -> Result<Url, UgError> {
        Ok(self.base_url.join(SEARCH_PATH)?)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct UgClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    query_defaults: Option<QueryDefaults>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl UgClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the site root (e.g., `http://www.ultimate-guitar.com/`).
    ///
    /// Endpoints are joined onto it, so keep the trailing slash.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the fixed `search_type` / `order` values sent with every search.
    #[must_use]
    pub fn query_defaults(mut self, defaults: QueryDefaults) -> Self {
        self.query_defaults = Some(defaults);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL cannot be parsed or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<UgClient, UgError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(UgClient {
            http,
            base_url,
            query_defaults: self.query_defaults.unwrap_or_default(),
        })
    }
}

use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum UgError {
    /// An error occurred during an HTTP request (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The upstream site answered with a non-2xx status.
    #[error("Failed to fetch tabs list: status {status} at {url}")]
    Fetch {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The page did not contain the expected markup (usually the data store node).
    #[error("Malformed page: {0}")]
    MalformedPage(String),

    /// The entity-decoded data blob was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A required search field was missing or a field had an unusable value.
    #[error("Invalid query: {0}")]
    Validation(String),

    /// A `type` token outside the supported category set.
    #[error("Unsupported tab type '{0}'")]
    InvalidType(String),

    /// A raw request URI did not have the `/<type>?<query>` structure.
    #[error("Cannot parse request '{0}'")]
    Parse(String),
}

/// Coarse classification of an error by who is at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The upstream site could not be reached or refused the request.
    Unavailable,
    /// The upstream site answered but its markup or payload changed shape.
    UpstreamChanged,
    /// The caller supplied bad input.
    BadInput,
}

impl UgError {
    /// Classifies the error, so callers can tell a site outage from a site
    /// redesign from their own bad input.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Http(_) | Self::Fetch { .. } => ErrorClass::Unavailable,
            Self::MalformedPage(_) | Self::JsonParse(_) => ErrorClass::UpstreamChanged,
            Self::Url(_) | Self::Validation(_) | Self::InvalidType(_) | Self::Parse(_) => {
                ErrorClass::BadInput
            }
        }
    }

    /// True when the error was caused by the caller's input rather than the upstream site.
    #[must_use]
    pub const fn is_caller_fault(&self) -> bool {
        matches!(self.class(), ErrorClass::BadInput)
    }
}

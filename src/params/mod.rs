//! Query-string codec for the upstream site.
//!
//! The search endpoint expects PHP-style arrays (`type[]=a&type[]=b`) and
//! `+` for spaces. Values are modelled as [`ParamValue`], a scalar or a
//! (possibly nested) sequence, and encoded by explicit recursion.

pub mod request;

pub use request::{ParsedRequest, format_request_search};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left as-is when escaping a value: alphanumerics and `-_.!~*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Suffix appended to a key once per array nesting level.
const ARRAY_MARKER: &str = "[]";

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Scalar(String),
    Sequence(Vec<ParamValue>),
}

impl ParamValue {
    /// The scalar text, or `None` for a sequence.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Sequence(_) => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Scalar(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Scalar(s)
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        Self::Scalar(n.to_string())
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

/// An insertion-ordered parameter mapping.
///
/// Setting an existing key replaces its value in place, keeping the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`Params::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

/// Encodes one parameter.
///
/// A scalar becomes `key=<escaped value>`. A sequence encodes every element
/// under `key[]`, recursing so that nested sequences stack the marker
/// (`key[][]=..`). An empty sequence encodes to an empty string.
pub fn encode_param(key: &str, value: &ParamValue) -> String {
    match value {
        ParamValue::Scalar(s) => format!("{key}={}", utf8_percent_encode(s, COMPONENT)),
        ParamValue::Sequence(items) => {
            let nested = format!("{key}{ARRAY_MARKER}");
            items
                .iter()
                .map(|item| encode_param(&nested, item))
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("&")
        }
    }
}

/// Encodes every parameter in insertion order, joined with `&`, with `%20`
/// rewritten to `+` as the upstream site does.
///
/// Parameters that encode to nothing (empty sequences) are skipped rather
/// than leaving a stray `&&`.
pub fn encode_params(params: &Params) -> String {
    params
        .iter()
        .map(|(k, v)| encode_param(k, v))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("&")
        .replace("%20", "+")
}

//! Query Formatter: turns loosely-shaped search arguments into the exact
//! parameter set the upstream search endpoint is sent.

use serde_json::Value;

use super::kind::TypeFilter;
use crate::UgError;
use crate::params::{ParamValue, Params};

/// `search_type` sent by the site's own search box.
pub const DEFAULT_SEARCH_TYPE: &str = "title";
/// `order` sent by the site's own search box.
pub const DEFAULT_ORDER: &str = "";

const ACCEPTED_PARAMS: [&str; 3] = ["q", "type", "page"];
const REQUIRED_PARAMS: [&str; 1] = ["q"];

/// Fixed parameters that make our requests look like the site's own.
///
/// They are not user options; they only change if the upstream request shape changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDefaults {
    pub search_type: String,
    pub order: String,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            search_type: DEFAULT_SEARCH_TYPE.to_string(),
            order: DEFAULT_ORDER.to_string(),
        }
    }
}

/// Search arguments as received, before any filtering.
///
/// Keys are kept verbatim and in order; unknown keys are allowed here and
/// dropped by [`format_search_query`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSearchArgs {
    entries: Vec<(String, ParamValue)>,
}

impl RawSearchArgs {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Reads arguments from a JSON object.
    ///
    /// Strings, numbers and booleans become scalars, arrays become sequences
    /// and `null` entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`UgError::Validation`] if `value` is not an object or holds a nested object.
    pub fn from_json(value: &Value) -> Result<Self, UgError> {
        let obj = value
            .as_object()
            .ok_or_else(|| UgError::Validation("search arguments must be an object".into()))?;

        let mut args = Self::new();
        for (k, v) in obj {
            if let Some(pv) = json_to_param(k, v)? {
                args.entries.push((k.clone(), pv));
            }
        }
        Ok(args)
    }
}

fn json_to_param(key: &str, v: &Value) -> Result<Option<ParamValue>, UgError> {
    let pv = match v {
        Value::Null => return Ok(None),
        Value::String(s) => ParamValue::Scalar(s.clone()),
        Value::Number(n) => ParamValue::Scalar(number_text(n)),
        Value::Bool(b) => ParamValue::Scalar(b.to_string()),
        Value::Array(items) => {
            let mut seq = Vec::with_capacity(items.len());
            for item in items {
                if let Some(pv) = json_to_param(key, item)? {
                    seq.push(pv);
                }
            }
            ParamValue::Sequence(seq)
        }
        Value::Object(_) => {
            return Err(UgError::Validation(format!(
                "param '{key}' cannot be an object"
            )));
        }
    };
    Ok(Some(pv))
}

/// Integral floats (`2.0`) print as integers so they read back as page numbers.
#[allow(clippy::cast_possible_truncation)]
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 9.0e15 => (f as i64).to_string(),
        _ => n.to_string(),
    }
}

/// Validated search parameters, shaped like the upstream request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchArgs {
    pub kind: TypeFilter,
    pub page: u32,
    /// Alias of `q`; the endpoint wants both.
    pub value: String,
    pub search_type: String,
    pub order: String,
    pub q: String,
}

impl SearchArgs {
    /// Upstream parameter order: `type, page, value, search_type, order, q`.
    pub fn to_params(&self) -> Params {
        Params::new()
            .with("type", self.kind.to_param())
            .with("page", self.page)
            .with("value", self.value.clone())
            .with("search_type", self.search_type.clone())
            .with("order", self.order.clone())
            .with("q", self.q.clone())
    }
}

/// Converts a key to snake case: `searchType`, `search-type` and
/// `Search Type` all become `search_type`.
pub fn underscore(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;
    for ch in key.trim().chars() {
        if ch == '-' || ch.is_whitespace() || ch == '_' {
            if !out.ends_with('_') {
                out.push('_');
            }
        } else if ch.is_uppercase() {
            if prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
        prev = Some(ch);
    }
    out
}

/// [`format_search_query_with`] using the stock [`QueryDefaults`].
///
/// # Errors
///
/// See [`format_search_query_with`].
pub fn format_search_query(raw: &RawSearchArgs) -> Result<SearchArgs, UgError> {
    format_search_query_with(raw, &QueryDefaults::default())
}

/// Applies the site's request rules to raw arguments.
///
/// Keys are snake-cased and only `q`, `type` and `page` survive. `q` is
/// required and must be a non-empty scalar; `type` is validated token by
/// token; `page` defaults to 1. `value` is always set to `q`.
///
/// # Errors
///
/// Returns [`UgError::Validation`] for a missing or unusable field and
/// [`UgError::InvalidType`] for an unsupported `type` token.
pub fn format_search_query_with(
    raw: &RawSearchArgs,
    defaults: &QueryDefaults,
) -> Result<SearchArgs, UgError> {
    let mut accepted = Params::new();
    for (key, value) in raw.iter() {
        let underscored = underscore(key);
        if ACCEPTED_PARAMS.contains(&underscored.as_str()) {
            accepted.set(underscored, value.clone());
        }
    }

    for required in REQUIRED_PARAMS {
        if accepted.get(required).is_none() {
            return Err(UgError::Validation(format!(
                "Query requires param '{required}'."
            )));
        }
    }

    let q = match accepted.get("q").and_then(ParamValue::as_scalar) {
        Some(q) if !q.trim().is_empty() => q.to_string(),
        Some(_) => return Err(UgError::Validation("param 'q' must not be empty".into())),
        None => return Err(UgError::Validation("param 'q' must be a string".into())),
    };

    let kind = match accepted.get("type") {
        Some(v) => TypeFilter::from_param(v)?,
        None => TypeFilter::Any,
    };

    let page = match accepted.get("page") {
        Some(v) => parse_page(v)?,
        None => 1,
    };

    Ok(SearchArgs {
        kind,
        page,
        value: q.clone(),
        search_type: defaults.search_type.clone(),
        order: defaults.order.clone(),
        q,
    })
}

fn parse_page(v: &ParamValue) -> Result<u32, UgError> {
    v.as_scalar()
        .and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|&p| p >= 1)
        .ok_or_else(|| UgError::Validation("param 'page' must be a positive integer".into()))
}

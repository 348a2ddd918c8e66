use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::model::Pagination;

/// A tab record as the upstream data store lists it.
///
/// Every field is optional: records are taken as they come and missing
/// values flow through normalization as `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawScrapedTab {
    pub artist_name: Option<String>,
    pub song_name: Option<String>,
    pub tab_url: Option<String>,
    #[serde(deserialize_with = "de_opt_stringish")]
    pub difficulty: Option<String>,
    #[serde(deserialize_with = "de_opt_stringish")]
    pub tuning: Option<String>,
    pub raw_tabs: Option<String>,
    #[serde(rename = "htmlTab")]
    pub html_tab: Option<String>,
    #[serde(deserialize_with = "de_opt_u64_from_any")]
    pub votes: Option<u64>,
    #[serde(rename = "type", deserialize_with = "de_opt_stringish")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "de_opt_f64_from_any")]
    pub rating: Option<f64>,
}

/* --------- Minimal serde mapping for the data store --------- */

#[derive(Deserialize)]
pub(crate) struct Store<T> {
    pub(crate) store: StoreRoot<T>,
}

#[derive(Deserialize)]
pub(crate) struct StoreRoot<T> {
    pub(crate) page: StorePage<T>,
}

#[derive(Deserialize)]
pub(crate) struct StorePage<T> {
    pub(crate) data: T,
}

/// `store.page.data` on a search results page.
#[derive(Deserialize)]
pub(crate) struct SearchData {
    pub(crate) results: Vec<RawScrapedTab>,
    #[serde(default)]
    pub(crate) pagination: Pagination,
}

/// `store.page.data` on a single tab page.
#[derive(Deserialize)]
pub(crate) struct TabData {
    pub(crate) tab: RawScrapedTab,
    #[serde(default)]
    pub(crate) tab_view: TabView,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct TabView {
    pub(crate) wiki_tab: Option<WikiTab>,
    pub(crate) meta: Option<TabMeta>,
    #[serde(deserialize_with = "de_opt_stringish")]
    pub(crate) ug_difficulty: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct WikiTab {
    pub(crate) content: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct TabMeta {
    #[serde(deserialize_with = "de_opt_stringish")]
    pub(crate) tuning: Option<String>,
}

/* --------- Lenient scalar helpers --------- */

/// Strings as-is, numbers and booleans as text, `{ "value": .. }` objects by their value.
fn de_opt_stringish<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    fn stringish(v: &Value) -> Option<String> {
        match v {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Object(o) => o.get("value").and_then(stringish),
            Value::Null | Value::Array(_) => None,
        }
    }
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(stringish))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn de_opt_u64_from_any<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                .map(|f| f as u64)
        }),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn de_opt_f64_from_any<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

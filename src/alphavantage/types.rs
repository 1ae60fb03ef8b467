//! Alpha Vantage API Type Definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel used for any value that is absent or cannot be formatted
pub const NOT_AVAILABLE: &str = "N/A";

/// Company overview as returned by `function=OVERVIEW`
///
/// The provider sends every value as a JSON string, e.g.
///
/// ```json
/// {
///   "Symbol": "IBM",
///   "Name": "International Business Machines",
///   "MarketCapitalization": "227865313000",
///   "DividendYield": "0.0268",
///   "52WeekHigh": "265.72"
/// }
/// ```
///
/// No schema is enforced; callers pick the keys they need and read missing
/// ones as [`NOT_AVAILABLE`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawOverviewRecord(BTreeMap<String, String>);

impl RawOverviewRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from a decoded JSON object
    ///
    /// Strings are kept verbatim, numbers and booleans are stringified and
    /// `null` values are dropped. Nested values are not part of this endpoint
    /// and are stringified as JSON.
    pub fn from_json_object(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        let fields = object
            .iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    serde_json::Value::Null => return None,
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Some((key.clone(), text))
            })
            .collect();
        Self(fields)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Value for `key`, or `"N/A"` when the provider omitted it
    pub fn get_or_na(&self, key: &str) -> &str {
        self.get(key).unwrap_or(NOT_AVAILABLE)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The `Symbol` field, present on every successful response
    pub fn symbol(&self) -> Option<&str> {
        self.get("Symbol")
    }

    /// Field name/value pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawOverviewRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

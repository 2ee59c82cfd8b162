use std::collections::HashMap;

use crate::error::TypeError;

/// Query parameter names from the measurement protocol.
pub mod keys {
    /// Protocol version. The only accepted value is `"1"`.
    pub const VERSION: &str = "v";
    /// Tracking (site) id of the reporting property.
    pub const SITE_ID: &str = "tid";
    /// Client (browser) id. Part of the schema but not read yet.
    pub const CLIENT_ID: &str = "cid";
    /// Hit type. Only `"event"` is supported.
    pub const HIT_TYPE: &str = "t";
    /// Event category.
    pub const EVENT_CATEGORY: &str = "ec";
    /// Event action.
    pub const EVENT_ACTION: &str = "ea";
    /// Event label.
    pub const EVENT_LABEL: &str = "el";
    /// Event value. Part of the schema but not read yet.
    pub const EVENT_VALUE: &str = "ev";

    /// The only hit type currently accepted.
    pub const HIT_TYPE_EVENT: &str = "event";
    /// The only protocol version currently accepted.
    pub const PROTOCOL_VERSION: &str = "1";
}

/// Immutable set of decoded query parameters.
///
/// A key may appear several times on the wire; only its first value is kept.
/// Lookups of absent keys yield the empty string, so reading a parameter
/// never fails.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterSet {
    values: HashMap<String, String>,
}

impl ParameterSet {
    /// An empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a parameter set from key/value pairs, keeping the first value
    /// seen for each key.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut values = HashMap::new();
        for (key, value) in pairs {
            values.entry(key.into()).or_insert_with(|| value.into());
        }
        Self { values }
    }

    /// Decode an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is tolerated. An empty string yields an empty set.
    /// Decoding is lenient: malformed percent escapes are kept verbatim and
    /// invalid UTF-8 is replaced with U+FFFD, so in practice every query
    /// string decodes.
    pub fn from_query(query: &str) -> Result<Self, TypeError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)
            .map_err(|e| TypeError::QueryDecode(e.to_string()))?;
        Ok(Self::from_pairs(pairs))
    }

    /// Value for `key`, or `""` when the key is absent.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Whether `key` was supplied at all (even with an empty value).
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no parameters were supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(key, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

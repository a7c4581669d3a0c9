//! Insertion-ordered query parameters and their wire encoding.
//!
//! The service is order-sensitive in practice (its documented examples rely
//! on parameter order), so `Query` is a flat `Vec` rather than a map: keys
//! encode in insertion order, list elements in element order.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Bool(bool),
    /// Encoded as bracket-suffixed repeated keys: `key[]=a&key[]=b`.
    List(Vec<QueryValue>),
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        QueryValue::Str(v.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        QueryValue::Str(v)
    }
}

impl From<i64> for QueryValue {
    fn from(v: i64) -> Self {
        QueryValue::Int(v)
    }
}

impl From<u32> for QueryValue {
    fn from(v: u32) -> Self {
        QueryValue::Int(v as i64)
    }
}

impl From<u64> for QueryValue {
    fn from(v: u64) -> Self {
        QueryValue::Int(v as i64)
    }
}

impl From<bool> for QueryValue {
    fn from(v: bool) -> Self {
        QueryValue::Bool(v)
    }
}

impl<T: Into<QueryValue>> From<Vec<T>> for QueryValue {
    fn from(v: Vec<T>) -> Self {
        QueryValue::List(v.into_iter().map(Into::into).collect())
    }
}

impl QueryValue {
    /// Scalar rendering, as it appears on the wire before percent-encoding.
    fn render(&self) -> String {
        match self {
            QueryValue::Str(s) => s.clone(),
            QueryValue::Int(i) => i.to_string(),
            QueryValue::Bool(b) => b.to_string(),
            // Lists never render as a single scalar; `encode` expands them
            // per-element. Nested lists are flattened.
            QueryValue::List(items) => items
                .iter()
                .map(QueryValue::render)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl Serialize for QueryValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            QueryValue::Str(s) => serializer.serialize_str(s),
            QueryValue::Int(i) => serializer.serialize_i64(*i),
            QueryValue::Bool(b) => serializer.serialize_bool(*b),
            QueryValue::List(items) => serializer.collect_seq(items),
        }
    }
}

/// Ordered key/value parameters for a single request.
///
/// For GET requests this encodes into the URL query string; for POST and
/// DELETE the `Serialize` impl emits it as a JSON object, keys in insertion
/// order. Optional call arguments that are absent are never inserted (no
/// `null` or empty values on the wire).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    params: Vec<(String, QueryValue)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, preserving insertion order.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.params.push((key.into(), value.into()));
    }

    /// Append a parameter only when the value is present.
    pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<impl Into<QueryValue>>) {
        if let Some(v) = value {
            self.insert(key, v);
        }
    }

    /// Builder-style `insert`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Encode as a URL query string (without the leading `?`).
    ///
    /// Keys encode in insertion order; list values expand to bracket-suffixed
    /// repeated keys in element order.
    pub fn encode(&self) -> String {
        let mut pairs = Vec::with_capacity(self.params.len());
        for (key, value) in &self.params {
            match value {
                QueryValue::List(items) => {
                    for item in items {
                        pairs.push(format!(
                            "{}[]={}",
                            encode_component(key),
                            encode_component(&item.render())
                        ));
                    }
                }
                scalar => pairs.push(format!(
                    "{}={}",
                    encode_component(key),
                    encode_component(&scalar.render())
                )),
            }
        }
        pairs.join("&")
    }

}

// The JSON body form for POST and DELETE. Serializing straight from the
// `Vec` keeps insertion order on the wire; a `serde_json::Map` would sort
// keys alphabetically.
impl Serialize for Query {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.params.len()))?;
        for (key, value) in &self.params {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Percent-encode one key or value.
///
/// `/`, `[` and `]` stay literal — the service expects pair symbols like
/// `BTC/USDT` and bracketed array keys unescaped.
fn encode_component(s: &str) -> String {
    urlencoding::encode(s)
        .replace("%2F", "/")
        .replace("%5B", "[")
        .replace("%5D", "]")
}

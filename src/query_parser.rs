use indexmap::IndexMap;

use crate::codec::{Charset, decode};
use crate::query_builder;
use crate::types::{ArrayValueMap, SingleValueMap};

/// A parsed query string: keys in first-seen order, each with every value it
/// was given, in order of appearance.
///
/// Every key holds at least one value. A pair without `=` records an empty
/// value, and the empty string is a key like any other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    params: IndexMap<String, Vec<String>>,
}

impl ParsedQuery {
    pub fn new() -> Self {
        Self {
            params: IndexMap::new(),
        }
    }

    /// Parse a query string: the text after a URL's `?`, or an equivalent
    /// callback payload. A `?` in the input is ordinary text.
    ///
    /// Keys and values are decoded with `charset`; without one they are kept
    /// verbatim. Empty pairs are skipped and only the first `=` of a pair
    /// separates key from value.
    pub fn parse<'a>(query: impl Into<Option<&'a str>>, charset: Option<Charset>) -> Self {
        let Some(query) = query.into() else {
            return Self::new();
        };
        let mut parsed = Self::new();
        if query.is_empty() {
            return parsed;
        }

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            parsed.push(
                decode(key, charset).into_owned(),
                decode(value, charset).into_owned(),
            );
        }
        parsed
    }

    fn push(&mut self, key: String, value: String) {
        self.params.entry(key).or_default().push(value);
    }

    /// The value a single-value view would hold for `key`: the last one.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Get all values for a key, in order of appearance.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.params.get(key).map_or(&[][..], Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Every (key, value) pair, grouped by key in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().flat_map(|(key, values)| {
            values
                .iter()
                .map(move |value| (key.as_str(), value.as_str()))
        })
    }

    /// Collapse to one value per key; for a repeated key the last value wins.
    pub fn single_value_map(&self) -> SingleValueMap {
        self.params
            .iter()
            .filter_map(|(key, values)| values.last().map(|value| (key.clone(), value.clone())))
            .collect()
    }

    pub fn array_value_map(&self) -> ArrayValueMap {
        self.params.clone()
    }

    pub fn into_array_value_map(self) -> ArrayValueMap {
        self.params
    }

    /// Serialize back to a query string, encoding with `charset`.
    pub fn to_query_string(&self, charset: Option<Charset>) -> String {
        query_builder::build_safe(&self.params, charset)
    }
}

impl From<ArrayValueMap> for ParsedQuery {
    fn from(mut params: ArrayValueMap) -> Self {
        params.retain(|_, values| !values.is_empty());
        Self { params }
    }
}

impl From<&str> for ParsedQuery {
    fn from(query: &str) -> Self {
        Self::parse(query, None)
    }
}

/// Parse `query` and collapse it to one value per key (last wins).
pub fn to_single_value_map<'a>(
    query: impl Into<Option<&'a str>>,
    charset: Option<Charset>,
) -> SingleValueMap {
    ParsedQuery::parse(query, charset).single_value_map()
}

/// Parse `query` keeping every value of every key.
pub fn to_array_value_map<'a>(
    query: impl Into<Option<&'a str>>,
    charset: Option<Charset>,
) -> ArrayValueMap {
    ParsedQuery::parse(query, charset).into_array_value_map()
}

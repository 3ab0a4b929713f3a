use crate::codec::Charset;
use crate::helpers::UrlParts;
use crate::query_builder::build_safe;
use crate::query_parser::ParsedQuery;
use crate::types::{ArrayValueMap, QueryToken};

/// Add one `key=value` pair to `url`, encoding both with `charset`.
///
/// A new key is appended: a URL without a query gets `?`, one with pairs gets
/// `&`, one ending in `?` or `&` gets no separator. A key the query already
/// holds has its values replaced in place, and the query is re-encoded with
/// `charset`. A `#fragment` stays at the end. A missing URL is treated as
/// empty, so the result starts with `?`.
pub fn add_parameter<'a, V>(
    url: impl Into<Option<&'a str>>,
    key: &str,
    value: V,
    charset: Option<Charset>,
) -> String
where
    V: QueryToken,
{
    let mut additions = ArrayValueMap::new();
    additions.insert(key.to_string(), vec![value.as_token().to_string()]);
    merge_parameters(url.into(), additions, charset)
}

/// Add every pair of a single-value mapping, in its iteration order.
/// Keys already in the query are replaced, as in [`add_parameter`].
pub fn add_parameter_single_value_map<'a, I, K, V>(
    url: impl Into<Option<&'a str>>,
    map: I,
    charset: Option<Charset>,
) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: QueryToken,
    V: QueryToken,
{
    let mut additions = ArrayValueMap::new();
    for (key, value) in map {
        additions
            .entry(key.as_token().to_string())
            .or_default()
            .push(value.as_token().to_string());
    }
    merge_parameters(url.into(), additions, charset)
}

/// Add every value of an array-value mapping, repeating keys as needed.
/// Keys already in the query get the new values instead of the old ones.
pub fn add_parameter_array_value_map<'a, I, K, VS>(
    url: impl Into<Option<&'a str>>,
    map: I,
    charset: Option<Charset>,
) -> String
where
    I: IntoIterator<Item = (K, VS)>,
    K: QueryToken,
    VS: IntoIterator,
    VS::Item: QueryToken,
{
    let mut additions = ArrayValueMap::new();
    for (key, values) in map {
        let values: Vec<String> = values
            .into_iter()
            .map(|value| value.as_token().to_string())
            .collect();
        if !values.is_empty() {
            additions
                .entry(key.as_token().to_string())
                .or_default()
                .extend(values);
        }
    }
    merge_parameters(url.into(), additions, charset)
}

/// Drop every pair whose key is in `keys`.
///
/// The remaining query is decoded and re-encoded with `charset`, grouped by
/// key in first-seen order. An emptied query loses its `?`.
pub fn remove_parameters<K: QueryToken>(url: &str, keys: &[K], charset: Option<Charset>) -> String {
    rebuild_query(url, charset, |key| {
        !keys.iter().any(|removed| removed.as_token() == key)
    })
}

/// Keep only the pairs whose key is in `keys`; see [`remove_parameters`].
pub fn retain_parameters<K: QueryToken>(url: &str, keys: &[K], charset: Option<Charset>) -> String {
    rebuild_query(url, charset, |key| {
        keys.iter().any(|kept| kept.as_token() == key)
    })
}

/// The raw query component of `url`: between the first `?` and the `#`.
pub fn query_of(url: &str) -> Option<&str> {
    UrlParts::split(url).query
}

fn merge_parameters(url: Option<&str>, additions: ArrayValueMap, charset: Option<Charset>) -> String {
    let url = url.unwrap_or_else(|| {
        tracing::trace!("no base url, appending to empty string");
        ""
    });
    if additions.is_empty() {
        return url.to_string();
    }

    let parts = UrlParts::split(url);
    let existing = ParsedQuery::parse(parts.query, charset);
    if !additions.keys().any(|key| existing.contains_key(key)) {
        return append_tokens(&parts, &build_safe(&additions, charset));
    }

    tracing::trace!(url, "replacing existing parameters");
    let mut params = existing.into_array_value_map();
    for (key, values) in additions {
        params.insert(key, values);
    }
    parts.join_with_query(&build_safe(&params, charset))
}

fn append_tokens(parts: &UrlParts<'_>, tokens: &str) -> String {
    let fragment_len = parts.fragment.map_or(0, |f| f.len() + 1);
    let query_len = parts.query.map_or(0, str::len);
    let mut result =
        String::with_capacity(parts.base.len() + query_len + tokens.len() + 2 + fragment_len);
    result.push_str(parts.base);
    result.push('?');
    if let Some(query) = parts.query {
        result.push_str(query);
        if !query.is_empty() && !query.ends_with('&') {
            result.push('&');
        }
    }
    result.push_str(tokens);
    if let Some(fragment) = parts.fragment {
        result.push('#');
        result.push_str(fragment);
    }
    result
}

fn rebuild_query(url: &str, charset: Option<Charset>, keep: impl Fn(&str) -> bool) -> String {
    let parts = UrlParts::split(url);
    let Some(query) = parts.query else {
        return url.to_string();
    };

    let params = ParsedQuery::parse(query, charset).into_array_value_map();
    let query = build_safe(params.iter().filter(|(key, _)| keep(key.as_str())), charset);
    parts.join_with_query(&query)
}

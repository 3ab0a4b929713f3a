use crate::codec::{Charset, encode_into};
use crate::types::{ParamLookup, QueryToken};

/// Build a query string from a single-value mapping, in the mapping's own
/// iteration order, without encoding.
///
/// Pass an order-preserving map (`IndexMap`, `BTreeMap`, a `Vec` of pairs)
/// when the output order matters. Every builder takes any iterable of pairs,
/// so a possibly missing map is passed as `map.into_iter().flatten()` on the
/// `Option` and builds the empty string.
pub fn build_from_single_value_map<I, K, V>(map: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: QueryToken,
    V: QueryToken,
{
    join_single(map, None)
}

/// Build a query string from an array-value mapping, repeating the key for
/// every value (`city=A&city=B`), without encoding.
pub fn build_from_array_value_map<I, K, VS>(map: I) -> String
where
    I: IntoIterator<Item = (K, VS)>,
    K: QueryToken,
    VS: IntoIterator,
    VS::Item: QueryToken,
{
    join_array(map, None)
}

/// Build the canonical string used for signing: keys sorted ascending by
/// ordinal comparison, values never percent-encoded.
///
/// The output depends only on the set of pairs, not on iteration order.
/// A missing or empty map (`None::<&M>.into_iter().flatten()`) gives `""`.
pub fn build_natural_ordering<I, K, V>(map: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: QueryToken,
    V: QueryToken,
{
    let mut entries: Vec<(K, V)> = map.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.as_token().cmp(b.as_token()));
    join_single(entries, None)
}

/// Build `key=value` tokens in the order given by `keys`.
/// Keys missing from `map` are skipped. Values are not encoded.
pub fn build_ordered_by_keys<M, K>(map: &M, keys: &[K]) -> String
where
    M: ParamLookup + ?Sized,
    K: QueryToken,
{
    join_single(
        keys.iter()
            .filter_map(|key| map.lookup(key.as_token()).map(|value| (key.as_token(), value))),
        None,
    )
}

/// Build a transmittable query string from an array-value mapping, encoding
/// every key and value with `charset`. Without a charset the tokens are
/// written unencoded. A missing or empty map gives `""`.
pub fn build_safe<I, K, VS>(map: I, charset: Option<Charset>) -> String
where
    I: IntoIterator<Item = (K, VS)>,
    K: QueryToken,
    VS: IntoIterator,
    VS::Item: QueryToken,
{
    join_array(map, charset)
}

fn join_single<I, K, V>(map: I, charset: Option<Charset>) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: QueryToken,
    V: QueryToken,
{
    let mut result = String::new();
    for (key, value) in map {
        push_token(&mut result, key.as_token(), value.as_token(), charset);
    }
    result
}

fn join_array<I, K, VS>(map: I, charset: Option<Charset>) -> String
where
    I: IntoIterator<Item = (K, VS)>,
    K: QueryToken,
    VS: IntoIterator,
    VS::Item: QueryToken,
{
    let mut result = String::new();
    for (key, values) in map {
        for value in values {
            push_token(&mut result, key.as_token(), value.as_token(), charset);
        }
    }
    result
}

/// Append `key=value` (encoded with `charset`) to buffer, `&`-separated.
pub(crate) fn push_token(buffer: &mut String, key: &str, value: &str, charset: Option<Charset>) {
    if !buffer.is_empty() {
        buffer.push('&');
    }
    encode_into(buffer, key, charset);
    buffer.push('=');
    encode_into(buffer, value, charset);
}

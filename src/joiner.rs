use crate::types::{ParamLookup, QueryToken};

/// Concatenate the values of `keys`, in the order of `keys`, with no separator
/// and no key names. Keys missing from `map` contribute nothing.
///
/// The result depends only on `keys` and the values they name, which makes it
/// usable as the canonical input of a signature.
pub fn join_values_order_by_include_keys<M, K>(map: &M, keys: &[K]) -> String
where
    M: ParamLookup + ?Sized,
    K: QueryToken,
{
    let mut result = String::new();
    for value in keys.iter().filter_map(|key| map.lookup(key.as_token())) {
        result.push_str(value);
    }
    result
}

use std::borrow::{Borrow, Cow};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

/// Single value per key, in first-seen key order
pub type SingleValueMap = IndexMap<String, String>;

/// Every value per key, in first-seen key order
pub type ArrayValueMap = IndexMap<String, Vec<String>>;

/// Anything that can stand in for a query key or value.
///
/// `Option::None` reads as the empty string, so maps holding optional keys or
/// values can be built without pre-filtering.
pub trait QueryToken {
    fn as_token(&self) -> &str;
}

impl QueryToken for str {
    fn as_token(&self) -> &str {
        self
    }
}

impl QueryToken for String {
    fn as_token(&self) -> &str {
        self
    }
}

impl QueryToken for Cow<'_, str> {
    fn as_token(&self) -> &str {
        self
    }
}

impl<T: QueryToken + ?Sized> QueryToken for &T {
    fn as_token(&self) -> &str {
        (**self).as_token()
    }
}

impl<T: QueryToken> QueryToken for Option<T> {
    fn as_token(&self) -> &str {
        self.as_ref().map_or("", QueryToken::as_token)
    }
}

/// Look up a value by key, independent of the map's own iteration order.
pub trait ParamLookup {
    fn lookup(&self, key: &str) -> Option<&str>;
}

impl<K, V, S> ParamLookup for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: QueryToken,
    S: BuildHasher,
{
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(QueryToken::as_token)
    }
}

impl<K, V, S> ParamLookup for IndexMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: QueryToken,
    S: BuildHasher,
{
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(QueryToken::as_token)
    }
}

impl<K, V> ParamLookup for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: QueryToken,
{
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(QueryToken::as_token)
    }
}

impl<T: ParamLookup + ?Sized> ParamLookup for &T {
    fn lookup(&self, key: &str) -> Option<&str> {
        (**self).lookup(key)
    }
}

//! Stateless collection helpers.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Re-value every entry of a map, keeping its keys.
///
/// ```
/// use std::collections::HashMap;
/// use kase::support::collections::map_values;
///
/// let prices = HashMap::from([("tea", 3), ("cake", 5)]);
/// let doubled = map_values(prices, |_, v| v * 2);
/// assert_eq!(doubled["cake"], 10);
/// ```
pub fn map_values<K, V, W, S, F>(map: HashMap<K, V, S>, mut f: F) -> HashMap<K, W>
where
    K: Eq + Hash,
    S: BuildHasher,
    F: FnMut(&K, V) -> W,
{
    map.into_iter()
        .map(|(k, v)| {
            let w = f(&k, v);
            (k, w)
        })
        .collect()
}

/// Keep only present values, unwrapped.
pub fn flatten_values<K, V, S>(map: HashMap<K, Option<V>, S>) -> HashMap<K, V>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    map.into_iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
        .collect()
}

/// The first present value, in order.
pub fn first_present<T>(options: impl IntoIterator<Item = Option<T>>) -> Option<T> {
    options.into_iter().flatten().next()
}

/// Call suppliers in order until one produces a value. Later suppliers are not called.
pub fn first_present_lazy<T, F>(suppliers: impl IntoIterator<Item = F>) -> Option<T>
where
    F: FnOnce() -> Option<T>,
{
    suppliers.into_iter().find_map(|supply| supply())
}

/// The non-null elements of a possibly absent sequence.
///
/// ```
/// use kase::support::collections::non_null;
///
/// let names: Vec<&str> = non_null(Some(vec![Some("a"), None, Some("b")])).collect();
/// assert_eq!(names, ["a", "b"]);
/// assert_eq!(non_null::<u8>(None).count(), 0);
/// ```
pub fn non_null<T>(values: Option<Vec<Option<T>>>) -> impl Iterator<Item = T> {
    values.into_iter().flatten().flatten()
}

//! Cache-backed function wrapper.

use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use dashmap::DashMap;

/// A key-value store that can fill itself on a miss.
pub trait Cache<K, V> {
    /// Return the cached value for `key`, computing and storing it on a miss.
    fn compute_if_absent<F>(&self, key: &K, compute: F) -> V
    where
        F: FnOnce(&K) -> V;
}

impl<K, V, S> Cache<K, V> for DashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn compute_if_absent<F>(&self, key: &K, compute: F) -> V
    where
        F: FnOnce(&K) -> V,
    {
        // Fast path: shared read lock only
        if let Some(hit) = self.get(key) {
            return hit.value().clone();
        }

        tracing::trace!("cache miss");
        self.entry(key.clone())
            .or_insert_with(|| compute(key))
            .value()
            .clone()
    }
}

/// A function whose results go through an injected [`Cache`].
///
/// ```
/// use dashmap::DashMap;
/// use kase::cached;
///
/// let square = cached(DashMap::new(), |n: &u64| n * n);
/// assert_eq!(square.call(&12), 144);
/// assert_eq!(square.cache().len(), 1);
/// ```
pub struct Cached<K, V, C, F> {
    cache: C,
    f: F,
    _entry: PhantomData<fn(&K) -> V>,
}

impl<K, V, C, F> Cached<K, V, C, F>
where
    C: Cache<K, V>,
    F: Fn(&K) -> V,
{
    /// Wrap `f` so every call consults `cache` first.
    pub fn new(cache: C, f: F) -> Self {
        Self {
            cache,
            f,
            _entry: PhantomData,
        }
    }

    /// Look `key` up, computing it with the wrapped function on a miss.
    pub fn call(&self, key: &K) -> V {
        self.cache.compute_if_absent(key, &self.f)
    }

    /// The underlying cache.
    #[must_use]
    pub fn cache(&self) -> &C {
        &self.cache
    }
}

impl<K, V, C: fmt::Debug, F> fmt::Debug for Cached<K, V, C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cached")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

/// Shorthand for [`Cached::new`].
pub fn cached<K, V, C, F>(cache: C, f: F) -> Cached<K, V, C, F>
where
    C: Cache<K, V>,
    F: Fn(&K) -> V,
{
    Cached::new(cache, f)
}

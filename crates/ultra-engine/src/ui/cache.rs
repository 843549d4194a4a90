use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Load-on-first-use resource table.
///
/// Backends keep their shader programs (and similar derived resources) in
/// one of these. [`clear`](Self::clear) is the invalidation point, e.g. after
/// the graphics context is recreated.
#[derive(Debug)]
pub struct ResourceCache<K, V> {
    label: &'static str,
    entries: FxHashMap<K, V>,
}

impl<K: Eq + Hash + fmt::Debug, V> ResourceCache<K, V> {
    pub fn new(label: &'static str) -> Self {
        Self { label, entries: FxHashMap::default() }
    }

    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Returns the cached value for `key`, running `load` on a miss.
    ///
    /// A failed load leaves the cache untouched, so the next call retries.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        key: K,
        load: impl FnOnce() -> Result<V, E>,
    ) -> Result<&V, E> {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                log::debug!("{} cache miss: {:?}", self.label, entry.key());
                let value = load()?;
                Ok(entry.insert(value))
            }
        }
    }

    /// Evicts one entry.
    pub fn invalidate(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }

    /// Evicts everything.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("{} cache cleared ({} entries)", self.label, self.entries.len());
        }
        self.entries.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_counting(calls: &mut u32, value: u32) -> Result<u32, ()> {
        *calls += 1;
        Ok(value)
    }

    #[test]
    fn loads_once_per_key() {
        let mut cache = ResourceCache::new("test");
        let mut calls = 0;
        assert_eq!(cache.get_or_try_insert_with("panel", || load_counting(&mut calls, 1)), Ok(&1));
        assert_eq!(cache.get_or_try_insert_with("panel", || load_counting(&mut calls, 2)), Ok(&1));
        assert_eq!(calls, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let mut cache: ResourceCache<&str, u32> = ResourceCache::new("test");
        assert_eq!(cache.get_or_try_insert_with("panel", || Err("missing")), Err("missing"));
        assert!(cache.get(&"panel").is_none());
        assert_eq!(cache.get_or_try_insert_with("panel", || Ok::<_, &str>(5)), Ok(&5));
    }

    #[test]
    fn clear_forces_reload() {
        let mut cache = ResourceCache::new("test");
        let mut calls = 0;
        cache.get_or_try_insert_with("panel", || load_counting(&mut calls, 1)).unwrap();
        cache.clear();
        assert!(cache.is_empty());
        cache.get_or_try_insert_with("panel", || load_counting(&mut calls, 1)).unwrap();
        assert_eq!(calls, 2);
    }

    #[test]
    fn invalidate_removes_single_entry() {
        let mut cache = ResourceCache::new("test");
        cache.get_or_try_insert_with("a", || Ok::<_, ()>(1)).unwrap();
        cache.get_or_try_insert_with("b", || Ok::<_, ()>(2)).unwrap();
        assert_eq!(cache.invalidate(&"a"), Some(1));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"b"), Some(&2));
    }
}

// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::policy::{CachePolicy, Identity};
use crate::{Error, Result};

/// A fixed-capacity associative cache with move-to-front promotion
///
/// Lookups scan the entries linearly and swap the first match to position 0,
/// so position 0 is always the most recently matched entry. When a full cache
/// receives a new entry, the tail entry (the least recently promoted one) is
/// evicted and handed back to the caller.
///
/// This targets small, hot working sets, where the linear scan outperforms
/// hashing overhead: `get` and `remove` are *O*(len), `insert` is *O*(1).
///
/// # Examples
///
/// ```
/// # use hash_cache::Cache;
/// let mut cache = Cache::new(2)?;
///
/// cache.insert("a");
/// cache.insert("b");
///
/// // promote "a", so "b" becomes the tail
/// assert_eq!(cache.get(&"a"), Some(&"a"));
///
/// let evicted = cache.insert("c");
/// assert_eq!(evicted, Some("b"));
/// #
/// # Ok::<(), hash_cache::Error>(())
/// ```
pub struct Cache<V, P = Identity> {
    entries: Vec<V>,
    capacity: usize,
    policy: P,
}

impl<V: PartialEq> Cache<V> {
    /// Creates a cache with the given capacity and the identity policy
    /// (values are their own keys, compared with `==`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if `capacity` is zero, or
    /// [`Error::Alloc`] if the backing storage cannot be reserved.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_policy(capacity, Identity)
    }
}

impl<V, P: CachePolicy<V>> Cache<V, P> {
    /// Creates a cache with the given capacity and key policy.
    ///
    /// The capacity is immutable after construction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if `capacity` is zero, or
    /// [`Error::Alloc`] if the backing storage cannot be reserved.
    pub fn with_policy(capacity: usize, policy: P) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidSize(0));
        }

        let mut entries = Vec::new();
        entries.try_reserve_exact(capacity)?;

        Ok(Self {
            entries,
            capacity,
            policy,
        })
    }

    /// Returns the number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn position_of(&self, key: &P::Key) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| self.policy.matches(self.policy.key_of(entry), key))
    }

    /// Retrieves an entry by key, promoting it to the front.
    ///
    /// The first entry whose extracted key matches is swapped into position 0
    /// (it becomes the most recently used entry) and returned. A missing key
    /// is a miss, not an error.
    pub fn get(&mut self, key: &P::Key) -> Option<&V> {
        let idx = self.position_of(key)?;
        self.entries.swap(0, idx);
        self.entries.first()
    }

    /// Retrieves an entry by key *without* promoting it.
    pub fn peek(&self, key: &P::Key) -> Option<&V> {
        let idx = self.position_of(key)?;
        self.entries.get(idx)
    }

    /// Inserts a value, evicting the tail entry if the cache is full.
    ///
    /// The evicted entry (the least recently promoted one) is returned to the
    /// caller, which keeps responsibility for it; the cache never drops it
    /// silently.
    ///
    /// Inserting does not look for an existing entry with an equal key:
    /// duplicates are legal and create independent entries. `get`'s
    /// promotion keeps the most useful duplicate reachable first.
    pub fn insert(&mut self, value: V) -> Option<V> {
        let evicted = if self.entries.len() == self.capacity {
            log::trace!("cache is at capacity {}, evicting tail", self.capacity);
            self.entries.pop()
        } else {
            None
        };

        self.entries.push(value);

        debug_assert!(self.entries.len() <= self.capacity);

        evicted
    }

    /// Removes an entry by key, returning its value.
    ///
    /// The relative order of the remaining entries is preserved.
    pub fn remove(&mut self, key: &P::Key) -> Option<V> {
        let idx = self.position_of(key)?;
        Some(self.entries.remove(idx))
    }

    /// Iterates over the live entries, most recently used first.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.entries.iter()
    }

    /// Drops every entry; the capacity is retained.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn cache_zero_capacity() {
        assert!(matches!(
            Cache::<u64>::new(0),
            Err(Error::InvalidSize(0)),
        ));
    }

    #[test]
    fn cache_round_trip() -> crate::Result<()> {
        let mut cache = Cache::new(4)?;

        assert!(cache.is_empty());

        cache.insert("value");

        assert_eq!(1, cache.len());
        assert_eq!(Some(&"value"), cache.get(&"value"));

        Ok(())
    }

    #[test]
    fn cache_miss_is_not_an_error() -> crate::Result<()> {
        let mut cache = Cache::new(4)?;
        cache.insert(5);

        assert_eq!(None, cache.get(&42));
        assert_eq!(None, cache.remove(&42));

        Ok(())
    }

    #[test]
    fn cache_promote_on_hit() -> crate::Result<()> {
        let mut cache = Cache::new(3)?;

        cache.insert("a");
        cache.insert("b");
        cache.insert("c");

        assert_eq!(Some(&"c"), cache.get(&"c"));
        assert_eq!(vec![&"c", &"b", &"a"], cache.iter().collect::<Vec<_>>());

        Ok(())
    }

    #[test]
    fn cache_eviction_returns_tail() -> crate::Result<()> {
        let mut cache = Cache::new(2)?;

        assert_eq!(None, cache.insert("a"));
        assert_eq!(None, cache.insert("b"));
        assert_eq!(Some("b"), cache.insert("c"));
        assert_eq!(2, cache.len());

        Ok(())
    }

    #[test]
    fn cache_remove_preserves_order() -> crate::Result<()> {
        let mut cache = Cache::new(4)?;

        cache.insert("a");
        cache.insert("b");
        cache.insert("c");
        cache.insert("d");

        assert_eq!(Some("b"), cache.remove(&"b"));
        assert_eq!(vec![&"a", &"c", &"d"], cache.iter().collect::<Vec<_>>());

        Ok(())
    }

    #[test]
    fn cache_clear() -> crate::Result<()> {
        let mut cache = Cache::new(4)?;

        cache.insert(1);
        cache.insert(2);
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(4, cache.capacity());

        Ok(())
    }

    #[test]
    fn cache_duplicate_keys_are_independent() -> crate::Result<()> {
        let mut cache = Cache::new(3)?;

        cache.insert(7);
        cache.insert(7);

        assert_eq!(2, cache.len());
        assert_eq!(Some(7), cache.remove(&7));
        assert_eq!(Some(7), cache.remove(&7));
        assert_eq!(None, cache.remove(&7));

        Ok(())
    }
}

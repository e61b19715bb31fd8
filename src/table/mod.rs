// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

mod prime;

use crate::hash;
use crate::policy::{Bytes, TablePolicy};
use crate::{Error, Result};

/// Grow when an insert would push occupancy above 3/4
const LOAD_NUMERATOR: usize = 3;
const LOAD_DENOMINATOR: usize = 4;

/// Computes the double-hashing probe parameters for a key.
///
/// The start index comes from `fnv64`, the step from `mmh64`, two
/// independent hash functions. Because `m` and `m - 2` are both prime, the
/// step `1 + (h2 % (m - 2))` is always coprime to `m`, so stepping `m` times
/// visits every slot index exactly once.
#[allow(clippy::cast_possible_truncation)]
fn probe_params(key: &[u8], m: usize) -> (usize, usize) {
    let start = (hash::fnv64(key) % m as u64) as usize;
    let step = 1 + (hash::mmh64(key) % (m as u64 - 2)) as usize;
    (start, step)
}

fn find_empty<V>(slots: &[Option<V>], key: &[u8]) -> Option<usize> {
    let m = slots.len();
    let (mut idx, step) = probe_params(key, m);

    for _ in 0..m {
        if slots.get(idx)?.is_none() {
            return Some(idx);
        }
        idx = (idx + step) % m;
    }

    None
}

/// An open-addressing hash table using double hashing
///
/// The slot array size `m` is always the upper member of a twin-prime pair,
/// which guarantees that the probe sequence for any key is a full permutation
/// of the slot indices. The table grows to the next twin prime at least
/// double its size once occupancy crosses 3/4.
///
/// Slots are either empty or occupied; there are no tombstones, which keeps
/// `search`'s stop-on-empty-slot termination correct. As a consequence,
/// removing single entries is not supported — `clear` the whole table
/// instead. This is a known limitation of the minimal contract.
///
/// # Examples
///
/// ```
/// # use hash_cache::Table;
/// let mut table = Table::with_capacity(8)?;
///
/// table.insert("jake")?;
/// table.insert("finn")?;
///
/// assert_eq!(table.search(b"jake"), Some(&"jake"));
/// assert_eq!(table.search(b"bmo"), None);
/// #
/// # Ok::<(), hash_cache::Error>(())
/// ```
pub struct Table<V, P = Bytes> {
    slots: Vec<Option<V>>,
    len: usize,
    policy: P,
}

impl<V: AsRef<[u8]>> Table<V> {
    /// Creates a table that can hold at least `size_hint` values, keyed by
    /// the values' own byte representation.
    ///
    /// The size hint is rounded up to the upper member of a twin-prime pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if `size_hint` is zero, or
    /// [`Error::Alloc`] if the slot array cannot be reserved.
    pub fn with_capacity(size_hint: usize) -> Result<Self> {
        Self::with_policy(size_hint, Bytes)
    }
}

impl<V, P: TablePolicy<V>> Table<V, P> {
    /// Creates a table that can hold at least `size_hint` values, with a
    /// custom key policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if `size_hint` is zero, or
    /// [`Error::Alloc`] if the slot array cannot be reserved.
    pub fn with_policy(size_hint: usize, policy: P) -> Result<Self> {
        if size_hint == 0 {
            return Err(Error::InvalidSize(0));
        }

        let m = prime::next_twin_upper(size_hint).ok_or(Error::InvalidSize(size_hint))?;

        let mut slots = Vec::new();
        slots.try_reserve_exact(m)?;
        slots.resize_with(m, || None);

        Ok(Self {
            slots,
            len: 0,
            policy,
        })
    }

    /// Returns the number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the slot count `m` (a twin prime).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Inserts a value at the first empty slot along its probe sequence,
    /// returning the slot index.
    ///
    /// The table grows ahead of the load threshold, so probe sequences stay
    /// short; a probe sequence that still visits every slot without finding
    /// a free one triggers one more growth before giving up.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if growing fails; the table is left in its
    /// previous, still-valid state. [`Error::TableFull`] is only reachable
    /// once no larger twin prime fits in `usize`.
    pub fn insert(&mut self, value: V) -> Result<usize> {
        if (self.len + 1) * LOAD_DENOMINATOR > self.slots.len() * LOAD_NUMERATOR {
            self.grow()?;
        }

        let idx = match find_empty(&self.slots, self.policy.key_of(&value)) {
            Some(idx) => idx,
            None => {
                // the probe space is exhausted; grow and retry once
                log::trace!(
                    "probing exhausted {} slots without a hit, growing",
                    self.slots.len(),
                );
                self.grow()?;

                find_empty(&self.slots, self.policy.key_of(&value)).ok_or(Error::TableFull)?
            }
        };

        *self
            .slots
            .get_mut(idx)
            .expect("probe index should be in bounds") = Some(value);

        self.len += 1;

        Ok(idx)
    }

    /// Searches for a value by key.
    ///
    /// Probing stops at the first empty slot (the key cannot be further along
    /// its own probe sequence, since slots are never vacated) or after `m`
    /// probes. A missing key is a miss, not an error.
    pub fn search(&self, key: &[u8]) -> Option<&V> {
        let m = self.slots.len();
        let (mut idx, step) = probe_params(key, m);

        for _ in 0..m {
            match self.slots.get(idx)? {
                None => return None,
                Some(value) if self.policy.matches(self.policy.key_of(value), key) => {
                    return Some(value);
                }
                Some(_) => {}
            }

            idx = (idx + step) % m;
        }

        None
    }

    /// Iterates over the occupied slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Iterates over `(slot index, value)` pairs in slot order, skipping
    /// empty slots.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &V)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|value| (idx, value)))
    }

    /// Empties every slot; the slot array size is retained.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.len = 0;
    }

    /// Replaces the slot array with one sized to the next twin prime at
    /// least double the current size, re-probing every value into it.
    ///
    /// Allocation happens before any value is moved, so failure leaves the
    /// table untouched.
    fn grow(&mut self) -> Result<()> {
        let old_m = self.slots.len();

        let doubled = old_m.checked_mul(2).ok_or(Error::TableFull)?;
        let new_m = prime::next_twin_upper(doubled).ok_or(Error::TableFull)?;

        log::debug!(
            "growing table from {old_m} to {new_m} slots ({} occupied)",
            self.len,
        );

        let mut slots = Vec::new();
        slots.try_reserve_exact(new_m)?;
        slots.resize_with(new_m, || None);

        let mut old_slots = std::mem::replace(&mut self.slots, slots);

        for value in old_slots.iter_mut().filter_map(Option::take) {
            // the new table is strictly larger and has free slots for every
            // value, so the full-permutation probe cannot miss them
            let idx = find_empty(&self.slots, self.policy.key_of(&value))
                .ok_or(Error::TableFull)?;

            *self
                .slots
                .get_mut(idx)
                .expect("probe index should be in bounds") = Some(value);
        }

        Ok(())
    }
}

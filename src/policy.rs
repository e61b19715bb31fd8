// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

/// A trait allowing to customize how a [`Cache`](crate::Cache) derives
/// lookup keys from stored values, and when two keys are considered equal.
///
/// The default policy is [`Identity`]: the value is its own key and keys are
/// compared with `==`.
pub trait CachePolicy<V> {
    /// The key type derived from stored values.
    type Key: ?Sized;

    /// Extracts the lookup key from a stored value.
    fn key_of<'a>(&self, value: &'a V) -> &'a Self::Key;

    /// Checks two keys for equality.
    fn matches(&self, a: &Self::Key, b: &Self::Key) -> bool;
}

/// The default cache policy: the value is its own key, compared with `==`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl<V: PartialEq> CachePolicy<V> for Identity {
    type Key = V;

    fn key_of<'a>(&self, value: &'a V) -> &'a V {
        value
    }

    fn matches(&self, a: &V, b: &V) -> bool {
        a == b
    }
}

/// A trait allowing to customize how a [`Table`](crate::Table) derives hash
/// keys from stored values.
///
/// The table computes slot indices by hashing keys, so keys are byte strings.
/// The default policy is [`Bytes`], which uses the value's own byte
/// representation via `AsRef<[u8]>`.
pub trait TablePolicy<V> {
    /// Extracts the hash key from a stored value.
    fn key_of<'a>(&self, value: &'a V) -> &'a [u8];

    /// Checks two keys for equality.
    fn matches(&self, a: &[u8], b: &[u8]) -> bool {
        a == b
    }
}

/// The default table policy: the value's byte representation is its key.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bytes;

impl<V: AsRef<[u8]>> TablePolicy<V> for Bytes {
    fn key_of<'a>(&self, value: &'a V) -> &'a [u8] {
        value.as_ref()
    }
}

//! Key/value pair ordered by key alone
//!
//! [`KeyValue`] is the payload type for the keyed heap variants: all
//! comparisons (equality included) look only at `key`, so `value` rides along
//! as inert payload and never influences heap order.

use std::cmp::Ordering;

/// A `(key, value)` pair whose ordering and equality compare only the key.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyValue<K, V> {
    /// Ordering key.
    pub key: K,
    /// Attached payload; ignored by comparisons.
    pub value: V,
}

impl<K, V> KeyValue<K, V> {
    /// Creates a pair.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Splits the pair back into its parts.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: PartialEq, V> PartialEq for KeyValue<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, V> Eq for KeyValue<K, V> {}

impl<K: PartialOrd, V> PartialOrd for KeyValue<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

impl<K: Ord, V> Ord for KeyValue<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K, V> From<(K, V)> for KeyValue<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

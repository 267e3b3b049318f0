//! Keyed items shared by every collection in this crate
//!
//! A [`KeyedItem`] pairs an ordering key with an arbitrary payload. Items are
//! moved into a collection by value and handed back when removed.
//!
//! Items placed in a [`BinaryHeap`](crate::binary_heap::BinaryHeap) additionally
//! carry a back-index: the slot they currently occupy in the heap's backing
//! vector. The heap owns that field while the item is resident; callers can
//! only read it.
//!
//! # Example
//!
//! ```rust
//! use keyed_collections::KeyedItem;
//!
//! let mut item = KeyedItem::new(7, "seven");
//! assert_eq!(item.key(), &7);
//! assert_eq!(item.index(), None);
//!
//! *item.value_mut() = "SEVEN";
//! assert_eq!(item.into_parts(), (7, "SEVEN"));
//! ```

use std::cmp::Ordering;

/// A record pairing an ordered key with payload data
///
/// Equality and ordering look at the key only; two items with the same key and
/// different payloads compare equal.
#[derive(Debug, Clone)]
pub struct KeyedItem<K, V> {
    key: K,
    value: V,
    /// Slot in the owning heap, `None` while detached
    index: Option<usize>,
}

impl<K, V> KeyedItem<K, V> {
    /// Creates a detached item
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            index: None,
        }
    }

    /// Returns the ordering key
    ///
    /// There is no mutable counterpart: changing the key of a heap-resident
    /// item would silently break the heap property.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the payload
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the payload mutably; the key stays fixed
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Returns the heap slot this item occupies
    ///
    /// `Some(i)` exactly while the item sits in slot `i` of a heap. Items that
    /// were never inserted, or that have been extracted, report `None`.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Consumes the item, returning `(key, value)`
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Consumes the item, returning only the payload
    pub fn into_value(self) -> V {
        self.value
    }

    pub(crate) fn set_index(&mut self, index: Option<usize>) {
        self.index = index;
    }
}

impl<K, V> From<(K, V)> for KeyedItem<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K: PartialEq, V> PartialEq for KeyedItem<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, V> Eq for KeyedItem<K, V> {}

impl<K: Ord, V> PartialOrd for KeyedItem<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, V> Ord for KeyedItem<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_detached() {
        let item = KeyedItem::new(3, "three");
        assert_eq!(item.key(), &3);
        assert_eq!(item.value(), &"three");
        assert_eq!(item.index(), None);
    }

    #[test]
    fn test_ordering_ignores_payload() {
        let a = KeyedItem::new(1, "a");
        let b = KeyedItem::new(1, "b");
        let c = KeyedItem::new(2, "a");

        assert_eq!(a, b);
        assert!(a < c);
        assert_eq!(c.cmp(&b), Ordering::Greater);
    }

    #[test]
    fn test_from_tuple() {
        let item: KeyedItem<u8, char> = (9, 'x').into();
        assert_eq!(item.into_parts(), (9, 'x'));
    }

    #[test]
    fn test_value_mut() {
        let mut item = KeyedItem::new("k", vec![1]);
        item.value_mut().push(2);
        assert_eq!(item.into_value(), vec![1, 2]);
    }
}

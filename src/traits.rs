//! Common traits for the keyed collections
//!
//! This module provides the two capability interfaces of the crate:
//!
//! - [`Heap`]: a priority queue over [`KeyedItem`]s whose ordering direction
//!   (min or max) is chosen at construction through [`HeapKind`]
//! - [`Dictionary`]: a keyed dictionary with handle-based `delete`,
//!   neighbor queries, and extreme-key lookup
//!
//! Both traits store whole [`KeyedItem`]s so the ordering key travels with its
//! payload, and both hand items back by value on removal.

use std::fmt;
use std::hash::Hash;

use thiserror::Error;

use crate::keyed_item::KeyedItem;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The heap holds no items
    #[error("heap is empty")]
    EmptyHeap,
    /// A capacity limit was configured and every slot is occupied
    #[error("heap is full (capacity {capacity})")]
    HeapFull { capacity: usize },
    /// Internal bookkeeping is inconsistent; only reported by validation
    #[error(transparent)]
    InvariantViolation(#[from] InvariantViolation),
}

/// A rejected insert, handing the item back to the caller
///
/// The item is returned untouched and detached, so the caller can retry it
/// elsewhere once room is available.
#[derive(Debug, Clone, Error)]
#[error("{error}")]
pub struct InsertError<K, V> {
    /// Why the insert failed
    pub error: HeapError,
    /// The item that was not inserted
    pub item: KeyedItem<K, V>,
}

impl<K, V> InsertError<K, V> {
    /// Consumes the error, returning the rejected item
    pub fn into_item(self) -> KeyedItem<K, V> {
        self.item
    }
}

impl<K, V> From<InsertError<K, V>> for HeapError {
    fn from(err: InsertError<K, V>) -> Self {
        err.error
    }
}

/// A broken heap invariant, as found by `BinaryHeap::validate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The item in `slot` records a different back-index
    #[error("item in slot {slot} records index {recorded:?}")]
    IndexMismatch {
        slot: usize,
        recorded: Option<usize>,
    },
    /// The child in `child` is ordered before its parent in `parent`
    #[error("child in slot {child} is ordered before its parent in slot {parent}")]
    HeapOrder { parent: usize, child: usize },
}

/// Ordering direction of a heap
///
/// The kind is fixed when the heap is built and every comparison the heap makes
/// goes through [`HeapKind::prefers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeapKind {
    /// The root holds the smallest key
    #[default]
    Min,
    /// The root holds the largest key
    Max,
}

impl HeapKind {
    /// Returns true if `a` belongs strictly closer to the root than `b`
    ///
    /// Equal keys are never preferred over each other.
    #[inline]
    pub fn prefers<K: Ord + ?Sized>(self, a: &K, b: &K) -> bool {
        match self {
            HeapKind::Min => a < b,
            HeapKind::Max => a > b,
        }
    }
}

impl fmt::Display for HeapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapKind::Min => f.write_str("min"),
            HeapKind::Max => f.write_str("max"),
        }
    }
}

/// Base trait for heap/priority queue data structures
///
/// The root is the item with the smallest key for [`HeapKind::Min`] heaps and
/// the largest key for [`HeapKind::Max`] heaps.
///
/// # Example
///
/// ```rust
/// use keyed_collections::{Heap, HeapKind, KeyedItem};
/// use keyed_collections::binary_heap::BinaryHeap;
///
/// let mut heap = BinaryHeap::new(HeapKind::Max);
/// heap.insert(KeyedItem::new(3, "three")).unwrap();
/// heap.insert(KeyedItem::new(7, "seven")).unwrap();
///
/// assert_eq!(heap.find_root().map(|item| *item.key()), Some(7));
/// assert_eq!(heap.extract_root().map(|item| item.into_parts()), Some((7, "seven")));
/// ```
pub trait Heap<K: Ord, V> {
    /// Creates a new empty heap with the given ordering
    fn new(kind: HeapKind) -> Self;

    /// Returns the ordering fixed at construction
    fn kind(&self) -> HeapKind;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of items in the heap
    fn len(&self) -> usize;

    /// Inserts an item, returning the slot it comes to rest in
    ///
    /// # Errors
    /// Returns [`InsertError`] carrying [`HeapError::HeapFull`] when a capacity
    /// limit is configured and reached. The heap is unchanged and the item is
    /// handed back inside the error.
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, item: KeyedItem<K, V>) -> Result<usize, InsertError<K, V>>;

    /// Returns the root item without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn find_root(&self) -> Option<&KeyedItem<K, V>>;

    /// Removes and returns the root item
    ///
    /// The returned item is detached: its [`index`](KeyedItem::index) is `None`.
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract_root(&mut self) -> Option<KeyedItem<K, V>>;
}

/// A handle to an item stored in a [`Dictionary`]
///
/// Handles identify one specific item, so two items with equal keys can still
/// be told apart. A handle goes stale once its item is deleted; every
/// dictionary operation treats a stale handle as absent.
pub trait Handle: Copy + Eq + Hash + fmt::Debug {}

/// Keyed dictionary abstraction
///
/// Each realization decides how it stores items; the contract below is common
/// to all of them:
///
/// - lookups that find nothing return `None`
/// - `predecessor`/`successor` return `None` at the boundary of the key order
///   and for stale handles
/// - the backings in this crate accept duplicate keys
///
/// # Example
///
/// ```rust
/// use keyed_collections::{Dictionary, KeyedItem};
/// use keyed_collections::binary_search_tree::BstDictionary;
///
/// let mut dict = BstDictionary::new();
/// let five = dict.insert(KeyedItem::new(5, "five"));
/// let two = dict.insert(KeyedItem::new(2, "two"));
///
/// assert_eq!(dict.min(), Some(two));
/// assert_eq!(dict.successor(&two), Some(five));
/// assert_eq!(dict.delete(&two).map(|item| item.into_parts()), Some((2, "two")));
/// assert_eq!(dict.search(&2), None);
/// ```
pub trait Dictionary<K: Ord, V> {
    /// The handle type used to refer to stored items
    type Handle: Handle;

    /// Creates a new empty dictionary
    fn new() -> Self;

    /// Returns the number of stored items
    fn len(&self) -> usize;

    /// Returns true if the dictionary is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the item a handle refers to, if it is still stored
    fn get(&self, handle: &Self::Handle) -> Option<&KeyedItem<K, V>>;

    /// Finds an item whose key equals `key`
    fn search(&self, key: &K) -> Option<Self::Handle>;

    /// Stores an item, returning its handle
    fn insert(&mut self, item: KeyedItem<K, V>) -> Self::Handle;

    /// Removes the specific item the handle refers to
    fn delete(&mut self, handle: &Self::Handle) -> Option<KeyedItem<K, V>>;

    /// Returns the item with the smallest key
    fn min(&self) -> Option<Self::Handle>;

    /// Returns the item with the largest key
    fn max(&self) -> Option<Self::Handle>;

    /// Returns the item immediately before `handle` in key order
    fn predecessor(&self, handle: &Self::Handle) -> Option<Self::Handle>;

    /// Returns the item immediately after `handle` in key order
    fn successor(&self, handle: &Self::Handle) -> Option<Self::Handle>;
}

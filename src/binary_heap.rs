//! Binary Heap implementation
//!
//! An array-backed binary heap over [`KeyedItem`]s that keeps every resident
//! item's back-index equal to the slot it occupies. The ordering direction is a
//! [`HeapKind`] fixed at construction, so the same code serves as a min-heap or
//! a max-heap.
//!
//! Storage is a growable `Vec`. A hard capacity can be configured with
//! [`BinaryHeap::with_capacity_limit`], in which case inserting into a full heap
//! fails with [`HeapError::HeapFull`].
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(log n)   |
//! | `extract_root` | O(log n)   |
//! | `find_root`    | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use keyed_collections::{Heap, HeapKind, KeyedItem};
//! use keyed_collections::binary_heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new(HeapKind::Min);
//! heap.insert(KeyedItem::new(3, "three")).unwrap();
//! heap.insert(KeyedItem::new(1, "one")).unwrap();
//! heap.insert(KeyedItem::new(2, "two")).unwrap();
//!
//! assert_eq!(heap.find_root().map(|item| *item.value()), Some("one"));
//! assert_eq!(heap.extract_root().map(|item| item.into_parts()), Some((1, "one")));
//! assert_eq!(heap.extract_root().map(|item| item.into_parts()), Some((2, "two")));
//! assert_eq!(heap.extract_root().map(|item| item.into_parts()), Some((3, "three")));
//! assert!(heap.extract_root().is_none());
//! ```

use crate::keyed_item::KeyedItem;
use crate::traits::{Heap, HeapError, HeapKind, InsertError, InvariantViolation};

/// A binary heap of keyed items
///
/// Items live in a complete binary tree embedded in a vector: the children of
/// slot `i` are slots `2i + 1` and `2i + 2`. Each resident item records its own
/// slot, and every swap performed while sifting rewrites both records.
#[derive(Debug, Clone)]
pub struct BinaryHeap<K, V> {
    /// Occupied slots, contiguous from 0
    data: Vec<KeyedItem<K, V>>,
    kind: HeapKind,
    capacity_limit: Option<usize>,
}

impl<K: Ord, V> Heap<K, V> for BinaryHeap<K, V> {
    fn new(kind: HeapKind) -> Self {
        Self {
            data: Vec::new(),
            kind,
            capacity_limit: None,
        }
    }

    fn kind(&self) -> HeapKind {
        self.kind
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn insert(&mut self, mut item: KeyedItem<K, V>) -> Result<usize, InsertError<K, V>> {
        if let Some(capacity) = self.capacity_limit {
            if self.data.len() >= capacity {
                return Err(InsertError {
                    error: HeapError::HeapFull { capacity },
                    item,
                });
            }
        }

        let slot = self.data.len();
        item.set_index(Some(slot));
        self.data.push(item);
        Ok(self.sift_up(slot))
    }

    fn find_root(&self) -> Option<&KeyedItem<K, V>> {
        self.data.first()
    }

    fn extract_root(&mut self) -> Option<KeyedItem<K, V>> {
        if self.data.is_empty() {
            return None;
        }

        // The last item takes over slot 0, then sinks to its place
        let mut root = self.data.swap_remove(0);
        root.set_index(None);

        if let Some(moved) = self.data.first_mut() {
            moved.set_index(Some(0));
            self.sift_down(0);
        }

        Some(root)
    }
}

impl<K: Ord, V> BinaryHeap<K, V> {
    /// Creates an empty min-heap
    pub fn new_min() -> Self {
        <Self as Heap<K, V>>::new(HeapKind::Min)
    }

    /// Creates an empty max-heap
    pub fn new_max() -> Self {
        <Self as Heap<K, V>>::new(HeapKind::Max)
    }

    /// Creates an empty heap that holds at most `capacity` items
    ///
    /// Storage for all `capacity` slots is reserved up front.
    pub fn with_capacity_limit(kind: HeapKind, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            kind,
            capacity_limit: Some(capacity),
        }
    }

    /// Returns the configured capacity limit, if any
    pub fn capacity_limit(&self) -> Option<usize> {
        self.capacity_limit
    }

    /// Removes and returns the root, treating an empty heap as an error
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if there is nothing to extract.
    pub fn try_extract_root(&mut self) -> Result<KeyedItem<K, V>, HeapError> {
        self.extract_root().ok_or(HeapError::EmptyHeap)
    }

    /// Inserts every item from `items` in order
    ///
    /// Stops at the first failed insert. Items inserted before the failure stay
    /// in the heap, the rejected item comes back inside the error, and the
    /// rest of the iterator is left unconsumed.
    pub fn try_extend<I>(&mut self, items: I) -> Result<(), InsertError<K, V>>
    where
        I: IntoIterator<Item = KeyedItem<K, V>>,
    {
        for item in items {
            self.insert(item)?;
        }
        Ok(())
    }

    /// Removes every item
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over resident items in slot order (not sorted order)
    pub fn iter(&self) -> std::slice::Iter<'_, KeyedItem<K, V>> {
        self.data.iter()
    }

    /// Consumes the heap, returning all items in root-first order
    ///
    /// Ascending for a min-heap, descending for a max-heap. The returned items
    /// are detached.
    pub fn into_sorted_vec(mut self) -> Vec<KeyedItem<K, V>> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.extract_root() {
            sorted.push(item);
        }
        sorted
    }

    /// Checks the back-index and heap-order invariants over every slot
    ///
    /// # Errors
    /// Returns the first [`InvariantViolation`] found, scanning slots in order.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let len = self.data.len();
        for (slot, item) in self.data.iter().enumerate() {
            if item.index() != Some(slot) {
                return Err(InvariantViolation::IndexMismatch {
                    slot,
                    recorded: item.index(),
                });
            }
            for child in [2 * slot + 1, 2 * slot + 2] {
                if child < len && self.kind.prefers(self.data[child].key(), item.key()) {
                    return Err(InvariantViolation::HeapOrder {
                        parent: slot,
                        child,
                    });
                }
            }
        }
        Ok(())
    }

    /// Exchanges two slots and rewrites both back-indices
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.data[a].set_index(Some(a));
        self.data[b].set_index(Some(b));
    }

    /// Move item at index up while it is preferred over its parent
    ///
    /// Returns the slot the item stops in.
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self
                .kind
                .prefers(self.data[index].key(), self.data[parent].key())
            {
                break;
            }
            self.swap_slots(index, parent);
            index = parent;
        }
        index
    }

    /// Move item at index down while a child is preferred over it
    ///
    /// When both children qualify, the preferred of the two is promoted so the
    /// heap property also holds between the new parent and its other child.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let best = if right < len
                && self
                    .kind
                    .prefers(self.data[right].key(), self.data[left].key())
            {
                right
            } else {
                left
            };

            if !self
                .kind
                .prefers(self.data[best].key(), self.data[index].key())
            {
                break;
            }
            self.swap_slots(index, best);
            index = best;
        }
    }
}

impl<K: Ord, V> Default for BinaryHeap<K, V> {
    fn default() -> Self {
        <Self as Heap<K, V>>::new(HeapKind::default())
    }
}

impl<'a, K, V> IntoIterator for &'a BinaryHeap<K, V> {
    type Item = &'a KeyedItem<K, V>;
    type IntoIter = std::slice::Iter<'a, KeyedItem<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

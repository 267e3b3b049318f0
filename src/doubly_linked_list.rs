//! Doubly linked list dictionary
//!
//! An unsorted doubly linked list. Compared with
//! [`ListDictionary`](crate::linked_list::ListDictionary), each node also links
//! back to its predecessor, which makes `delete` O(1): the neighbors of the
//! removed node are known without walking the list.
//!
//! # Time Complexity
//!
//! | Operation                  | Complexity |
//! |----------------------------|------------|
//! | `insert`                   | O(1)       |
//! | `delete`                   | O(1)       |
//! | `search`                   | O(n)       |
//! | `min` / `max`              | O(n)       |
//! | `predecessor`/`successor`  | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use keyed_collections::{Dictionary, KeyedItem};
//! use keyed_collections::doubly_linked_list::DoublyLinkedDictionary;
//!
//! let mut dict = DoublyLinkedDictionary::new();
//! let a = dict.insert(KeyedItem::new("a", 1));
//! let b = dict.insert(KeyedItem::new("b", 2));
//!
//! assert_eq!(dict.successor(&a), Some(b));
//! assert_eq!(dict.delete(&a).map(|item| item.into_value()), Some(1));
//! assert_eq!(dict.min(), Some(b));
//! ```

use slotmap::{new_key_type, SlotMap};

use crate::keyed_item::KeyedItem;
use crate::linked_list::scan;
use crate::traits::{Dictionary, Handle};

new_key_type! {
    /// Handle to an item in a [`DoublyLinkedDictionary`]
    pub struct DoublyLinkedHandle;
}

impl Handle for DoublyLinkedHandle {}

#[derive(Debug)]
struct DoublyLinkedNode<K, V> {
    item: KeyedItem<K, V>,
    prev: Option<DoublyLinkedHandle>,
    next: Option<DoublyLinkedHandle>,
}

/// A dictionary backed by an unsorted doubly linked list
#[derive(Debug)]
pub struct DoublyLinkedDictionary<K, V> {
    nodes: SlotMap<DoublyLinkedHandle, DoublyLinkedNode<K, V>>,
    head: Option<DoublyLinkedHandle>,
    tail: Option<DoublyLinkedHandle>,
}

impl<K: Ord, V> DoublyLinkedDictionary<K, V> {
    /// Walks the list from the head
    fn walk(&self) -> impl Iterator<Item = (DoublyLinkedHandle, &KeyedItem<K, V>)> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let handle = cursor?;
            let node = &self.nodes[handle];
            cursor = node.next;
            Some((handle, &node.item))
        })
    }

    /// Iterates from the most recently inserted item to the oldest
    pub fn iter(&self) -> impl Iterator<Item = &KeyedItem<K, V>> + '_ {
        self.walk().map(|(_, item)| item)
    }

    /// Iterates from the oldest item to the most recently inserted one
    pub fn iter_rev(&self) -> impl Iterator<Item = &KeyedItem<K, V>> + '_ {
        let mut cursor = self.tail;
        std::iter::from_fn(move || {
            let node = &self.nodes[cursor?];
            cursor = node.prev;
            Some(&node.item)
        })
    }
}

impl<K: Ord, V> Dictionary<K, V> for DoublyLinkedDictionary<K, V> {
    type Handle = DoublyLinkedHandle;

    fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn get(&self, handle: &DoublyLinkedHandle) -> Option<&KeyedItem<K, V>> {
        self.nodes.get(*handle).map(|node| &node.item)
    }

    fn search(&self, key: &K) -> Option<DoublyLinkedHandle> {
        self.walk()
            .find(|(_, item)| item.key() == key)
            .map(|(handle, _)| handle)
    }

    fn insert(&mut self, item: KeyedItem<K, V>) -> DoublyLinkedHandle {
        let next = self.head;
        let handle = self.nodes.insert(DoublyLinkedNode {
            item,
            prev: None,
            next,
        });

        match next {
            Some(old_head) => self.nodes[old_head].prev = Some(handle),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
        handle
    }

    fn delete(&mut self, handle: &DoublyLinkedHandle) -> Option<KeyedItem<K, V>> {
        let node = self.nodes.remove(*handle)?;

        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => self.tail = node.prev,
        }

        Some(node.item)
    }

    fn min(&self) -> Option<DoublyLinkedHandle> {
        scan::min(self.walk())
    }

    fn max(&self) -> Option<DoublyLinkedHandle> {
        scan::max(self.walk())
    }

    fn predecessor(&self, handle: &DoublyLinkedHandle) -> Option<DoublyLinkedHandle> {
        let key = self.get(handle)?.key();
        scan::predecessor(self.walk(), key, *handle)
    }

    fn successor(&self, handle: &DoublyLinkedHandle) -> Option<DoublyLinkedHandle> {
        let key = self.get(handle)?.key();
        scan::successor(self.walk(), key, *handle)
    }
}

impl<K: Ord, V> Default for DoublyLinkedDictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

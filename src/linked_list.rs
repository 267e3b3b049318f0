//! Singly linked list dictionary
//!
//! The simplest [`Dictionary`] backing: an unsorted singly linked list. New
//! items are pushed at the head, so insertion is O(1), while every key-order
//! query walks the whole list.
//!
//! Nodes live in a [`SlotMap`] arena and links are generational keys, so a
//! handle to a deleted item is detected instead of aliasing a reused slot.
//!
//! # Time Complexity
//!
//! | Operation                  | Complexity |
//! |----------------------------|------------|
//! | `insert`                   | O(1)       |
//! | `search`                   | O(n)       |
//! | `delete`                   | O(n)       |
//! | `min` / `max`              | O(n)       |
//! | `predecessor`/`successor`  | O(n)       |
//!
//! # Equal keys
//!
//! Items with equal keys are ordered among themselves by handle, so walking a
//! list with `successor` from `min` visits every item exactly once.

use slotmap::{new_key_type, SlotMap};

use crate::keyed_item::KeyedItem;
use crate::traits::{Dictionary, Handle};

new_key_type! {
    /// Handle to an item in a [`ListDictionary`]
    pub struct ListHandle;
}

impl Handle for ListHandle {}

#[derive(Debug)]
struct ListNode<K, V> {
    item: KeyedItem<K, V>,
    next: Option<ListHandle>,
}

/// A dictionary backed by an unsorted singly linked list
#[derive(Debug)]
pub struct ListDictionary<K, V> {
    nodes: SlotMap<ListHandle, ListNode<K, V>>,
    head: Option<ListHandle>,
}

impl<K: Ord, V> ListDictionary<K, V> {
    /// Walks the list from the head
    fn walk(&self) -> impl Iterator<Item = (ListHandle, &KeyedItem<K, V>)> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let handle = cursor?;
            let node = &self.nodes[handle];
            cursor = node.next;
            Some((handle, &node.item))
        })
    }
}

impl<K: Ord, V> Dictionary<K, V> for ListDictionary<K, V> {
    type Handle = ListHandle;

    fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
        }
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn get(&self, handle: &ListHandle) -> Option<&KeyedItem<K, V>> {
        self.nodes.get(*handle).map(|node| &node.item)
    }

    fn search(&self, key: &K) -> Option<ListHandle> {
        self.walk()
            .find(|(_, item)| item.key() == key)
            .map(|(handle, _)| handle)
    }

    fn insert(&mut self, item: KeyedItem<K, V>) -> ListHandle {
        let next = self.head;
        let handle = self.nodes.insert(ListNode { item, next });
        self.head = Some(handle);
        handle
    }

    fn delete(&mut self, handle: &ListHandle) -> Option<KeyedItem<K, V>> {
        let target = *handle;
        let next = self.nodes.get(target)?.next;

        if self.head == Some(target) {
            self.head = next;
        } else {
            // Find the node linking to the target
            let mut cursor = self.head;
            while let Some(current) = cursor {
                let node = &mut self.nodes[current];
                if node.next == Some(target) {
                    node.next = next;
                    break;
                }
                cursor = node.next;
            }
        }

        self.nodes.remove(target).map(|node| node.item)
    }

    fn min(&self) -> Option<ListHandle> {
        scan::min(self.walk())
    }

    fn max(&self) -> Option<ListHandle> {
        scan::max(self.walk())
    }

    fn predecessor(&self, handle: &ListHandle) -> Option<ListHandle> {
        let key = self.get(handle)?.key();
        scan::predecessor(self.walk(), key, *handle)
    }

    fn successor(&self, handle: &ListHandle) -> Option<ListHandle> {
        let key = self.get(handle)?.key();
        scan::successor(self.walk(), key, *handle)
    }
}

impl<K: Ord, V> Default for ListDictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Key-order queries over an unsorted sequence of `(handle, item)` pairs
///
/// Positions are compared as `(key, handle)` so that equal keys still have a
/// strict order.
pub(crate) mod scan {
    use crate::keyed_item::KeyedItem;

    pub(crate) fn min<'a, K, V, H, I>(entries: I) -> Option<H>
    where
        K: Ord + 'a,
        V: 'a,
        H: Ord + Copy,
        I: Iterator<Item = (H, &'a KeyedItem<K, V>)>,
    {
        entries
            .min_by(|(ha, a), (hb, b)| (a.key(), ha).cmp(&(b.key(), hb)))
            .map(|(handle, _)| handle)
    }

    pub(crate) fn max<'a, K, V, H, I>(entries: I) -> Option<H>
    where
        K: Ord + 'a,
        V: 'a,
        H: Ord + Copy,
        I: Iterator<Item = (H, &'a KeyedItem<K, V>)>,
    {
        entries
            .max_by(|(ha, a), (hb, b)| (a.key(), ha).cmp(&(b.key(), hb)))
            .map(|(handle, _)| handle)
    }

    pub(crate) fn predecessor<'a, K, V, H, I>(entries: I, key: &K, handle: H) -> Option<H>
    where
        K: Ord + 'a,
        V: 'a,
        H: Ord + Copy,
        I: Iterator<Item = (H, &'a KeyedItem<K, V>)>,
    {
        max(entries.filter(|(h, item)| (item.key(), *h) < (key, handle)))
    }

    pub(crate) fn successor<'a, K, V, H, I>(entries: I, key: &K, handle: H) -> Option<H>
    where
        K: Ord + 'a,
        V: 'a,
        H: Ord + Copy,
        I: Iterator<Item = (H, &'a KeyedItem<K, V>)>,
    {
        min(entries.filter(|(h, item)| (item.key(), *h) > (key, handle)))
    }
}

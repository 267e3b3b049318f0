//! Binary search tree dictionary
//!
//! An unbalanced binary search tree with parent links. Keys in a node's left
//! subtree are strictly smaller than the node's key; keys in its right subtree
//! are greater or equal, so duplicates always descend to the right.
//!
//! No rebalancing is performed: the height `h` is O(log n) for random insertion
//! orders and O(n) for sorted ones.
//!
//! # Time Complexity
//!
//! | Operation                  | Complexity |
//! |----------------------------|------------|
//! | `insert`                   | O(h)       |
//! | `search`                   | O(h)       |
//! | `delete`                   | O(h)       |
//! | `min` / `max`              | O(h)       |
//! | `predecessor`/`successor`  | O(h)       |
//!
//! # Deletion
//!
//! Deleting a node with two children splices in its successor (the minimum of
//! its right subtree) using a transplant step that replaces one subtree with
//! another. Handles of all other nodes stay valid because nodes are relinked,
//! never moved between arena slots.

use slotmap::{new_key_type, SlotMap};

use crate::keyed_item::KeyedItem;
use crate::traits::{Dictionary, Handle};

new_key_type! {
    /// Handle to an item in a [`BstDictionary`]
    pub struct BstHandle;
}

impl Handle for BstHandle {}

#[derive(Debug)]
struct BstNode<K, V> {
    item: KeyedItem<K, V>,
    parent: Option<BstHandle>,
    left: Option<BstHandle>,
    right: Option<BstHandle>,
}

/// A dictionary backed by an unbalanced binary search tree
#[derive(Debug)]
pub struct BstDictionary<K, V> {
    nodes: SlotMap<BstHandle, BstNode<K, V>>,
    root: Option<BstHandle>,
}

impl<K: Ord, V> BstDictionary<K, V> {
    /// Returns the leftmost node of the subtree rooted at `node`
    fn subtree_min(&self, mut node: BstHandle) -> BstHandle {
        while let Some(left) = self.nodes[node].left {
            node = left;
        }
        node
    }

    /// Returns the rightmost node of the subtree rooted at `node`
    fn subtree_max(&self, mut node: BstHandle) -> BstHandle {
        while let Some(right) = self.nodes[node].right {
            node = right;
        }
        node
    }

    /// Replaces the subtree rooted at `old` with the subtree rooted at `new`
    ///
    /// Only the link from `old`'s parent and `new`'s parent pointer change;
    /// `old`'s own child links are left for the caller to fix.
    fn transplant(&mut self, old: BstHandle, new: Option<BstHandle>) {
        let parent = self.nodes[old].parent;
        match parent {
            None => self.root = new,
            Some(p) => {
                let parent_node = &mut self.nodes[p];
                if parent_node.left == Some(old) {
                    parent_node.left = new;
                } else {
                    parent_node.right = new;
                }
            }
        }
        if let Some(n) = new {
            self.nodes[n].parent = parent;
        }
    }

    /// Returns the height of the tree (0 when empty)
    ///
    /// Walks the tree with an explicit stack, so degenerate trees built from
    /// sorted input do not exhaust the call stack.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(BstHandle, usize)> = Vec::new();
        stack.extend(self.root.map(|root| (root, 1)));

        while let Some((handle, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[handle];
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }
        height
    }

    /// Iterates over items in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = &KeyedItem<K, V>> + '_ {
        let mut cursor = self.min();
        std::iter::from_fn(move || {
            let handle = cursor?;
            cursor = self.successor(&handle);
            Some(&self.nodes[handle].item)
        })
    }
}

impl<K: Ord, V> Dictionary<K, V> for BstDictionary<K, V> {
    type Handle = BstHandle;

    fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
        }
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn get(&self, handle: &BstHandle) -> Option<&KeyedItem<K, V>> {
        self.nodes.get(*handle).map(|node| &node.item)
    }

    fn search(&self, key: &K) -> Option<BstHandle> {
        let mut cursor = self.root;
        while let Some(handle) = cursor {
            let node = &self.nodes[handle];
            cursor = match key.cmp(node.item.key()) {
                std::cmp::Ordering::Equal => return Some(handle),
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Greater => node.right,
            };
        }
        None
    }

    fn insert(&mut self, item: KeyedItem<K, V>) -> BstHandle {
        let mut parent = None;
        let mut go_left = false;
        let mut cursor = self.root;

        while let Some(handle) = cursor {
            let node = &self.nodes[handle];
            parent = Some(handle);
            go_left = item.key() < node.item.key();
            cursor = if go_left { node.left } else { node.right };
        }

        let handle = self.nodes.insert(BstNode {
            item,
            parent,
            left: None,
            right: None,
        });

        match parent {
            None => self.root = Some(handle),
            Some(p) if go_left => self.nodes[p].left = Some(handle),
            Some(p) => self.nodes[p].right = Some(handle),
        }
        handle
    }

    fn delete(&mut self, handle: &BstHandle) -> Option<KeyedItem<K, V>> {
        let target = *handle;
        let (left, right) = {
            let node = self.nodes.get(target)?;
            (node.left, node.right)
        };

        match (left, right) {
            (None, _) => self.transplant(target, right),
            (_, None) => self.transplant(target, left),
            (Some(left), Some(right)) => {
                let successor = self.subtree_min(right);
                if self.nodes[successor].parent != Some(target) {
                    let successor_right = self.nodes[successor].right;
                    self.transplant(successor, successor_right);
                    self.nodes[successor].right = Some(right);
                    self.nodes[right].parent = Some(successor);
                }
                self.transplant(target, Some(successor));
                self.nodes[successor].left = Some(left);
                self.nodes[left].parent = Some(successor);
            }
        }

        self.nodes.remove(target).map(|node| node.item)
    }

    fn min(&self) -> Option<BstHandle> {
        self.root.map(|root| self.subtree_min(root))
    }

    fn max(&self) -> Option<BstHandle> {
        self.root.map(|root| self.subtree_max(root))
    }

    fn predecessor(&self, handle: &BstHandle) -> Option<BstHandle> {
        let node = self.nodes.get(*handle)?;
        if let Some(left) = node.left {
            return Some(self.subtree_max(left));
        }

        // Climb until we leave a right subtree
        let mut child = *handle;
        let mut parent = node.parent;
        while let Some(p) = parent {
            if self.nodes[p].left != Some(child) {
                break;
            }
            child = p;
            parent = self.nodes[p].parent;
        }
        parent
    }

    fn successor(&self, handle: &BstHandle) -> Option<BstHandle> {
        let node = self.nodes.get(*handle)?;
        if let Some(right) = node.right {
            return Some(self.subtree_min(right));
        }

        // Climb until we leave a left subtree
        let mut child = *handle;
        let mut parent = node.parent;
        while let Some(p) = parent {
            if self.nodes[p].right != Some(child) {
                break;
            }
            child = p;
            parent = self.nodes[p].parent;
        }
        parent
    }
}

impl<K: Ord, V> Default for BstDictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

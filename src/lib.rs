//! Keyed Collections for Rust
//!
//! This crate provides classic abstract data types built around a shared
//! [`KeyedItem`] record (an ordering key plus payload):
//!
//! # Features
//!
//! - **Binary Heap**: array-backed, min or max ordering chosen at construction,
//!   O(log n) insert and extract-root, O(1) find-root. Every resident item
//!   carries its own slot index, kept exact across every swap.
//! - **Dictionary** trait: search, insert, delete by handle, min/max and
//!   predecessor/successor, with three backings:
//!   - **Linked List**: unsorted, O(1) insert
//!   - **Doubly Linked List**: unsorted, O(1) insert and delete
//!   - **Binary Search Tree**: unbalanced, O(h) for every operation
//!
//! # Example
//!
//! ```rust
//! use keyed_collections::{Heap, HeapKind, KeyedItem};
//! use keyed_collections::binary_heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new(HeapKind::Max);
//! for key in [5, 3, 8, 1, 9, 2] {
//!     heap.insert(KeyedItem::new(key, ())).unwrap();
//! }
//!
//! let order: Vec<i32> = heap.into_sorted_vec().iter().map(|item| *item.key()).collect();
//! assert_eq!(order, vec![9, 8, 5, 3, 2, 1]);
//! ```

pub mod binary_heap;
pub mod binary_search_tree;
pub mod doubly_linked_list;
pub mod keyed_item;
pub mod linked_list;
pub mod traits;

// Re-export the main types for convenience
pub use keyed_item::KeyedItem;
pub use traits::{
    Dictionary, Handle, Heap, HeapError, HeapKind, InsertError, InvariantViolation,
};

//! Generic tests for Heap implementations
//!
//! These tests are written against the [`Heap`] trait only and run for both
//! orderings, so any implementation can be plugged in.

use keyed_collections::binary_heap::BinaryHeap;
use keyed_collections::{Heap, HeapKind, KeyedItem};

fn root_key<H: Heap<i32, V>, V>(heap: &H) -> Option<i32> {
    heap.find_root().map(|item| *item.key())
}

fn drain_keys<H: Heap<i32, V>, V>(heap: &mut H) -> Vec<i32> {
    std::iter::from_fn(|| heap.extract_root())
        .map(|item| *item.key())
        .collect()
}

/// Empty heap behaves correctly
fn test_empty_heap<H: Heap<i32, String>>(kind: HeapKind) {
    let mut heap = H::new(kind);
    assert_eq!(heap.kind(), kind);
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert!(heap.find_root().is_none());
    assert!(heap.extract_root().is_none());
    // Still empty and usable afterwards
    assert!(heap.extract_root().is_none());
    heap.insert(KeyedItem::new(1, "one".to_string())).unwrap();
    assert_eq!(heap.len(), 1);
}

/// Basic insert and extract in both directions
fn test_basic_operations<H: Heap<i32, &'static str>>() {
    let mut min = H::new(HeapKind::Min);
    let mut max = H::new(HeapKind::Max);
    for (key, name) in [(5, "five"), (1, "one"), (10, "ten"), (3, "three")] {
        min.insert(KeyedItem::new(key, name)).unwrap();
        max.insert(KeyedItem::new(key, name)).unwrap();
    }

    assert_eq!(min.len(), 4);
    assert_eq!(min.find_root().map(|item| *item.value()), Some("one"));
    assert_eq!(max.find_root().map(|item| *item.value()), Some("ten"));

    assert_eq!(drain_keys(&mut min), vec![1, 3, 5, 10]);
    assert_eq!(drain_keys(&mut max), vec![10, 5, 3, 1]);
    assert!(min.is_empty());
    assert!(max.is_empty());
}

/// Sorted extraction of a fixed sequence
fn test_sorted_extraction<H: Heap<i32, ()>>() {
    let input = [5, 3, 8, 1, 9, 2];

    let mut min = H::new(HeapKind::Min);
    let mut max = H::new(HeapKind::Max);
    for key in input {
        min.insert(KeyedItem::new(key, ())).unwrap();
        max.insert(KeyedItem::new(key, ())).unwrap();
    }

    assert_eq!(drain_keys(&mut min), vec![1, 2, 3, 5, 8, 9]);
    assert_eq!(drain_keys(&mut max), vec![9, 8, 5, 3, 2, 1]);
}

/// Extracted items are detached and carry their payload
fn test_extracted_items_are_detached<H: Heap<i32, String>>(kind: HeapKind) {
    let mut heap = H::new(kind);
    for key in 0..10 {
        heap.insert(KeyedItem::new(key, format!("item-{key}"))).unwrap();
    }

    while let Some(item) = heap.extract_root() {
        assert_eq!(item.index(), None);
        let (key, value) = item.into_parts();
        assert_eq!(value, format!("item-{key}"));
    }
}

/// Root lookup never changes the heap
fn test_find_root_is_idempotent<H: Heap<i32, i32>>(kind: HeapKind) {
    let mut heap = H::new(kind);
    for key in [4, 8, 15, 16, 23, 42] {
        heap.insert(KeyedItem::new(key, -key)).unwrap();
    }

    let first = root_key(&heap);
    for _ in 0..5 {
        assert_eq!(root_key(&heap), first);
        assert_eq!(heap.len(), 6);
    }
}

/// Duplicate keys are all returned
fn test_duplicate_keys<H: Heap<i32, &'static str>>() {
    let mut heap = H::new(HeapKind::Min);
    heap.insert(KeyedItem::new(5, "a")).unwrap();
    heap.insert(KeyedItem::new(5, "b")).unwrap();
    heap.insert(KeyedItem::new(5, "c")).unwrap();
    heap.insert(KeyedItem::new(1, "d")).unwrap();

    assert_eq!(heap.extract_root().map(|item| item.into_parts()), Some((1, "d")));

    let mut seen = std::collections::HashSet::new();
    for _ in 0..3 {
        let (key, value) = heap.extract_root().unwrap().into_parts();
        assert_eq!(key, 5);
        assert!(seen.insert(value));
    }
    assert_eq!(seen.len(), 3);
}

/// Interleaved inserts and extracts keep the root correct
fn test_interleaved<H: Heap<i32, i32>>(kind: HeapKind) {
    let mut heap = H::new(kind);
    let mut model: Vec<i32> = Vec::new();

    for i in 0..200 {
        let key = (i * 37) % 101;
        heap.insert(KeyedItem::new(key, i)).unwrap();
        model.push(key);

        if i % 3 == 0 {
            let expected = match kind {
                HeapKind::Min => model.iter().copied().min(),
                HeapKind::Max => model.iter().copied().max(),
            };
            let got = heap.extract_root().map(|item| *item.key());
            assert_eq!(got, expected);
            if let Some(key) = got {
                let pos = model.iter().position(|&k| k == key).unwrap();
                model.swap_remove(pos);
            }
        }
        assert_eq!(heap.len(), model.len());
    }
}

#[test]
fn test_binary_heap_empty() {
    test_empty_heap::<BinaryHeap<i32, String>>(HeapKind::Min);
    test_empty_heap::<BinaryHeap<i32, String>>(HeapKind::Max);
}

#[test]
fn test_binary_heap_basic_operations() {
    test_basic_operations::<BinaryHeap<i32, &'static str>>();
}

#[test]
fn test_binary_heap_sorted_extraction() {
    test_sorted_extraction::<BinaryHeap<i32, ()>>();
}

#[test]
fn test_binary_heap_extracted_items_are_detached() {
    test_extracted_items_are_detached::<BinaryHeap<i32, String>>(HeapKind::Min);
    test_extracted_items_are_detached::<BinaryHeap<i32, String>>(HeapKind::Max);
}

#[test]
fn test_binary_heap_find_root_is_idempotent() {
    test_find_root_is_idempotent::<BinaryHeap<i32, i32>>(HeapKind::Min);
    test_find_root_is_idempotent::<BinaryHeap<i32, i32>>(HeapKind::Max);
}

#[test]
fn test_binary_heap_duplicate_keys() {
    test_duplicate_keys::<BinaryHeap<i32, &'static str>>();
}

#[test]
fn test_binary_heap_interleaved() {
    test_interleaved::<BinaryHeap<i32, i32>>(HeapKind::Min);
    test_interleaved::<BinaryHeap<i32, i32>>(HeapKind::Max);
}

//! Stress tests with large deterministic workloads
//!
//! These push each structure well past any small-size special casing
//! (inline growth, single-node trees, one-level heaps) using a fixed
//! linear congruential generator so failures reproduce exactly.

use rust_classic_collections::{
    sort, Array, BoundedMaxHeap, DoublyLinkedList, Heap, MaxHeap, SearchTree,
};

const N: usize = 10_000;

/// Deterministic pseudo-random stream (Numerical Recipes LCG constants).
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg(seed)
    }

    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn next_i32(&mut self) -> i32 {
        self.next() as i32
    }
}

#[test]
fn test_array_growth_and_shrink() {
    let mut arr = Array::new();
    for i in 0..N {
        arr.push_back(i);
        assert_eq!(arr.len(), i + 1);
    }
    assert_eq!(arr.front(), Some(&0));
    assert_eq!(arr.back(), Some(&(N - 1)));

    for i in (0..N).rev() {
        assert_eq!(arr.pop_back(), Some(i));
    }
    assert!(arr.is_empty());
    assert_eq!(arr.pop_back(), None);
}

#[test]
fn test_array_interior_edits_at_scale() {
    let mut arr: Array<usize> = (0..N).collect();
    // Remove every element at the front half boundary, then reinsert.
    for _ in 0..1000 {
        let v = arr.remove(N / 2);
        arr.insert(v, N / 2);
    }
    assert_eq!(arr.len(), N);
    for i in 0..N {
        assert_eq!(arr[i], i);
    }
}

#[test]
fn test_heap_sorts_random_stream() {
    let mut rng = Lcg::new(0x5eed);
    let mut heap = MaxHeap::new();
    for _ in 0..N {
        heap.push(rng.next_i32());
    }
    assert_eq!(heap.len(), N);

    let mut prev = i32::MAX;
    let mut count = 0;
    while let Some(v) = heap.pop_max() {
        assert!(v <= prev);
        prev = v;
        count += 1;
    }
    assert_eq!(count, N);
}

#[test]
fn test_heap_bulk_build_matches_incremental() {
    let mut rng = Lcg::new(42);
    let values: Array<i32> = (0..N).map(|_| rng.next_i32()).collect();

    let mut incremental = MaxHeap::new();
    for v in values.iter() {
        incremental.push(*v);
    }
    let mut bulk = MaxHeap::from(values);

    while let Some(a) = bulk.pop_max() {
        assert_eq!(Some(a), incremental.pop_max());
    }
    assert!(incremental.is_empty());
}

#[test]
fn test_bounded_heap_top_k_of_large_stream() {
    // 0..=1000 shuffled through the generator's ordering; bound 200 keeps
    // exactly 0..200.
    let mut heap = BoundedMaxHeap::new(200);
    let mut values: Vec<i32> = (0..=1000).collect();
    let mut rng = Lcg::new(7);
    for i in (1..values.len()).rev() {
        values.swap(i, (rng.next() as usize) % (i + 1));
    }

    for v in values {
        heap.push(v);
    }
    assert_eq!(heap.len(), 200);
    assert_eq!(heap.max(), Some(&199));

    let mut retained: Vec<i32> = Vec::new();
    while let Some(v) = heap.pop_max() {
        retained.push(v);
    }
    retained.reverse();
    let expected: Vec<i32> = (0..200).collect();
    assert_eq!(retained, expected);
}

#[test]
fn test_dlist_round_trip_at_scale() {
    let mut list = DoublyLinkedList::new();
    for i in 0..=1000 {
        list.push_back(i);
    }
    for _ in 0..100 {
        list.pop_front();
        list.pop_back();
    }
    assert_eq!(list.len(), 801);
    assert_eq!(list.front(), Some(&100));
    assert_eq!(list.back(), Some(&900));

    assert!(list.iter().copied().eq(100..=900));
}

#[test]
fn test_dlist_repeated_splice() {
    let mut acc = DoublyLinkedList::new();
    for chunk in 0..100 {
        let mut part = DoublyLinkedList::new();
        for i in 0..100 {
            part.push_back(chunk * 100 + i);
        }
        acc.append(&mut part);
        assert!(part.is_empty());
    }
    assert_eq!(acc.len(), N);
    let mut expect = 0;
    for v in acc.iter() {
        assert_eq!(*v, expect);
        expect += 1;
    }
}

#[test]
fn test_tree_insert_remove_churn() {
    let mut rng = Lcg::new(0xbadd);
    let mut tree = SearchTree::new();
    let mut live = std::collections::BTreeSet::new();

    for _ in 0..N {
        let v = rng.next_i32() % 2000;
        if rng.next() % 3 == 0 {
            assert_eq!(tree.remove(&v), live.remove(&v));
        } else {
            assert_eq!(tree.insert(v), live.insert(v));
        }
    }

    assert_eq!(tree.len(), live.len());
    assert!(tree.iter().eq(live.iter()));
    assert_eq!(tree.min(), live.iter().next());
    assert_eq!(tree.max(), live.iter().next_back());
}

#[test]
fn test_tree_sequential_insert_is_deep_but_correct() {
    // Worst case shape: ascending inserts degenerate to a right spine.
    let mut tree = SearchTree::new();
    for i in 0..2000 {
        tree.insert(i);
    }
    assert_eq!(tree.len(), 2000);
    assert_eq!(tree.height(), 2000);
    assert!(tree.iter().copied().eq(0..2000));
    // Iterative clear must not overflow the stack on the deep spine.
    tree.clear();
    assert!(tree.is_empty());
}

#[test]
fn test_quick_sort_adversarial_inputs() {
    let cases: [Array<i32>; 4] = [
        (0..N as i32).collect(),
        (0..N as i32).rev().collect(),
        std::iter::repeat(7).take(N).collect(),
        (0..N as i32).map(|i| i % 10).collect(),
    ];
    for case in cases {
        let mut expected: Vec<i32> = case.iter().copied().collect();
        expected.sort();
        let mut arr = case;
        sort::quick_sort(&mut arr);
        assert_eq!(arr.as_slice(), expected.as_slice());
    }
}

#[test]
fn test_merge_sort_random_at_scale() {
    let mut rng = Lcg::new(0xfeed);
    let mut arr: Array<i32> = (0..N).map(|_| rng.next_i32()).collect();
    let mut expected: Vec<i32> = arr.iter().copied().collect();
    expected.sort();

    sort::merge_sort(&mut arr);
    assert_eq!(arr.as_slice(), expected.as_slice());
}

//! Bounded max-heap retaining the N smallest elements
//!
//! [`BoundedMaxHeap`] wraps a [`MaxHeap`] with a capacity bound. Below the
//! bound every push is admitted. At the bound, a value no greater than the
//! current maximum replaces that maximum (evict-then-insert); a value greater
//! than the maximum is rejected without touching the heap. The net effect is a
//! running top-K: after any push sequence the heap holds the K smallest values
//! offered so far, with the largest of them at the root ready for the next
//! eviction decision.
//!
//! # Example
//!
//! ```rust
//! use rust_classic_collections::{BoundedMaxHeap, Heap};
//!
//! let mut heap = BoundedMaxHeap::new(3);
//! for v in [9, 4, 7, 1, 8, 2] {
//!     heap.push(v);
//! }
//!
//! // The three smallest survive.
//! assert_eq!(heap.len(), 3);
//! assert_eq!(heap.max(), Some(&4));
//! ```

use crate::array::Array;
use crate::entry::KeyValue;
use crate::heap::MaxHeap;
use crate::traits::Heap;
use crate::view::ArrayView;

/// A max-heap that never grows past a fixed bound, keeping the smallest
/// elements seen so far.
#[derive(Debug, Clone)]
pub struct BoundedMaxHeap<T: Ord> {
    bound: usize,
    heap: MaxHeap<T>,
}

impl<T: Ord> BoundedMaxHeap<T> {
    /// Creates an empty heap that will retain at most `bound` elements.
    pub const fn new(bound: usize) -> Self {
        Self {
            bound,
            heap: MaxHeap::new(),
        }
    }

    /// Returns the capacity bound.
    pub fn max_size(&self) -> usize {
        self.bound
    }

    /// Changes the bound. Shrinking below the current size evicts the
    /// largest elements until the heap fits.
    pub fn set_max_size(&mut self, bound: usize) {
        while self.heap.len() > bound {
            let _ = self.heap.pop_max();
        }
        self.bound = bound;
    }

    /// The retained elements in backing-array order (root first).
    pub fn as_slice(&self) -> &[T] {
        self.heap.as_slice()
    }

    /// Consumes the wrapper, returning the inner unbounded heap.
    pub fn into_inner(self) -> MaxHeap<T> {
        self.heap
    }
}

impl<T: Ord + Clone> BoundedMaxHeap<T> {
    /// Bulk-builds from a view, then evicts down to `bound`.
    pub fn with_contents(bound: usize, view: ArrayView<'_, T>) -> Self {
        let mut heap = Self {
            bound,
            heap: MaxHeap::from_view(view),
        };
        heap.set_max_size(bound);
        heap
    }
}

impl<T: Ord + Clone> From<(usize, &Array<T>)> for BoundedMaxHeap<T> {
    fn from((bound, arr): (usize, &Array<T>)) -> Self {
        Self::with_contents(bound, arr.as_view())
    }
}

impl<T: Ord> Heap<T> for BoundedMaxHeap<T> {
    /// Admission policy: under the bound, always admit. At the bound, admit
    /// iff `value` does not exceed the current maximum, evicting that maximum
    /// first. Returns whether the value was admitted.
    fn push(&mut self, value: T) -> bool {
        if self.heap.len() < self.bound {
            return self.heap.push(value);
        }

        match self.heap.max() {
            Some(max) if value > *max => false,
            // Bound zero admits nothing.
            None => false,
            Some(_) => {
                let _ = self.heap.pop_max();
                self.heap.push(value)
            }
        }
    }

    fn pop_max(&mut self) -> Option<T> {
        self.heap.pop_max()
    }

    fn max(&self) -> Option<&T> {
        self.heap.max()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<K: Ord, V> BoundedMaxHeap<KeyValue<K, V>> {
    /// Wraps `key`/`value` into a [`KeyValue`] and offers it; admission
    /// compares keys only.
    pub fn push_pair(&mut self, key: K, value: V) -> bool {
        self.push(KeyValue::new(key, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admits_below_bound() {
        let mut heap = BoundedMaxHeap::new(5);
        for v in 0..5 {
            assert!(heap.push(v));
        }
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.max(), Some(&4));
    }

    #[test]
    fn test_rejects_larger_at_bound() {
        let mut heap = BoundedMaxHeap::new(3);
        for v in [1, 2, 3] {
            assert!(heap.push(v));
        }
        assert!(!heap.push(10));
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.max(), Some(&3));
    }

    #[test]
    fn test_replaces_max_with_smaller() {
        let mut heap = BoundedMaxHeap::new(3);
        for v in [5, 6, 7] {
            assert!(heap.push(v));
        }
        assert!(heap.push(1));
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.max(), Some(&6));
    }

    #[test]
    fn test_equal_to_max_is_admitted() {
        let mut heap = BoundedMaxHeap::new(2);
        heap.push(3);
        heap.push(5);
        // Not greater than max, so it replaces the max.
        assert!(heap.push(5));
        assert_eq!(heap.max(), Some(&5));
        assert_eq!(heap.pop_max(), Some(5));
        assert_eq!(heap.pop_max(), Some(3));
    }

    #[test]
    fn test_retains_smallest() {
        let mut heap = BoundedMaxHeap::new(200);
        for v in 0..=1000 {
            heap.push(v);
        }
        assert_eq!(heap.len(), 200);
        assert_eq!(heap.max(), Some(&199));

        let mut out = Vec::new();
        while let Some(v) = heap.pop_max() {
            out.push(v);
        }
        out.reverse();
        assert_eq!(out, (0..200).collect::<Vec<_>>());
    }

    #[test]
    fn test_set_max_size_shrinks_and_grows() {
        let mut heap = BoundedMaxHeap::new(10);
        for v in 0..10 {
            heap.push(v);
        }

        heap.set_max_size(4);
        assert_eq!(heap.len(), 4);
        assert_eq!(heap.max_size(), 4);
        assert_eq!(heap.max(), Some(&3));

        heap.set_max_size(6);
        assert_eq!(heap.max_size(), 6);
        assert!(heap.push(100));
        assert!(heap.push(101));
        assert_eq!(heap.len(), 6);
        assert!(!heap.push(102));
    }

    #[test]
    fn test_zero_bound_admits_nothing() {
        let mut heap = BoundedMaxHeap::new(0);
        assert!(!heap.push(1));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_with_contents_trims_to_bound() {
        let arr: Array<i32> = (0..100).collect();
        let heap = BoundedMaxHeap::with_contents(10, arr.as_view());
        assert_eq!(heap.len(), 10);
        assert_eq!(heap.max(), Some(&9));
    }

    #[test]
    fn test_keyed_pairs() {
        let mut heap = BoundedMaxHeap::new(2);
        assert!(heap.push_pair(10, "ten"));
        assert!(heap.push_pair(20, "twenty"));
        assert!(!heap.push_pair(30, "thirty"));
        assert!(heap.push_pair(5, "five"));

        let top = heap.pop_max().unwrap();
        assert_eq!((top.key, top.value), (10, "ten"));
        let top = heap.pop_max().unwrap();
        assert_eq!((top.key, top.value), (5, "five"));
    }

    #[test]
    fn test_clear() {
        let mut heap = BoundedMaxHeap::new(3);
        heap.push(1);
        heap.push(2);
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.max_size(), 3);
        assert!(heap.push(9));
    }
}

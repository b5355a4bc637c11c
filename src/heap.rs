//! Binary max-heap over an [`Array`]
//!
//! The classic implicit binary heap: a complete binary tree stored in the
//! backing array with the root at index 0, children of `i` at `2i + 1` and
//! `2i + 2`, and parent at `(i - 1) / 2`. Every parent compares `>=` both of
//! its children.
//!
//! Besides incremental [`push`](crate::traits::Heap::push), a heap can be
//! bulk-built from an array or view in O(n) with bottom-up heapify (sift-down
//! of every index from `len / 2` down to the root).
//!
//! For the keyed variant, store [`KeyValue`] pairs: their ordering compares
//! keys only, so the payload never affects heap shape. See
//! [`MaxHeap::push_pair`].
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `push`       | O(log n)   |
//! | `pop_max`    | O(log n)   |
//! | `max`        | O(1)       |
//! | bulk build   | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use rust_classic_collections::{Heap, MaxHeap};
//!
//! let mut heap = MaxHeap::new();
//! heap.push(3);
//! heap.push(7);
//! heap.push(5);
//!
//! assert_eq!(heap.max(), Some(&7));
//! assert_eq!(heap.pop_max(), Some(7));
//! assert_eq!(heap.pop_max(), Some(5));
//! ```

use crate::array::Array;
use crate::entry::KeyValue;
use crate::traits::Heap;
use crate::view::ArrayView;

/// A binary max-heap backed by an [`Array`].
#[derive(Debug, Clone)]
pub struct MaxHeap<T: Ord> {
    data: Array<T>,
}

impl<T: Ord> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> MaxHeap<T> {
    /// Creates an empty heap.
    pub const fn new() -> Self {
        Self { data: Array::new() }
    }

    /// Creates an empty heap with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Array::with_capacity(capacity),
        }
    }

    /// The heap's elements in backing-array order (root first).
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Consumes the heap, returning the backing array (heap order).
    pub fn into_array(self) -> Array<T> {
        self.data
    }

    /// Move the element at `index` up until its parent is no smaller.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[parent] < self.data[index] {
                self.data.swap(parent, index);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `index` down, swapping with the larger child.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut largest = index;

            if left < len && self.data[left] > self.data[largest] {
                largest = left;
            }
            if right < len && self.data[right] > self.data[largest] {
                largest = right;
            }

            if largest != index {
                self.data.swap(index, largest);
                index = largest;
            } else {
                break;
            }
        }
    }

    fn heapify(&mut self) {
        if self.data.is_empty() {
            return;
        }
        for i in (0..=self.data.len() / 2).rev() {
            self.sift_down(i);
        }
    }
}

impl<T: Ord> Heap<T> for MaxHeap<T> {
    /// Appends the value and sifts it up. Always admits; always `true`.
    fn push(&mut self, value: T) -> bool {
        self.data.push_back(value);
        self.sift_up(self.data.len() - 1);
        true
    }

    fn pop_max(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let result = self.data.pop_back();

        // A one-element heap needs no sift pass.
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        result
    }

    fn max(&self) -> Option<&T> {
        self.data.front()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T: Ord + Clone> MaxHeap<T> {
    /// Bulk-builds a heap from a view in O(n): copy the elements, then
    /// sift-down every index from `len / 2` to the root.
    pub fn from_view(view: ArrayView<'_, T>) -> Self {
        let mut heap = Self {
            data: Array::from_view(view),
        };
        heap.heapify();
        heap
    }
}

impl<T: Ord + Clone> From<&Array<T>> for MaxHeap<T> {
    fn from(arr: &Array<T>) -> Self {
        Self::from_view(arr.as_view())
    }
}

impl<T: Ord> From<Array<T>> for MaxHeap<T> {
    /// Takes ownership of the array and heapifies it in place.
    fn from(arr: Array<T>) -> Self {
        let mut heap = Self { data: arr };
        heap.heapify();
        heap
    }
}

impl<T: Ord> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Array<T>>())
    }
}

impl<K: Ord, V> MaxHeap<KeyValue<K, V>> {
    /// Wraps `key`/`value` into a [`KeyValue`] and pushes it. Heap order
    /// compares keys only.
    pub fn push_pair(&mut self, key: K, value: V) -> bool {
        self.push(KeyValue::new(key, value))
    }
}

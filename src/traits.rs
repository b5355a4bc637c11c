//! Common trait for the heap family
//!
//! [`Heap`] is the seam shared by [`MaxHeap`](crate::heap::MaxHeap) and
//! [`BoundedMaxHeap`](crate::bounded::BoundedMaxHeap). It lets the integration
//! tests exercise both implementations through one set of generic test
//! functions, and lets callers swap a plain heap for a bounded one without
//! touching call sites.
//!
//! `push` reports admission: an unbounded heap accepts everything, a bounded
//! heap may reject at capacity. Rejection is a normal reported outcome, not an
//! error.

/// Max-heap operations shared by the plain and bounded heaps.
pub trait Heap<T: Ord> {
    /// Offers a value to the heap. Returns `true` if it was admitted.
    fn push(&mut self, value: T) -> bool;

    /// Removes and returns the largest element, or `None` if empty.
    fn pop_max(&mut self) -> Option<T>;

    /// Returns the largest element without removing it, or `None` if empty.
    fn max(&self) -> Option<&T>;

    /// Returns the number of elements in the heap.
    fn len(&self) -> usize;

    /// Returns `true` if the heap holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all elements, leaving the heap usable.
    fn clear(&mut self);
}

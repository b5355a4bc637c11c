//! Non-owning windows over an [`Array`]
//!
//! [`ArrayView`] describes a read-only sub-range `[from, to)` of an array.
//! Views can be re-sliced into narrower views; the offsets compose additively,
//! so `arr.view(100, 200).view(0, 50)` covers `arr[100..150]`.
//!
//! The original hazard of a view outliving a resize is handled statically: a
//! view borrows its array for its whole lifetime, so the borrow checker rejects
//! any `push_back`/`insert`/`reserve`/`clear` on the source while a view is
//! alive.
//!
//! [`ArrayViewMut`] is the writable counterpart. It can be split into two
//! disjoint halves with [`ArrayViewMut::split_at`], which is what lets
//! divide-and-conquer algorithms (merge sort, quicksort) recurse over both
//! halves of one array without copying and without aliasing writes.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::array::Array;

/// Read-only view over a contiguous sub-range of an [`Array`].
#[derive(Clone, Copy)]
pub struct ArrayView<'a, T> {
    arr: &'a Array<T>,
    from: usize,
    to: usize,
}

impl<'a, T> ArrayView<'a, T> {
    /// Creates a view over `arr[from..to]`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to` or `to > arr.len()`.
    pub fn new(arr: &'a Array<T>, from: usize, to: usize) -> Self {
        assert!(from <= to, "view range starts at {from} but ends at {to}");
        assert!(to <= arr.len(), "view end {to} out of bounds (len {})", arr.len());
        Self { arr, from, to }
    }

    /// Returns the number of elements covered by the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.to - self.from
    }

    /// Returns `true` if the view covers no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.to == self.from
    }

    /// Returns the element at `i` within the view, or `None` if out of range.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&'a T> {
        if i < self.len() {
            Some(&self.arr[self.from + i])
        } else {
            None
        }
    }

    /// Re-slices into a narrower view; offsets are relative to this view.
    ///
    /// # Panics
    ///
    /// Panics if `from > to` or `to > len`.
    pub fn view(&self, from: usize, to: usize) -> ArrayView<'a, T> {
        assert!(to <= self.len(), "view end {to} out of bounds (len {})", self.len());
        ArrayView::new(self.arr, self.from + from, self.from + to)
    }

    /// Re-slices from `from` to the end of this view.
    pub fn view_from(&self, from: usize) -> ArrayView<'a, T> {
        self.view(from, self.len())
    }

    /// Returns the underlying array.
    #[inline]
    pub fn source(&self) -> &'a Array<T> {
        self.arr
    }

    /// Offset of the view's first element within the source array.
    #[inline]
    pub fn offset(&self) -> usize {
        self.from
    }

    /// The covered range as a plain slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        &self.arr.as_slice()[self.from..self.to]
    }

    /// Iterates over the covered elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}

impl<T> Index<usize> for ArrayView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        assert!(i < self.len(), "view index {i} out of bounds (len {})", self.len());
        &self.arr[self.from + i]
    }
}

impl<T: PartialEq> PartialEq for ArrayView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &ArrayView<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writable view over a contiguous sub-range of an [`Array`].
///
/// Holds the range as a mutable slice, so two views of the same array can
/// coexist only when they are disjoint (obtained via [`split_at`]).
///
/// [`split_at`]: ArrayViewMut::split_at
pub struct ArrayViewMut<'a, T> {
    slice: &'a mut [T],
}

impl<'a, T> ArrayViewMut<'a, T> {
    /// Wraps a mutable slice of the source array.
    pub fn new(slice: &'a mut [T]) -> Self {
        Self { slice }
    }

    /// Returns the number of elements covered by the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.slice.len()
    }

    /// Returns `true` if the view covers no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    /// Swaps the elements at `i` and `j`.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.slice.swap(i, j);
    }

    /// Returns the first element, or `None` if the view is empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.slice.first()
    }

    /// Returns the last element, or `None` if the view is empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.slice.last()
    }

    /// Re-slices into a narrower view, consuming this one; offsets are
    /// relative to this view.
    ///
    /// # Panics
    ///
    /// Panics if `from > to` or `to > len`.
    pub fn view(self, from: usize, to: usize) -> ArrayViewMut<'a, T> {
        ArrayViewMut::new(&mut self.slice[from..to])
    }

    /// Splits into two disjoint views, `[0, mid)` and `[mid, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `mid > len`.
    pub fn split_at(self, mid: usize) -> (ArrayViewMut<'a, T>, ArrayViewMut<'a, T>) {
        let (left, right) = self.slice.split_at_mut(mid);
        (ArrayViewMut::new(left), ArrayViewMut::new(right))
    }

    /// Reborrows as a shorter-lived view, leaving this one usable afterwards.
    pub fn reborrow(&mut self) -> ArrayViewMut<'_, T> {
        ArrayViewMut::new(self.slice)
    }

    /// The covered range as a plain slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.slice
    }

    /// Iterates over the covered elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slice.iter()
    }
}

impl<T> Index<usize> for ArrayViewMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.slice[i]
    }
}

impl<T> IndexMut<usize> for ArrayViewMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.slice[i]
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
